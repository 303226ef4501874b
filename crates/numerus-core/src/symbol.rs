//! Numeral symbols and their weights.

use serde::{Deserialize, Serialize};

use crate::checks::ValidationError;

/// One of the seven Roman numeral symbols.
///
/// Ordered by weight so derived `Ord` matches numeric ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

/// All symbols, in ascending weight order.
pub const SYMBOLS: [Symbol; 7] = [
    Symbol::I,
    Symbol::V,
    Symbol::X,
    Symbol::L,
    Symbol::C,
    Symbol::D,
    Symbol::M,
];

impl Symbol {
    /// Parse a single uppercase character into a symbol.
    ///
    /// Returns `None` for anything outside {I, V, X, L, C, D, M};
    /// lowercase input is the caller's problem (the shell upper-cases
    /// before text reaches the core).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// The fixed integer weight of this symbol.
    pub fn weight(self) -> u16 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// The character this symbol is written as.
    pub fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    /// Parse a whole string into symbols, reporting the first character
    /// that is not a numeral symbol.
    pub fn parse_all(text: &str) -> Result<Vec<Symbol>, ValidationError> {
        text.char_indices()
            .map(|(offset, ch)| {
                Symbol::from_char(ch).ok_or(ValidationError::NotASymbol { ch, offset })
            })
            .collect()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_accepts_the_seven_symbols() {
        for sym in SYMBOLS {
            assert_eq!(Symbol::from_char(sym.as_char()), Some(sym));
        }
    }

    #[test]
    fn test_from_char_rejects_everything_else() {
        assert_eq!(Symbol::from_char('A'), None);
        assert_eq!(Symbol::from_char('i'), None);
        assert_eq!(Symbol::from_char('0'), None);
        assert_eq!(Symbol::from_char(' '), None);
    }

    #[test]
    fn test_weights() {
        let weights: Vec<u16> = SYMBOLS.iter().map(|s| s.weight()).collect();
        assert_eq!(weights, vec![1, 5, 10, 50, 100, 500, 1000]);
    }

    #[test]
    fn test_parse_all_round_trips() {
        let symbols = Symbol::parse_all("MCMXCIV").unwrap();
        let rendered: String = symbols.iter().map(|s| s.as_char()).collect();
        assert_eq!(rendered, "MCMXCIV");
    }

    #[test]
    fn test_parse_all_reports_offset_of_bad_char() {
        let err = Symbol::parse_all("XIA").unwrap_err();
        assert_eq!(err, ValidationError::NotASymbol { ch: 'A', offset: 2 });
    }
}
