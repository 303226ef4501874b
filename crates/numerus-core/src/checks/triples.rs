//! Triple-wise check: no contiguous three-symbol window may match the
//! forbidden enumeration.

use lazy_static::lazy_static;
use std::collections::HashSet;

use super::{Check, ValidationError};

/// Three-symbol sequences that survive the pairwise allowlist but are
/// still malformed: two subtractive pairs sharing a symbol (IXI, IVI) and
/// over-long runs disguised by a preceding symbol (IIX, XXL). Closed,
/// authoritative enumeration.
pub static FORBIDDEN_TRIPLES: &[&str] = &[
    "IXI", "IVI", "XLX", "XCX", "CDC", "CMC", "IIX", "XXL", "XXC", "CCM", "IXX", "XCC", "CMM",
];

lazy_static! {
    static ref TRIPLE_SET: HashSet<&'static str> = FORBIDDEN_TRIPLES.iter().copied().collect();
}

/// Rejects the first three-symbol window found in [`FORBIDDEN_TRIPLES`].
pub struct TripleCheck;

impl Check for TripleCheck {
    fn name(&self) -> &'static str {
        "triples"
    }

    fn run(&self, text: &str) -> Result<(), ValidationError> {
        for (offset, window) in text.as_bytes().windows(3).enumerate() {
            let forbidden = std::str::from_utf8(window)
                .map(|triple| TRIPLE_SET.contains(triple))
                .unwrap_or(false);
            if forbidden {
                return Err(ValidationError::ForbiddenTriple {
                    triple: String::from_utf8_lossy(window).into_owned(),
                    offset,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_numerals_pass() {
        assert!(TripleCheck.run("MCMXCIV").is_ok());
        assert!(TripleCheck.run("XLIX").is_ok());
        assert!(TripleCheck.run("CDXCIX").is_ok());
    }

    #[test]
    fn test_shared_subtractive_symbol_rejected() {
        assert_eq!(
            TripleCheck.run("IXI"),
            Err(ValidationError::ForbiddenTriple { triple: "IXI".to_string(), offset: 0 })
        );
        assert!(TripleCheck.run("IVI").is_err());
    }

    #[test]
    fn test_disguised_run_rejected() {
        assert_eq!(
            TripleCheck.run("IIX"),
            Err(ValidationError::ForbiddenTriple { triple: "IIX".to_string(), offset: 0 })
        );
        assert!(TripleCheck.run("XXL").is_err());
    }

    #[test]
    fn test_offset_points_at_window_start() {
        assert_eq!(
            TripleCheck.run("MIXI"),
            Err(ValidationError::ForbiddenTriple { triple: "IXI".to_string(), offset: 1 })
        );
    }

    #[test]
    fn test_short_input_is_vacuously_ok() {
        assert!(TripleCheck.run("IX").is_ok());
        assert!(TripleCheck.run("").is_ok());
    }
}
