//! Encoder: integer value to canonical numeral string.

use crate::NumeralError;

/// Smallest encodable value.
pub const MIN_VALUE: u16 = 1;

/// Largest encodable value.
pub const MAX_VALUE: u16 = 3999;

/// The thirteen denominations greedy reduction draws from, largest first.
/// These are exactly the values for which largest-first reduction is
/// value-optimal in this numeral system, so the output is always the
/// canonical minimal-length form.
const DENOMINATIONS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Encode an integer as its canonical Roman numeral.
///
/// Values outside [`MIN_VALUE`]..=[`MAX_VALUE`] are rejected with
/// [`NumeralError::OutOfRange`]. Each greedy step strictly reduces the
/// remainder and the final 1-denomination guarantees progress, so the
/// loop always terminates; the longest possible output is fifteen
/// symbols (3888, MMMDCCCLXXXVIII).
///
/// # Examples
///
/// ```
/// assert_eq!(numerus_core::encode(1994).unwrap(), "MCMXCIV");
/// ```
pub fn encode(value: u16) -> Result<String, NumeralError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(NumeralError::OutOfRange { value });
    }

    let mut remaining = value;
    let mut numeral = String::new();
    for &(weight, glyphs) in &DENOMINATIONS {
        while remaining >= weight {
            numeral.push_str(glyphs);
            remaining -= weight;
        }
    }

    Ok(numeral)
}
