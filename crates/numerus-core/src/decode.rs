//! Decoder: validated numeral string to integer value.

use crate::symbol::Symbol;
use crate::validator::validate;
use crate::NumeralError;

/// Decode a Roman numeral string into its integer value.
///
/// Input is validated first; malformed text is rejected as
/// [`NumeralError::Invalid`] before any arithmetic happens. The scan then
/// walks the symbols left to right with one-symbol lookahead: a symbol
/// whose weight is strictly less than its successor's is subtractive,
/// everything else is additive. The position past the end acts as a
/// terminator of weight zero, so the final symbol is always added.
///
/// # Examples
///
/// ```
/// assert_eq!(numerus_core::decode("MCMXCIV").unwrap(), 1994);
/// ```
pub fn decode(text: &str) -> Result<u16, NumeralError> {
    validate(text)?;
    let symbols = Symbol::parse_all(text)?;

    // Signed accumulator: a leading subtractive symbol drives the running
    // sum negative before the larger weight lands.
    let mut sum: i32 = 0;
    for (i, symbol) in symbols.iter().enumerate() {
        let weight = i32::from(symbol.weight());
        let next = symbols.get(i + 1).map_or(0, |s| i32::from(s.weight()));
        if weight < next {
            sum -= weight;
        } else {
            sum += weight;
        }
    }

    Ok(sum as u16)
}
