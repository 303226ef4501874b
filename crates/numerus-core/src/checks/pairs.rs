//! Pairwise check: every adjacent symbol pair must be on the allowlist.

use lazy_static::lazy_static;
use std::collections::HashSet;

use super::{Check, ValidationError};

/// Every two-symbol combination allowed to appear adjacently in a valid
/// numeral. Closed, authoritative enumeration; membership here says
/// nothing about canonicality.
pub static PERMITTED_PAIRS: &[&str] = &[
    "II", "IX", "IV", "VI", "XX", "XV", "XI", "XL", "XC", "LI", "LV", "LX", "CC", "CI", "CV",
    "CX", "CL", "CD", "CM", "DI", "DV", "DX", "DL", "DC", "MM", "MI", "MV", "MX", "ML", "MC",
    "MD",
];

lazy_static! {
    static ref PAIR_SET: HashSet<&'static str> = PERMITTED_PAIRS.iter().copied().collect();
}

/// Rejects the first adjacent pair that is not in [`PERMITTED_PAIRS`].
///
/// Vacuous for single-character input: the window never forms, so a lone
/// valid symbol passes.
pub struct PairCheck;

impl Check for PairCheck {
    fn name(&self) -> &'static str {
        "pairs"
    }

    fn run(&self, text: &str) -> Result<(), ValidationError> {
        for (offset, window) in text.as_bytes().windows(2).enumerate() {
            let allowed = std::str::from_utf8(window)
                .map(|pair| PAIR_SET.contains(pair))
                .unwrap_or(false);
            if !allowed {
                return Err(ValidationError::DisallowedPair {
                    pair: String::from_utf8_lossy(window).into_owned(),
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
    fn test_canonical_pairs_pass() {
        assert!(PairCheck.run("XIV").is_ok());
        assert!(PairCheck.run("MCMXCIV").is_ok());
        assert!(PairCheck.run("MMMDCCCLXXXVIII").is_ok());
    }

    #[test]
    fn test_single_symbol_is_vacuously_ok() {
        assert!(PairCheck.run("V").is_ok());
        assert!(PairCheck.run("").is_ok());
    }

    #[test]
    fn test_vx_rejected() {
        // Both symbols are valid; the combination is not.
        assert_eq!(
            PairCheck.run("VX"),
            Err(ValidationError::DisallowedPair { pair: "VX".to_string(), offset: 0 })
        );
    }

    #[test]
    fn test_offset_points_at_first_bad_pair() {
        assert_eq!(
            PairCheck.run("XIVL"),
            Err(ValidationError::DisallowedPair { pair: "VL".to_string(), offset: 2 })
        );
    }

    #[test]
    fn test_iix_passes_here() {
        // II and IX are both permitted pairs; rejecting IIX is the
        // triple check's job.
        assert!(PairCheck.run("IIX").is_ok());
    }
}
