//! # numerus-core
//!
//! Deterministic Roman numeral validation and conversion.
//!
//! This crate answers three questions about text and numbers:
//! - Is this string a well-formed Roman numeral?
//! - What integer does this numeral denote?
//! - What is the canonical numeral for this integer?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same input always produces same output
//! 2. **Pure**: no I/O and no shared mutable state; safe to call from any thread
//! 3. **Total**: out-of-domain input is rejected with a typed error, never
//!    a panic or a sentinel value
//! 4. **Bounded**: cost is proportional to input length; encoded output is
//!    at most fifteen symbols
//!
//! ## Example
//!
//! ```rust
//! use numerus_core::{decode, encode, is_valid};
//!
//! assert!(is_valid("MCMXCIV"));
//! assert_eq!(decode("MCMXCIV").unwrap(), 1994);
//! assert_eq!(encode(1994).unwrap(), "MCMXCIV");
//! ```
//!
//! The core expects uppercase ASCII symbols; case normalization is the
//! caller's responsibility.

pub mod checks;
pub mod decode;
pub mod encode;
pub mod symbol;
pub mod validator;

// Re-export the main surface at the crate root
pub use checks::{Check, ValidationError};
pub use decode::decode;
pub use encode::{encode, MAX_VALUE, MIN_VALUE};
pub use symbol::Symbol;
pub use validator::{is_valid, run_checks, validate, CheckOutcome};

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the conversion routines.
///
/// Two terminal conditions and nothing else: malformed numeral text on the
/// decode side, out-of-range values on the encode side. Neither is ever
/// retried or recovered internally.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum NumeralError {
    #[error("invalid Roman numeral: {0}")]
    Invalid(#[from] ValidationError),

    #[error("{value} is outside the representable range 1..=3999")]
    OutOfRange { value: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encode_scenarios() {
        assert_eq!(decode("XIV").unwrap(), 14);
        assert_eq!(encode(14).unwrap(), "XIV");

        assert_eq!(decode("MCMXCIV").unwrap(), 1994);
        assert_eq!(encode(1994).unwrap(), "MCMXCIV");

        assert_eq!(decode("III").unwrap(), 3);
        assert_eq!(encode(3).unwrap(), "III");
    }

    #[test]
    fn test_rejections() {
        assert!(!is_valid("VX"));
        assert!(!is_valid("IIII"));
        assert!(!is_valid("IXI"));
        assert!(!is_valid(""));
        assert!(encode(0).is_err());
        assert!(encode(4000).is_err());
        assert!(decode("MMMM").is_err());
    }

    #[test]
    fn test_round_trip_over_the_whole_domain() {
        // decode(encode(n)) == n and every encoded form passes validation,
        // for every representable value.
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = encode(n).unwrap();
            assert!(is_valid(&numeral), "{n} encoded to invalid {numeral}");
            assert_eq!(decode(&numeral).unwrap(), n, "round trip failed for {n}");
        }
    }

    #[test]
    fn test_error_display() {
        let err = decode("VX").unwrap_err();
        assert!(err.to_string().starts_with("invalid Roman numeral:"));

        let err = encode(4000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "4000 is outside the representable range 1..=3999"
        );
    }

    #[test]
    fn test_errors_serialize_for_reporting() {
        let err = encode(0).unwrap_err();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "out_of_range");
        assert_eq!(json["value"], 0);
    }
}
