//! Validator: aggregates the structural checks into a single verdict.
//!
//! The checks run in a fixed order (charset, run-length, pairs, triples)
//! and the first failure wins. Later checks assume nothing that earlier
//! checks establish, so [`run_checks`] can also fan out every check over
//! unvalidated input for diagnostic output.

use crate::checks::{
    Check, CharsetCheck, PairCheck, RunLengthCheck, TripleCheck, ValidationError,
};

/// Validate a candidate numeral, reporting the first defect.
///
/// The grammar check is the sole authority on validity: a structurally
/// valid but non-canonical string is accepted here even though the
/// encoder would never produce it.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    CharsetCheck.run(text)?;
    RunLengthCheck.run(text)?;
    PairCheck.run(text)?;
    TripleCheck.run(text)?;
    Ok(())
}

/// Check whether a candidate string is a well-formed Roman numeral.
pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}

/// Outcome of a single structural check, for diagnostic rendering.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Short check name, e.g. "charset".
    pub check: &'static str,

    /// The check's verdict on the input.
    pub result: Result<(), ValidationError>,
}

/// Run every structural check against the input, regardless of earlier
/// failures, and collect the per-check outcomes in evaluation order.
pub fn run_checks(text: &str) -> Vec<CheckOutcome> {
    let checks: [&dyn Check; 4] = [&CharsetCheck, &RunLengthCheck, &PairCheck, &TripleCheck];

    checks
        .iter()
        .map(|check| CheckOutcome {
            check: check.name(),
            result: check.run(text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_numerals_are_valid() {
        for numeral in ["I", "III", "XIV", "XLIX", "MCMXCIV", "MMMCMXCIX"] {
            assert!(is_valid(numeral), "{numeral} should be valid");
        }
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid(""));
        assert_eq!(validate(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_foreign_characters_are_invalid() {
        assert!(!is_valid("IIA"));
        assert!(!is_valid("xiv"));
    }

    #[test]
    fn test_overlong_run_is_invalid() {
        assert!(!is_valid("IIII"));
        assert!(is_valid("III"));
    }

    #[test]
    fn test_disallowed_pair_is_invalid() {
        // V and X are both valid symbols; VX is not a permitted pair.
        assert!(!is_valid("VX"));
    }

    #[test]
    fn test_forbidden_triples_are_invalid() {
        assert!(!is_valid("IXI"));
        assert!(!is_valid("IIX"));
    }

    #[test]
    fn test_first_failure_wins() {
        // "IIIIA" trips both charset and run-length; charset runs first.
        assert_eq!(
            validate("IIIIA"),
            Err(ValidationError::NotASymbol { ch: 'A', offset: 4 })
        );
    }

    #[test]
    fn test_run_checks_reports_every_check() {
        let outcomes = run_checks("IIX");
        let names: Vec<&str> = outcomes.iter().map(|o| o.check).collect();
        assert_eq!(names, vec!["charset", "run-length", "pairs", "triples"]);

        // Only the triple check should object to IIX.
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_ok());
        assert!(outcomes[2].result.is_ok());
        assert!(outcomes[3].result.is_err());
    }

    #[test]
    fn test_run_checks_keeps_going_after_a_failure() {
        let outcomes = run_checks("");
        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1].result.is_ok());
    }
}
