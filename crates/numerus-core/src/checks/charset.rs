//! Charset check: every character must be a numeral symbol.

use crate::symbol::Symbol;

use super::{Check, ValidationError};

/// Rejects empty input and any character outside {I, V, X, L, C, D, M}.
pub struct CharsetCheck;

impl Check for CharsetCheck {
    fn name(&self) -> &'static str {
        "charset"
    }

    fn run(&self, text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        Symbol::parse_all(text).map(|_| ())
    }
}
