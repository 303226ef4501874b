//! Run-length check: no symbol may repeat four or more times in a row.

use super::{Check, ValidationError};

/// Longest permitted run of a single symbol.
const MAX_RUN: usize = 3;

/// Rejects any symbol repeated more than [`MAX_RUN`] times consecutively.
///
/// A counter increments while the current byte equals the previous one and
/// short-circuits as soon as the run grows past the limit, so "MMMM" is
/// rejected without scanning the rest of the string.
pub struct RunLengthCheck;

impl Check for RunLengthCheck {
    fn name(&self) -> &'static str {
        "run-length"
    }

    fn run(&self, text: &str) -> Result<(), ValidationError> {
        let bytes = text.as_bytes();
        let mut run_start = 0;
        let mut run_len = 1;

        for i in 1..bytes.len() {
            if bytes[i] == bytes[i - 1] {
                run_len += 1;
                if run_len > MAX_RUN {
                    return Err(ValidationError::RunTooLong {
                        symbol: bytes[run_start] as char,
                        offset: run_start,
                    });
                }
            } else {
                run_start = i;
                run_len = 1;
            }
        }

        Ok(())
    }
}
