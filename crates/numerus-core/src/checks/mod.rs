//! Structural checks over candidate numeral strings.
//!
//! Roman numeral grammar is not captured here by a value-weighted parse.
//! Instead four independent structural filters run over the raw text:
//! charset membership, run length, the permitted-pair enumeration, and
//! the forbidden-triple enumeration. The pair and triple sets are closed
//! lists, authoritative for the 1-3999 range; they are not derived from
//! first principles and must not be "fixed" piecemeal.
//!
//! ## Check Independence
//!
//! - No check may read another check's outcome
//! - No shared mutable state between checks
//! - Each check is total over arbitrary input, including text the charset
//!   check would reject

mod charset;
mod pairs;
mod runs;
mod triples;

pub use charset::CharsetCheck;
pub use pairs::PairCheck;
pub use runs::RunLengthCheck;
pub use triples::TripleCheck;

use serde::Serialize;
use thiserror::Error;

/// Why a candidate string is not a well-formed Roman numeral.
///
/// Each variant names the check that rejected the input and carries the
/// offending fragment with its byte offset.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("numeral is empty")]
    Empty,

    #[error("character {ch:?} at offset {offset} is not a numeral symbol")]
    NotASymbol { ch: char, offset: usize },

    #[error("symbol {symbol:?} repeats four or more times at offset {offset}")]
    RunTooLong { symbol: char, offset: usize },

    #[error("pair {pair:?} at offset {offset} is not a permitted combination")]
    DisallowedPair { pair: String, offset: usize },

    #[error("sequence {triple:?} at offset {offset} is a forbidden combination")]
    ForbiddenTriple { triple: String, offset: usize },
}

/// Trait implemented by all structural checks.
pub trait Check {
    /// Short name used in diagnostic output.
    fn name(&self) -> &'static str;

    /// Run the check against the candidate text.
    ///
    /// Returns the first defect found, scanning left to right.
    fn run(&self, text: &str) -> Result<(), ValidationError>;
}
