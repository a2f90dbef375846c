//! Account batch parsing.

mod parser;
pub mod rules;

pub use parser::{parse_bulk_text, AccountBatchParser, LineClass, LineReport};

use crate::models::account::ParseResult;

/// Trait for batch parsers.
pub trait BatchParser {
    /// Parse a pasted batch. Never fails; unrecognized input yields an empty result.
    fn parse(&self, text: &str) -> ParseResult;
}
