//! Plain-text token listing: one `<kind>: <text> (Line <line>)` line per token.

use crate::assign::formats::registry::{FormatError, Formatter, ProcessingStage};
use crate::assign::lexing::Token;

pub struct SimpleTokenFormatter;

impl Formatter for SimpleTokenFormatter {
    fn name(&self) -> &str {
        "token-simple"
    }

    fn stage(&self) -> ProcessingStage {
        ProcessingStage::Tokens
    }

    fn serialize_tokens(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(tokens.iter().map(|token| format!("{}\n", token)).collect())
    }

    fn description(&self) -> &str {
        "One line per token: kind, text and line number"
    }
}
