//! Syntax errors raised by the parser.

use crate::assign::lexing::TokenKind;
use thiserror::Error;

/// A grammar violation, positioned at the offending token's line (or at the last
/// token's line when input ran out).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        SyntaxError {
            message: message.into(),
            line,
        }
    }

    /// A term position held something other than NUMBER or ID.
    pub fn expected_term(line: usize) -> Self {
        Self::new("Expected a number or identifier", line)
    }

    /// A specific token kind was required.
    pub fn expected_token(kind: TokenKind, line: usize) -> Self {
        Self::new(format!("Expected token {}", kind), line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SyntaxError::expected_term(4).to_string(),
            "Expected a number or identifier at line 4"
        );
        assert_eq!(
            SyntaxError::expected_token(TokenKind::End, 2).to_string(),
            "Expected token END at line 2"
        );
    }
}
