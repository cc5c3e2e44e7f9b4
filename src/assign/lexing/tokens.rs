//! Token types shared by both lexer engines and consumed by the parser.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The closed set of token classes.
///
/// NEWLINE, SKIP, COMMENT and MISMATCH only exist inside the lexer; they never reach
/// the emitted token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Number,
    Assign,
    End,
    Id,
    Op,
    Newline,
    Skip,
    Comment,
    Mismatch,
}

impl TokenKind {
    /// Every kind, in scan priority order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Number,
        TokenKind::Assign,
        TokenKind::End,
        TokenKind::Id,
        TokenKind::Op,
        TokenKind::Newline,
        TokenKind::Skip,
        TokenKind::Comment,
        TokenKind::Mismatch,
    ];

    /// The upper-case spelling used in output and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::End => "END",
            TokenKind::Id => "ID",
            TokenKind::Op => "OP",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Skip => "SKIP",
            TokenKind::Comment => "COMMENT",
            TokenKind::Mismatch => "MISMATCH",
        }
    }

    /// Whether tokens of this kind appear in lexer output.
    pub fn is_emitted(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Assign | TokenKind::End | TokenKind::Id | TokenKind::Op
        )
    }

    /// Whether this kind can stand alone as an expression term.
    pub fn is_term(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Id)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit.
///
/// `line` is the 1-based line on which the match began. `span` is the byte range of
/// the match in the source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, span: Range<usize>) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (Line {})", self.kind, self.text, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Id, "rate", 3, 10..14);
        assert_eq!(token.to_string(), "ID: rate (Line 3)");
    }

    #[test]
    fn test_emitted_kinds() {
        let emitted: Vec<_> = TokenKind::ALL
            .iter()
            .filter(|kind| kind.is_emitted())
            .collect();
        assert_eq!(
            emitted,
            vec![
                &TokenKind::Number,
                &TokenKind::Assign,
                &TokenKind::End,
                &TokenKind::Id,
                &TokenKind::Op
            ]
        );
    }

    #[test]
    fn test_term_kinds() {
        let terms: Vec<_> = TokenKind::ALL.iter().filter(|kind| kind.is_term()).collect();
        assert_eq!(terms, vec![&TokenKind::Number, &TokenKind::Id]);
    }

    #[test]
    fn test_serializes_kind_upper_case() {
        let token = Token::new(TokenKind::Number, "4.", 1, 0..2);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["kind"], "NUMBER");
        assert_eq!(json["text"], "4.");
        assert_eq!(json["span"]["end"], 2);
    }
}
