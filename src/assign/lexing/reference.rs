//! Reference lexer: the ordered token table, tried class by class.
//!
//! At every position each pattern is anchored and tried in declaration order; the first
//! that matches claims the text. This is slower than the DFA but reads exactly like the
//! class list in the module docs, which makes it the arbiter when the engines disagree.

use crate::assign::lexing::common::{char_at, LexError, Lexer, TokenSink};
use crate::assign::lexing::tokens::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Token classes and their patterns, in priority order.
pub const TOKEN_CLASSES: &[(TokenKind, &str)] = &[
    (TokenKind::Number, r"\d+(\.\d*)?"),
    (TokenKind::Assign, r"="),
    (TokenKind::End, r";"),
    (TokenKind::Id, r"[A-Za-z_]\w*"),
    (TokenKind::Op, r"[+\-*/]"),
    (TokenKind::Newline, r"\n"),
    (TokenKind::Skip, r"[ \t]+"),
    (TokenKind::Comment, r"#.*"),
    (TokenKind::Mismatch, r"."),
];

static COMPILED_CLASSES: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    TOKEN_CLASSES
        .iter()
        .map(|(kind, pattern)| (*kind, Regex::new(&format!("^(?:{})", pattern)).unwrap()))
        .collect()
});

/// Ordered-table lexer engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceLexer;

impl ReferenceLexer {
    /// The first class matching at the start of `rest`, with the match length.
    fn classify(rest: &str) -> Option<(TokenKind, usize)> {
        COMPILED_CLASSES
            .iter()
            .find_map(|(kind, regex)| regex.find(rest).map(|m| (*kind, m.end())))
    }
}

impl Lexer for ReferenceLexer {
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let mut sink = TokenSink::new();
        let mut pos = 0;

        while pos < source.len() {
            let (kind, len) = Self::classify(&source[pos..])
                .unwrap_or((TokenKind::Mismatch, char_at(source, pos).len()));
            let end = pos + len;
            sink.push(kind, &source[pos..end], pos..end)?;
            pos = end;
        }

        let tokens = sink.finish();
        tracing::debug!(engine = "reference", count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}
