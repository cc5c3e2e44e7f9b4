//! Common lexer module
//!
//! Shared interfaces for the lexer engines: the [Lexer] trait, the error type, engine
//! selection, and the [TokenSink] both engines feed raw matches into.

use crate::assign::lexing::tokens::{Token, TokenKind};
use serde::Deserialize;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that no token class accepts.
    #[error("Unexpected character \"{character}\" at line {line}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        /// Byte offset of the character in the source.
        offset: usize,
    },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }
}

/// Trait for lexer implementations
pub trait Lexer {
    /// Tokenize the whole source. No tokens are returned if any character is rejected.
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError>;

    /// Short name used in configuration and logs.
    fn name(&self) -> &'static str;
}

/// Which scanning engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexerEngine {
    #[default]
    Logos,
    Reference,
}

impl LexerEngine {
    pub fn lexer(self) -> Box<dyn Lexer + Send + Sync> {
        match self {
            LexerEngine::Logos => Box::new(super::LogosLexer),
            LexerEngine::Reference => Box::new(super::ReferenceLexer),
        }
    }
}

impl fmt::Display for LexerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerEngine::Logos => f.write_str("logos"),
            LexerEngine::Reference => f.write_str("reference"),
        }
    }
}

/// Collects raw matches in source order and applies the per-class rules: newlines
/// advance the line counter, whitespace and comments are dropped, mismatches fail.
#[derive(Debug)]
pub(crate) struct TokenSink {
    tokens: Vec<Token>,
    line: usize,
}

impl TokenSink {
    pub(crate) fn new() -> Self {
        TokenSink {
            tokens: Vec::new(),
            line: 1,
        }
    }

    pub(crate) fn push(
        &mut self,
        kind: TokenKind,
        text: &str,
        span: Range<usize>,
    ) -> Result<(), LexError> {
        match kind {
            TokenKind::Newline => self.line += 1,
            TokenKind::Skip | TokenKind::Comment => {}
            TokenKind::Mismatch => {
                return Err(LexError::UnexpectedCharacter {
                    // An empty mismatch cannot come out of either engine
                    character: text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
                    line: self.line,
                    offset: span.start,
                });
            }
            _ => {
                tracing::trace!(kind = %kind, text, line = self.line, "token");
                self.tokens.push(Token::new(kind, text, self.line, span));
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<Token> {
        self.tokens
    }
}

/// The single character starting at `offset`, as a slice of `source`.
pub(crate) fn char_at(source: &str, offset: usize) -> &str {
    let rest = &source[offset..];
    let len = rest.chars().next().map(char::len_utf8).unwrap_or(0);
    &rest[..len]
}
