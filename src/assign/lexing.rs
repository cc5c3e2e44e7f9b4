//! Lexer
//!
//! This module turns raw source text into a flat sequence of classified tokens.
//!
//! Token Classes
//!
//!     Classes are tried in a fixed priority order at every scan position and the first
//!     class whose pattern matches wins:
//!
//!         NUMBER    \d+(\.\d*)?
//!         ASSIGN    =
//!         END       ;
//!         ID        [A-Za-z_]\w*
//!         OP        one of + - * /
//!         NEWLINE   \n
//!         SKIP      one or more spaces or tabs
//!         COMMENT   # through the end of the line
//!         MISMATCH  any other single character
//!
//!     NEWLINE bumps the line counter, SKIP and COMMENT are dropped, and MISMATCH aborts
//!     the whole run with a [LexError]. Only NUMBER, ASSIGN, END, ID and OP are emitted.
//!
//! Engines
//!
//!     There are two interchangeable scanners behind the [Lexer] trait:
//!
//!     - [LogosLexer] (default): a logos DFA. The emitted classes start on disjoint
//!       character sets, so logos' longest-match rule picks the same class as the
//!       priority order above. Anything logos rejects is MISMATCH.
//!     - [ReferenceLexer]: the priority table itself, compiled to anchored regexes and
//!       tried in order. It exists to pin down the semantics the DFA must agree with.

pub mod base_tokenization;
pub mod common;
pub mod reference;
pub mod tokens;

pub use base_tokenization::LogosLexer;
pub use common::{LexError, Lexer, LexerEngine};
pub use reference::ReferenceLexer;
pub use tokens::{Token, TokenKind};

/// Tokenize source text with the default engine.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    LogosLexer.tokenize(source)
}
