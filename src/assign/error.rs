//! Crate-level error type.
//!
//! Component errors stay precise ([LexError], [SyntaxError], ...); this enum is what the
//! driver and the binary deal in.

use crate::assign::formats::FormatError;
use crate::assign::lexing::LexError;
use crate::assign::parsing::SyntaxError;
use crate::assign::pipeline::ExecutionError;
use thiserror::Error;

/// The result of an assign operation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExecutionError> for Error {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::Lex(err) => Error::Lex(err),
            ExecutionError::Syntax(err) => Error::Syntax(err),
            ExecutionError::Format(err) => Error::Format(err),
        }
    }
}
