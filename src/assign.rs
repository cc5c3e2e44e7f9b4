//! Main module for assign library functionality
//!
//! Data flows one way: source text goes through [lexing] to produce tokens, the
//! tokens go through [parsing] to produce one tree per statement, and [formats]
//! renders either stage. [pipeline] ties the stages together and [repl] drives
//! them line by line.

pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod repl;
pub mod testing;

pub use error::{Error, Result};
