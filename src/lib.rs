//! # assign-parser
//!
//! Lexer and parser for a small assignment language: statements of the form
//! `identifier = expression ;`, where an expression is a left-associative chain
//! of numbers and identifiers joined by `+ - * /`.
//!
//! The library lives under the [assign] module. The `assign` binary wraps it in an
//! interactive line-by-line session and a one-shot file runner.

pub mod assign;
