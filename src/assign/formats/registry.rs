//! Format registry for token and tree serialization
//!
//! Each format implements [Formatter] for the stage it understands and is registered
//! with [FormatRegistry] under its name.

use crate::assign::lexing::Token;
use crate::assign::parsing::Node;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Which pipeline stage a format renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Tokens,
    Ast,
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingStage::Tokens => f.write_str("token"),
            ProcessingStage::Ast => f.write_str("ast"),
        }
    }
}

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format exists but renders a different stage
    #[error("Format '{format}' only works with {stage} output")]
    StageMismatch {
        format: String,
        stage: ProcessingStage,
    },
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

/// Trait for output formatters
///
/// Implementors override the serialize method matching their [stage](Formatter::stage);
/// the other one reports a stage mismatch.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "ast-treeviz")
    fn name(&self) -> &str;

    fn stage(&self) -> ProcessingStage;

    fn serialize_tokens(&self, _tokens: &[Token]) -> Result<String, FormatError> {
        Err(self.stage_mismatch())
    }

    fn serialize_statements(&self, _statements: &[Node]) -> Result<String, FormatError> {
        Err(self.stage_mismatch())
    }

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    fn stage_mismatch(&self) -> FormatError {
        FormatError::StageMismatch {
            format: self.name().to_string(),
            stage: self.stage(),
        }
    }
}

/// Registry of formatters keyed by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any previous one with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Look up a format and check it renders `stage`.
    pub fn get_for_stage(
        &self,
        name: &str,
        stage: ProcessingStage,
    ) -> Result<&dyn Formatter, FormatError> {
        let formatter = self
            .get(name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))?;
        if formatter.stage() != stage {
            return Err(formatter.stage_mismatch());
        }
        Ok(formatter)
    }

    pub fn serialize_tokens(&self, tokens: &[Token], format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize_tokens(tokens)
    }

    pub fn serialize_statements(
        &self,
        statements: &[Node],
        format: &str,
    ) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize_statements(statements)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::SimpleTokenFormatter);
        registry.register(super::TokensJsonFormatter);
        registry.register(super::OutlineFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::SexprFormatter);
        registry.register(super::StatementsJsonFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
