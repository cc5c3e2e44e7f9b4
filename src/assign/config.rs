//! Configuration loading.
//!
//! `defaults/assign.default.toml` is embedded into the binary so docs and runtime
//! behavior stay in sync. Callers layer user files and key overrides on top of those
//! defaults via [Loader] before deserializing into [AssignConfig].

use crate::assign::lexing::LexerEngine;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/assign.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignConfig {
    pub lexer: LexerConfig,
    pub output: OutputConfig,
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexerConfig {
    pub engine: LexerEngine,
}

/// What gets printed after each run, and in which format.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub show_tokens: bool,
    pub show_tree: bool,
    pub token_format: String,
    pub tree_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplConfig {
    pub banner: String,
    pub tree_header: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AssignConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AssignConfig, ConfigError> {
    Loader::new().build()
}
