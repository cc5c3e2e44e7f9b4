//! Pipeline executor that runs the lexer and parser and serializes their output

use crate::assign::formats::{FormatError, FormatRegistry, ProcessingStage};
use crate::assign::lexing::{LexError, Lexer, LexerEngine, Token};
use crate::assign::parsing::{self, Node, SyntaxError};
use thiserror::Error;

/// Errors during pipeline execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ExecutionError {
    /// Source line the error points at, when it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ExecutionError::Lex(err) => Some(err.line()),
            ExecutionError::Syntax(err) => Some(err.line),
            ExecutionError::Format(_) => None,
        }
    }
}

/// Output from a complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub tokens: Vec<Token>,
    pub statements: Vec<Node>,
}

/// Runs source buffers through the lexer and parser
pub struct PipelineExecutor {
    engine: LexerEngine,
    lexer: Box<dyn Lexer + Send + Sync>,
    formats: FormatRegistry,
}

impl PipelineExecutor {
    /// Create an executor with the default lexer engine and built-in formats
    pub fn new() -> Self {
        Self::with_engine(LexerEngine::default())
    }

    pub fn with_engine(engine: LexerEngine) -> Self {
        PipelineExecutor {
            engine,
            lexer: engine.lexer(),
            formats: FormatRegistry::with_defaults(),
        }
    }

    pub fn engine(&self) -> LexerEngine {
        self.engine
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    /// Stage 1: tokenize the whole source.
    pub fn lex(&self, source: &str) -> Result<Vec<Token>, ExecutionError> {
        Ok(self.lexer.tokenize(source)?)
    }

    /// Stage 2: parse tokens produced by [lex](Self::lex).
    pub fn parse(&self, tokens: &[Token]) -> Result<Vec<Node>, ExecutionError> {
        Ok(parsing::parse(tokens)?)
    }

    /// Run both stages.
    pub fn execute(&self, source: &str) -> Result<ExecutionOutput, ExecutionError> {
        let tokens = self.lex(source)?;
        let statements = self.parse(&tokens)?;
        Ok(ExecutionOutput { tokens, statements })
    }

    /// Run as far as `format` needs and serialize that stage.
    ///
    /// Token formats only lex, so a source with syntax errors can still be listed.
    pub fn execute_and_serialize(
        &self,
        source: &str,
        format: &str,
    ) -> Result<String, ExecutionError> {
        let formatter = self
            .formats
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;

        let tokens = self.lex(source)?;
        let rendered = match formatter.stage() {
            ProcessingStage::Tokens => formatter.serialize_tokens(&tokens)?,
            ProcessingStage::Ast => formatter.serialize_statements(&self.parse(&tokens)?)?,
        };
        Ok(rendered)
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute() {
        let output = PipelineExecutor::new().execute("a = 1 ;\nb = a * 2 ;\n").unwrap();
        assert_eq!(output.tokens.len(), 10);
        assert_eq!(output.statements.len(), 2);
        assert_eq!(output.statements[1].to_sexpr(), "(= b (* a 2))");
    }

    #[test]
    fn test_execute_empty() {
        let output = PipelineExecutor::new().execute("").unwrap();
        assert!(output.tokens.is_empty());
        assert!(output.statements.is_empty());
    }

    #[test]
    fn test_engines_produce_same_output() {
        let source = "speed = distance / time ; # units\nboost = speed * 1.5 ;\n";
        assert_eq!(
            PipelineExecutor::with_engine(LexerEngine::Logos).execute(source),
            PipelineExecutor::with_engine(LexerEngine::Reference).execute(source)
        );
    }

    #[test]
    fn test_token_format_skips_parsing() {
        let out = PipelineExecutor::new()
            .execute_and_serialize("x = ;", "token-simple")
            .unwrap();
        assert_eq!(out, "ID: x (Line 1)\nASSIGN: = (Line 1)\nEND: ; (Line 1)\n");
    }

    #[test]
    fn test_ast_format_reports_syntax_error() {
        let err = PipelineExecutor::new()
            .execute_and_serialize("x = ;", "ast-outline")
            .unwrap_err();
        assert_eq!(err, ExecutionError::Syntax(SyntaxError::expected_term(1)));
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_unknown_format() {
        let err = PipelineExecutor::new()
            .execute_and_serialize("x = 1 ;", "xml")
            .unwrap_err();
        assert_eq!(err.to_string(), "Format 'xml' not found");
        assert_eq!(err.line(), None);
    }
}
