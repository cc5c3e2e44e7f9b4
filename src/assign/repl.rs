//! Interactive line-by-line driver.
//!
//! A [Session] accumulates input lines into one buffer and, after every line, runs the
//! whole buffer through the pipeline again. The first blank line ends the session.
//! Errors are reported and the session keeps going; the offending line stays in the
//! buffer, so every later run reports the same error until the session ends.

use crate::assign::config::AssignConfig;
use crate::assign::formats::ProcessingStage;
use crate::assign::lexing::Token;
use crate::assign::parsing::Node;
use crate::assign::pipeline::{ExecutionError, PipelineExecutor};
use std::io::{BufRead, Write};

/// Result of one run over the accumulated buffer.
///
/// A lexical error leaves both stages empty. A syntax error keeps the tokens, which
/// are shown before parsing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub tokens: Option<Vec<Token>>,
    pub statements: Option<Vec<Node>>,
    pub error: Option<ExecutionError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A blank line was entered.
    Finished,
    Report(Report),
}

pub struct Session {
    executor: PipelineExecutor,
    buffer: String,
    lines: usize,
}

impl Session {
    pub fn new(executor: PipelineExecutor) -> Self {
        Session {
            executor,
            buffer: String::new(),
            lines: 0,
        }
    }

    pub fn executor(&self) -> &PipelineExecutor {
        &self.executor
    }

    /// Everything fed so far, each line newline-terminated.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append one line (without its terminator) and re-run the whole buffer.
    pub fn feed(&mut self, line: &str) -> Step {
        if line.trim().is_empty() {
            tracing::debug!(lines = self.lines, "session finished");
            return Step::Finished;
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self.lines += 1;
        tracing::debug!(lines = self.lines, bytes = self.buffer.len(), "re-running buffer");

        Step::Report(self.run())
    }

    fn run(&self) -> Report {
        let tokens = match self.executor.lex(&self.buffer) {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::debug!(%err, "lexing failed");
                return Report {
                    tokens: None,
                    statements: None,
                    error: Some(err),
                };
            }
        };
        match self.executor.parse(&tokens) {
            Ok(statements) => Report {
                tokens: Some(tokens),
                statements: Some(statements),
                error: None,
            },
            Err(err) => {
                tracing::debug!(%err, "parsing failed");
                Report {
                    tokens: Some(tokens),
                    statements: None,
                    error: Some(err),
                }
            }
        }
    }
}

/// Drive a session from `input` to `output` until a blank line or end of input.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &AssignConfig,
) -> crate::assign::Result<()> {
    let executor = PipelineExecutor::with_engine(config.lexer.engine);
    // Fail on a bad format name before reading any input.
    executor
        .formats()
        .get_for_stage(&config.output.token_format, ProcessingStage::Tokens)?;
    executor
        .formats()
        .get_for_stage(&config.output.tree_format, ProcessingStage::Ast)?;

    let mut session = Session::new(executor);
    writeln!(output, "{}", config.repl.banner)?;

    for line in input.lines() {
        let line = line?;
        match session.feed(&line) {
            Step::Finished => break,
            Step::Report(report) => render(&mut output, session.executor(), &report, config)?,
        }
        output.flush()?;
    }
    tracing::info!(lines = session.lines, "session closed");
    Ok(())
}

fn render<W: Write>(
    output: &mut W,
    executor: &PipelineExecutor,
    report: &Report,
    config: &AssignConfig,
) -> crate::assign::Result<()> {
    let formats = executor.formats();
    if let (true, Some(tokens)) = (config.output.show_tokens, &report.tokens) {
        write!(
            output,
            "{}",
            formats.serialize_tokens(tokens, &config.output.token_format)?
        )?;
    }
    if let (true, Some(statements)) = (config.output.show_tree, &report.statements) {
        writeln!(output)?;
        writeln!(output, "{}", config.repl.tree_header)?;
        write!(
            output,
            "{}",
            formats.serialize_statements(statements, &config.output.tree_format)?
        )?;
    }
    if let Some(err) = &report.error {
        writeln!(output, "{}", err)?;
    }
    Ok(())
}
