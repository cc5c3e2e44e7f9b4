//! Command-line interface for assign
//! Runs the lexer and parser interactively or over a file.
//!
//! Usage:
//!   assign [repl]                        - Interactive session (default)
//!   assign run `<path>` [--format `<f>`]     - Parse a file (or `-` for stdin) and print the trees
//!   assign tokens `<path>` [--format `<f>`]  - Lex a file and print the tokens
//!   assign formats                       - List available output formats

use assign_parser::assign::config::{AssignConfig, Loader};
use assign_parser::assign::formats::{FormatRegistry, ProcessingStage};
use assign_parser::assign::pipeline::PipelineExecutor;
use assign_parser::assign::repl;
use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "assign",
    version,
    about = "Lexer and parser for `name = expression ;` statements"
)]
struct Cli {
    /// TOML file layered over the built-in defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Lexer engine: logos or reference
    #[arg(long, global = true)]
    engine: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read lines from stdin, re-running the whole buffer after each one
    Repl,
    /// Lex and parse a file, printing its statement trees
    Run {
        /// Path to the source file, or `-` for stdin
        path: String,
        /// Output format (defaults to output.tree_format)
        #[arg(long, short = 'f')]
        format: Option<String>,
    },
    /// Lex a file, printing its tokens
    Tokens {
        /// Path to the source file, or `-` for stdin
        path: String,
        /// Output format (defaults to output.token_format)
        #[arg(long, short = 'f')]
        format: Option<String>,
    },
    /// List available output formats
    Formats,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => handle_repl_command(&config),
        Command::Run { path, format } => {
            let format = format.unwrap_or_else(|| config.output.tree_format.clone());
            handle_execute_command(&config, &path, &format, ProcessingStage::Ast);
        }
        Command::Tokens { path, format } => {
            let format = format.unwrap_or_else(|| config.output.token_format.clone());
            handle_execute_command(&config, &path, &format, ProcessingStage::Tokens);
        }
        Command::Formats => handle_formats_command(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AssignConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Some(engine) = &cli.engine {
        loader = loader.set_override("lexer.engine", engine.as_str())?;
    }
    loader.build()
}

/// Handle the repl command
fn handle_repl_command(config: &AssignConfig) {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = repl::run(stdin.lock(), stdout.lock(), config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the run and tokens commands
fn handle_execute_command(config: &AssignConfig, path: &str, format: &str, stage: ProcessingStage) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let executor = PipelineExecutor::with_engine(config.lexer.engine);
    if let Err(e) = executor.formats().get_for_stage(format, stage) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    tracing::info!(path, format, engine = %executor.engine(), "executing");

    let output = executor
        .execute_and_serialize(&source, format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}
