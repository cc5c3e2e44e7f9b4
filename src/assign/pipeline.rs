//! Processing pipeline
//!
//! The pipeline runs two sequential stages over a complete source buffer:
//!
//! 1. **Lexing** - the configured engine turns source into tokens
//! 2. **Parsing** - the recursive-descent parser turns tokens into statement trees
//!
//! Every run starts from scratch; nothing is carried between calls. Interactive
//! callers re-run the whole buffer after each new line.
//!
//! ```rust,ignore
//! use assign_parser::assign::pipeline::PipelineExecutor;
//!
//! let executor = PipelineExecutor::new();
//! let output = executor.execute("x = 1 + 2 ;")?;
//! let outline = executor.execute_and_serialize("x = 1 + 2 ;", "ast-outline")?;
//! ```

pub mod executor;

pub use executor::{ExecutionError, ExecutionOutput, PipelineExecutor};
