//! Output format implementations for token and tree serialization
//!
//! Formats are named `<stage>-<style>`:
//! - Token stage: `token-simple`, `token-json`
//! - Tree stage: `ast-outline`, `ast-treeviz`, `ast-sexpr`, `ast-json`

pub mod json;
pub mod outline;
pub mod registry;
pub mod tokens;
pub mod treeviz;

pub use json::{StatementsJsonFormatter, TokensJsonFormatter};
pub use outline::{OutlineFormatter, SexprFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter, ProcessingStage};
pub use tokens::SimpleTokenFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter};
