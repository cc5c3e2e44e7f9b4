//! Parser
//!
//! Recursive-descent parser over the lexer's token sequence. Grammar:
//!
//!     program    := statement*
//!     statement  := ID ASSIGN expression END
//!     expression := term (OP term)*
//!     term       := NUMBER | ID
//!
//! All four operators share one precedence level and associate to the left, so
//! `a - b + c` parses as `(a - b) + c`. Each statement becomes one [Node] tree rooted at
//! `=`. The first error aborts the whole parse; no statements are returned with it.

pub mod error;
pub mod node;
pub mod parser;

pub use error::SyntaxError;
pub use node::Node;
pub use parser::Parser;

use crate::assign::lexing::Token;

/// Parse a token sequence into statement trees, in source order.
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Lex and parse in one step with the default lexer engine.
pub fn parse_source(source: &str) -> crate::assign::Result<Vec<Node>> {
    let tokens = crate::assign::lexing::tokenize(source)?;
    Ok(parse(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::testing::factories::{assignment, binary, leaf};

    #[test]
    fn test_parse_source() {
        let statements = parse_source("a = 1 ;\nb = a * 2 ;\n").unwrap();
        assert_eq!(
            statements,
            vec![
                assignment("a", leaf("1")),
                assignment("b", binary("*", leaf("a"), leaf("2"))),
            ]
        );
    }

    #[test]
    fn test_parse_source_surfaces_lex_errors() {
        let err = parse_source("a = 1 ! ;").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character \"!\" at line 1");
    }
}
