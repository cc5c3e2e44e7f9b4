//! Indented outline and s-expression formats for statement trees.

use crate::assign::formats::registry::{FormatError, Formatter, ProcessingStage};
use crate::assign::parsing::Node;

/// Each statement as a tab-indented outline, one line per node.
pub struct OutlineFormatter;

impl Formatter for OutlineFormatter {
    fn name(&self) -> &str {
        "ast-outline"
    }

    fn stage(&self) -> ProcessingStage {
        ProcessingStage::Ast
    }

    fn serialize_statements(&self, statements: &[Node]) -> Result<String, FormatError> {
        Ok(statements.iter().map(Node::outline).collect())
    }

    fn description(&self) -> &str {
        "Tab-indented outline, one line per node"
    }
}

/// One `(op left right)` line per statement.
pub struct SexprFormatter;

impl Formatter for SexprFormatter {
    fn name(&self) -> &str {
        "ast-sexpr"
    }

    fn stage(&self) -> ProcessingStage {
        ProcessingStage::Ast
    }

    fn serialize_statements(&self, statements: &[Node]) -> Result<String, FormatError> {
        Ok(statements
            .iter()
            .map(|statement| format!("{}\n", statement.to_sexpr()))
            .collect())
    }

    fn description(&self) -> &str {
        "One s-expression per statement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::parsing::parse_source;

    #[test]
    fn test_outline_multiple_statements() {
        let statements = parse_source("a = 1 ;\nb = a * 2 ;").unwrap();
        let out = OutlineFormatter.serialize_statements(&statements).unwrap();
        assert_eq!(out, "=\n\ta\n\t1\n=\n\tb\n\t*\n\t\ta\n\t\t2\n");
    }

    #[test]
    fn test_sexpr() {
        let statements = parse_source("a = 1 + 2 - 3 ;\nb = c ;").unwrap();
        let out = SexprFormatter.serialize_statements(&statements).unwrap();
        assert_eq!(out, "(= a (- (+ 1 2) 3))\n(= b c)\n");
    }
}
