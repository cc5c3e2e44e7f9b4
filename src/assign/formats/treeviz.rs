//! Treeviz formatter for statement trees
//!
//! One line per node, nesting drawn with box connectors:
//!
//!     └─ =
//!       ├─ x
//!       └─ +
//!         ├─ 1
//!         └─ y

use crate::assign::formats::registry::{FormatError, Formatter, ProcessingStage};
use crate::assign::parsing::Node;

pub fn to_treeviz_str(statements: &[Node]) -> String {
    let mut result = String::new();
    // Pending (node, depth, is_last); `open` holds is_last for each ancestor of the
    // node being drawn, which is all the prefix needs.
    let mut pending: Vec<(&Node, usize, bool)> = Vec::new();
    push_children(&mut pending, statements, 0);
    let mut open: Vec<bool> = Vec::new();

    while let Some((node, depth, is_last)) = pending.pop() {
        open.truncate(depth);
        for &ancestor_last in &open {
            result.push_str(if ancestor_last { "  " } else { "│ " });
        }
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(connector);
        result.push(' ');
        result.push_str(node.label());
        result.push('\n');

        open.push(is_last);
        push_children(&mut pending, node.children(), depth + 1);
    }
    result
}

fn push_children<'a>(
    pending: &mut Vec<(&'a Node, usize, bool)>,
    children: &'a [Node],
    depth: usize,
) {
    for (i, child) in children.iter().enumerate().rev() {
        pending.push((child, depth, i == children.len() - 1));
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "ast-treeviz"
    }

    fn stage(&self) -> ProcessingStage {
        ProcessingStage::Ast
    }

    fn serialize_statements(&self, statements: &[Node]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(statements))
    }

    fn description(&self) -> &str {
        "Box-drawing tree, one line per node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::parsing::parse_source;

    #[test]
    fn test_treeviz() {
        let statements = parse_source("x = 1 + y ;\nz = x - 2 - 3 ;").unwrap();
        insta::assert_snapshot!(to_treeviz_str(&statements), @r"
        ├─ =
        │ ├─ x
        │ └─ +
        │   ├─ 1
        │   └─ y
        └─ =
          ├─ z
          └─ -
            ├─ -
            │ ├─ x
            │ └─ 2
            └─ 3
        ");
    }

    #[test]
    fn test_treeviz_empty() {
        assert_eq!(to_treeviz_str(&[]), "");
    }

    #[test]
    fn test_treeviz_long_chain() {
        let source = format!("x = 0{} ;", " + 1".repeat(5_000));
        let statements = parse_source(&source).unwrap();
        let out = to_treeviz_str(&statements);
        assert_eq!(out.lines().count(), 10_003);
        assert!(out.starts_with("└─ =\n  ├─ x\n  └─ +\n    ├─ +\n"));
        assert!(out.ends_with("└─ 1\n"));
    }
}
