//! JSON output for both stages.
//!
//! Tokens go through serde_json directly. Statement trees can nest one level per
//! operator, deeper than a recursive serializer can follow, so they are written
//! compactly from an explicit work stack, with serde_json only quoting labels.

use crate::assign::formats::registry::{FormatError, Formatter, ProcessingStage};
use crate::assign::lexing::Token;
use crate::assign::parsing::Node;

pub struct TokensJsonFormatter;

impl Formatter for TokensJsonFormatter {
    fn name(&self) -> &str {
        "token-json"
    }

    fn stage(&self) -> ProcessingStage {
        ProcessingStage::Tokens
    }

    fn serialize_tokens(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(tokens)?)
    }

    fn description(&self) -> &str {
        "Tokens as a JSON array, with byte spans"
    }
}

pub struct StatementsJsonFormatter;

impl Formatter for StatementsJsonFormatter {
    fn name(&self) -> &str {
        "ast-json"
    }

    fn stage(&self) -> ProcessingStage {
        ProcessingStage::Ast
    }

    fn serialize_statements(&self, statements: &[Node]) -> Result<String, FormatError> {
        write_statements(statements)
    }

    fn description(&self) -> &str {
        "Statement trees as a JSON array of {label, children} objects"
    }
}

enum Piece<'a> {
    Node(&'a Node),
    Text(&'static str),
}

fn push_nodes<'a>(pending: &mut Vec<Piece<'a>>, nodes: &'a [Node]) {
    for (i, node) in nodes.iter().enumerate().rev() {
        pending.push(Piece::Node(node));
        if i > 0 {
            pending.push(Piece::Text(","));
        }
    }
}

/// `[{"label": .., "children": [..]}, ..]`, one object per node.
fn write_statements(statements: &[Node]) -> Result<String, FormatError> {
    let mut out = String::from("[");
    let mut pending = vec![Piece::Text("]")];
    push_nodes(&mut pending, statements);

    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Node(node) => {
                out.push_str("{\"label\":");
                out.push_str(&serde_json::to_string(node.label())?);
                out.push_str(",\"children\":[");
                pending.push(Piece::Text("]}"));
                push_nodes(&mut pending, node.children());
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::parsing::parse_source;
    use serde_json::{json, Value};

    #[test]
    fn test_tokens_json() {
        let tokens = crate::assign::lexing::tokenize("n = 2 ;").unwrap();
        let out = TokensJsonFormatter.serialize_tokens(&tokens).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value[2],
            json!({"kind": "NUMBER", "text": "2", "line": 1, "span": {"start": 4, "end": 5}})
        );
    }

    #[test]
    fn test_statements_json() {
        let statements = parse_source("n = a / 2 ;").unwrap();
        let out = StatementsJsonFormatter
            .serialize_statements(&statements)
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!([{
                "label": "=",
                "children": [
                    {"label": "n", "children": []},
                    {"label": "/", "children": [
                        {"label": "a", "children": []},
                        {"label": "2", "children": []}
                    ]}
                ]
            }])
        );
    }

    #[test]
    fn test_statements_json_empty() {
        assert_eq!(StatementsJsonFormatter.serialize_statements(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_statements_json_long_chain() {
        let source = format!("x = 0{} ;", " * 2".repeat(100_000));
        let statements = parse_source(&source).unwrap();
        let out = StatementsJsonFormatter
            .serialize_statements(&statements)
            .unwrap();
        let head = r#"[{"label":"=","children":[{"label":"x","children":[]},{"label":"*""#;
        let tail = r#"{"label":"2","children":[]}]}]}]"#;
        assert!(out.starts_with(head));
        assert!(out.ends_with(tail));
        assert_eq!(out.matches(r#""label""#).count(), 200_003);
    }
}
