//! Testing helpers
//!
//! Factories for building expected tokens and trees by hand, and small projections
//! that keep assertions short. Shared by unit tests and the integration suites under
//! `tests/`.

pub mod factories {
    use crate::assign::lexing::{Token, TokenKind};
    use crate::assign::parsing::Node;
    use std::ops::Range;

    /// Build a token with an explicit span.
    pub fn mk_token(kind: TokenKind, text: &str, line: usize, span: Range<usize>) -> Token {
        Token::new(kind, text, line, span)
    }

    /// Build a token sequence for parser tests where spans do not matter.
    ///
    /// Each entry is `(kind, text, line)`; spans are laid out back to back.
    pub fn mk_tokens(entries: &[(TokenKind, &str, usize)]) -> Vec<Token> {
        let mut offset = 0;
        entries
            .iter()
            .map(|(kind, text, line)| {
                let span = offset..offset + text.len();
                offset = span.end;
                Token::new(*kind, *text, *line, span)
            })
            .collect()
    }

    pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    pub fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn leaf(label: &str) -> Node {
        Node::leaf(label)
    }

    pub fn binary(label: &str, left: Node, right: Node) -> Node {
        Node::binary(label, left, right)
    }

    /// `name = expr` as a statement tree.
    pub fn assignment(name: &str, expr: Node) -> Node {
        Node::binary("=", Node::leaf(name), expr)
    }
}
