//! Recursive-descent parser implementation.

use crate::assign::lexing::{Token, TokenKind};
use crate::assign::parsing::error::SyntaxError;
use crate::assign::parsing::node::Node;

/// Cursor over a borrowed token sequence.
///
/// `pos` always points at the next unconsumed token. A parser is single-use: [parse]
/// consumes it.
///
/// [parse]: Parser::parse
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// `program := statement*`
    pub fn parse(mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut statements = Vec::new();
        while !self.at_end() {
            match self.statement()? {
                Some(statement) => {
                    tracing::trace!(tree = %statement.to_sexpr(), "parsed statement");
                    statements.push(statement);
                }
                // Nothing was consumed; looping again would never terminate.
                None => return Err(self.error_expected(TokenKind::Id)),
            }
        }
        tracing::debug!(
            tokens = self.tokens.len(),
            statements = statements.len(),
            "parsed program"
        );
        Ok(statements)
    }

    /// `statement := ID ASSIGN expression END`
    ///
    /// Yields `None` without consuming anything when the next token is not an ID.
    pub fn statement(&mut self) -> Result<Option<Node>, SyntaxError> {
        if !self.advance_if(TokenKind::Id) {
            return Ok(None);
        }
        let variable = Node::leaf(self.previous_text());
        self.consume(TokenKind::Assign)?;
        let value = self.expression()?;
        self.consume(TokenKind::End)?;
        Ok(Some(Node::binary("=", variable, value)))
    }

    /// `expression := term (OP term)*`, folded to the left.
    pub fn expression(&mut self) -> Result<Node, SyntaxError> {
        let mut left = self.term()?;
        while self.advance_if(TokenKind::Op) {
            let operator = self.previous_text();
            let right = self.term()?;
            left = Node::binary(operator, left, right);
        }
        Ok(left)
    }

    /// `term := NUMBER | ID`
    pub fn term(&mut self) -> Result<Node, SyntaxError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind.is_term() => {
                self.pos += 1;
                Ok(Node::leaf(token.text.as_str()))
            }
            _ => Err(SyntaxError::expected_term(self.error_line())),
        }
    }

    /// Require the next token to be `kind` and step over it.
    pub fn consume(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.advance_if(kind) {
            Ok(())
        } else {
            Err(self.error_expected(kind))
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn advance_if(&mut self, kind: TokenKind) -> bool {
        match self.tokens.get(self.pos) {
            Some(token) if token.is(kind) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Text of the token just consumed. Only called right after a successful advance.
    fn previous_text(&self) -> &'a str {
        let tokens: &'a [Token] = self.tokens;
        tokens[self.pos - 1].text.as_str()
    }

    /// Line of the token under the cursor, or of the last token once input ran out.
    fn error_line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|token| token.line)
            .unwrap_or(1)
    }

    fn error_expected(&self, kind: TokenKind) -> SyntaxError {
        SyntaxError::expected_token(kind, self.error_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::lexing::tokenize;
    use crate::assign::testing::factories::{assignment, binary, leaf, mk_tokens};
    use rstest::rstest;

    fn parse_str(source: &str) -> Result<Vec<Node>, SyntaxError> {
        let tokens = tokenize(source).expect("source should lex");
        Parser::new(&tokens).parse()
    }

    #[test]
    fn test_empty_token_sequence() {
        assert_eq!(Parser::new(&[]).parse().unwrap(), vec![]);
    }

    #[test]
    fn test_single_term() {
        assert_eq!(parse_str("x = 5 ;").unwrap(), vec![assignment("x", leaf("5"))]);
    }

    #[test]
    fn test_left_associative_chain() {
        let statements = parse_str("a = 1 + 2 - 3 ;").unwrap();
        assert_eq!(
            statements,
            vec![assignment(
                "a",
                binary("-", binary("+", leaf("1"), leaf("2")), leaf("3"))
            )]
        );
    }

    #[test]
    fn test_no_precedence_between_operators() {
        // Multiplication does not bind tighter than addition.
        let statements = parse_str("r = a + b * c ;").unwrap();
        assert_eq!(statements[0].to_sexpr(), "(= r (* (+ a b) c))");
    }

    #[test]
    fn test_statement_without_id_yields_nothing() {
        let tokens = mk_tokens(&[(TokenKind::Number, "1", 1), (TokenKind::End, ";", 1)]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.statement().unwrap(), None);
        assert_eq!(parser.position(), 0);
    }

    #[test]
    fn test_program_rejects_statement_without_id() {
        let tokens = mk_tokens(&[
            (TokenKind::Id, "a", 1),
            (TokenKind::Assign, "=", 1),
            (TokenKind::Number, "1", 1),
            (TokenKind::End, ";", 1),
            (TokenKind::Number, "2", 2),
        ]);
        let err = Parser::new(&tokens).parse().unwrap_err();
        assert_eq!(err, SyntaxError::expected_token(TokenKind::Id, 2));
    }

    #[rstest]
    #[case("x = ;", "Expected a number or identifier at line 1")]
    #[case("x = 1", "Expected token END at line 1")]
    #[case("x 1 ;", "Expected token ASSIGN at line 1")]
    #[case("x", "Expected token ASSIGN at line 1")]
    #[case("x =", "Expected a number or identifier at line 1")]
    #[case("x = 1 +", "Expected a number or identifier at line 1")]
    #[case("x = 1 + ;", "Expected a number or identifier at line 1")]
    #[case("x = 1 2 ;", "Expected token END at line 1")]
    #[case("x = = 1 ;", "Expected a number or identifier at line 1")]
    #[case("a = 1 ;\nb = 2\n", "Expected token END at line 2")]
    #[case("a = 1 ;\n\n\nb = ;", "Expected a number or identifier at line 4")]
    #[case("a = 1 ;\n;", "Expected token ID at line 2")]
    fn test_syntax_errors(#[case] source: &str, #[case] message: &str) {
        assert_eq!(parse_str(source).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_error_discards_earlier_statements() {
        let result = parse_str("a = 1 ;\nb = 2 ;\nc = + ;");
        assert_eq!(result, Err(SyntaxError::expected_term(3)));
    }

    #[test]
    fn test_error_at_end_uses_last_token_line() {
        // The expression ends on line 1 but END never arrives.
        let err = parse_str("a = b\n\n").unwrap_err();
        assert_eq!(err.line, 1);
    }
}
