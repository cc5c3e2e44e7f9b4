//! Base tokenization using the logos lexer library.
//!
//! logos resolves overlapping patterns by longest match rather than declaration order.
//! For this token set the two agree: NUMBER starts on a digit, ID on a letter or `_`,
//! and every other class on a fixed character, so at most one class can match at any
//! position. Input logos cannot match is reported as MISMATCH.

use crate::assign::lexing::common::{char_at, LexError, Lexer, TokenSink};
use crate::assign::lexing::tokens::{Token, TokenKind};
use logos::Logos;

/// Raw lexemes recognized by the DFA, including the ones the sink discards.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"\d+(\.\d*)?")]
    Number,
    #[token("=")]
    Assign,
    #[token(";")]
    End,
    #[regex(r"[A-Za-z_]\w*")]
    Id,
    #[regex(r"[+\-*/]")]
    Op,
    #[token("\n")]
    Newline,
    #[regex(r"[ \t]+")]
    Skip,
    #[regex(r"#[^\n]*")]
    Comment,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number => TokenKind::Number,
            Lexeme::Assign => TokenKind::Assign,
            Lexeme::End => TokenKind::End,
            Lexeme::Id => TokenKind::Id,
            Lexeme::Op => TokenKind::Op,
            Lexeme::Newline => TokenKind::Newline,
            Lexeme::Skip => TokenKind::Skip,
            Lexeme::Comment => TokenKind::Comment,
        }
    }
}

/// The default lexer engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogosLexer;

impl Lexer for LogosLexer {
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexeme::lexer(source);
        let mut sink = TokenSink::new();

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            match result {
                Ok(lexeme) => sink.push(lexeme.into(), lexer.slice(), span)?,
                Err(()) => {
                    let offending = char_at(source, span.start);
                    let end = span.start + offending.len();
                    sink.push(TokenKind::Mismatch, offending, span.start..end)?;
                }
            }
        }

        let tokens = sink.finish();
        tracing::debug!(engine = "logos", count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "logos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::testing::factories::{kinds, texts};

    fn lex(source: &str) -> Result<Vec<Token>, LexError> {
        LogosLexer.tokenize(source)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lex("").unwrap(), vec![]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(lex("   \t  \n\n\t").unwrap(), vec![]);
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("1 23 4.5 6. 0.25").unwrap();
        assert_eq!(texts(&tokens), vec!["1", "23", "4.5", "6.", "0.25"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Number));
    }

    #[test]
    fn test_dot_without_leading_digit_is_rejected() {
        let err = lex("x = .5 ;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '.',
                line: 1,
                offset: 4
            }
        );
    }

    #[test]
    fn test_identifiers() {
        let tokens = lex("_tmp value2 CamelCase").unwrap();
        assert_eq!(texts(&tokens), vec!["_tmp", "value2", "CamelCase"]);
        assert_eq!(kinds(&tokens), vec![TokenKind::Id; 3]);
    }

    #[test]
    fn test_operators_without_spaces() {
        let tokens = lex("a+b-c*d/e").unwrap();
        assert_eq!(texts(&tokens), vec!["a", "+", "b", "-", "c", "*", "d", "/", "e"]);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let tokens = lex("a = 1 ; # = ; @ ignored\nb = 2 ;").unwrap();
        assert_eq!(texts(&tokens), vec!["a", "=", "1", ";", "b", "=", "2", ";"]);
        assert_eq!(tokens[4].line, 2);
    }

    #[test]
    fn test_mismatch_reports_line() {
        let err = lex("a = 1 ;\nb = 2 ?").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character \"?\" at line 2");
    }

    #[test]
    fn test_mismatch_on_multibyte_character() {
        let err = lex("x = 1 € 2 ;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '€',
                line: 1,
                offset: 6
            }
        );
    }

    #[test]
    fn test_carriage_return_is_rejected() {
        assert!(lex("a = 1 ;\r\n").is_err());
    }
}
