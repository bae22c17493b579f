use log::trace;
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Lexemes recognised by the generated automaton.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Integer,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Integer => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
        }
    }
}

/// Pull-based tokenizer over a single line of input.
///
/// The cursor is held by the generated `logos` automaton, which skips
/// whitespace and matches the longest lexeme at each step. Numeric payloads
/// are parsed here so that oversized literals can be reported with their
/// position. Once the text is exhausted the lexer keeps returning
/// [`TokenKind::EndOfInput`].
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("12 * (3)");
/// let first = lexer.next_token().unwrap();
/// assert_eq!(first.integer(), Some(12));
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Multiply);
/// ```
pub struct Lexer<'src> {
    source:    &'src str,
    inner:     logos::Lexer<'src, Lexeme>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Lexeme::lexer(source),
               exhausted: false }
    }

    /// The full text this lexer scans.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset just past the last scanned lexeme.
    ///
    /// Starts at `0` and never decreases. Reaches the length of the source
    /// once [`TokenKind::EndOfInput`] has been produced.
    #[must_use]
    pub fn position(&self) -> usize {
        if self.exhausted {
            self.source.len()
        } else {
            self.inner.span().end
        }
    }

    /// Produces the next token.
    ///
    /// Whitespace between tokens is skipped. Calling this again after the end
    /// of the input has been reached returns another end-of-input token.
    ///
    /// # Errors
    /// - [`LexError::InvalidCharacter`] for a character outside `0-9 + - * /
    ///   ( )` and whitespace.
    /// - [`LexError::LiteralTooLarge`] for a numeral above `i64::MAX`.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if self.exhausted {
            return Ok(Token::symbol(TokenKind::EndOfInput, self.source.len()));
        }

        let Some(lexed) = self.inner.next() else {
            self.exhausted = true;
            trace!("end of input at {}", self.source.len());
            return Ok(Token::symbol(TokenKind::EndOfInput, self.source.len()));
        };

        let start = self.inner.span().start;
        let token = match lexed {
            Ok(Lexeme::Integer) => {
                let literal = self.inner.slice();
                let value =
                    literal.parse::<i64>()
                           .map_err(|_| LexError::LiteralTooLarge { position: start,
                                                                    literal:  literal.to_string(), })?;
                Token::integer_literal(value, start)
            },
            Ok(lexeme) => Token::symbol(lexeme.kind(), start),
            Err(()) => {
                let character = self.source[start..].chars()
                                                    .next()
                                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::InvalidCharacter { position: start,
                                                        character });
            },
        };

        trace!("lexed {token} at {start}");
        Ok(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    /// Yields every token of the line, stopping before end of input.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is(TokenKind::EndOfInput) => None,
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.expect("lexing failed").kind)
                          .collect()
    }

    #[test]
    fn recognises_every_token_kind() {
        use TokenKind::{Divide, Integer, LeftParen, Minus, Multiply, Plus, RightParen};

        assert_eq!(kinds("1+2-3*4/(5)"),
                   vec![Integer, Plus, Integer, Minus, Integer, Multiply, Integer, Divide,
                        LeftParen, Integer, RightParen]);
    }

    #[test]
    fn integer_literals_are_maximal_digit_runs() {
        let mut lexer = Lexer::new("  123 45");
        let first = lexer.next_token().unwrap();
        assert_eq!(first.integer(), Some(123));
        assert_eq!(first.position, 2);
        assert_eq!(lexer.position(), 5);

        let second = lexer.next_token().unwrap();
        assert_eq!(second.integer(), Some(45));
        assert_eq!(second.position, 6);
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(kinds(" 2  +\t3 \n"), kinds("2+3"));
        assert!(kinds(" \t\r\n").is_empty());
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("7");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer);
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::EndOfInput);
            assert_eq!(token.position, 1);
        }
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn empty_input_is_immediately_exhausted() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.position(), 0);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn invalid_character_reports_position() {
        let mut lexer = Lexer::new("2+a");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(),
                   Err(LexError::InvalidCharacter { position:  2,
                                                    character: 'a', }));
    }

    #[test]
    fn oversized_literal_is_rejected() {
        let mut lexer = Lexer::new("1 + 99999999999999999999");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(),
                   Err(LexError::LiteralTooLarge { position: 4,
                                                   literal:  "99999999999999999999".to_string(), }));
    }

    #[test]
    fn largest_literal_fits() {
        let token = Lexer::new("9223372036854775807").next_token().unwrap();
        assert_eq!(token.integer(), Some(i64::MAX));
    }
}
