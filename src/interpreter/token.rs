use std::fmt;

/// The category of a lexical token.
///
/// [`TokenKind::EndOfInput`] is never matched against the text; the
/// [`Lexer`](crate::interpreter::lexer::Lexer) produces it once the input is
/// exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Non-negative decimal literal, such as `42`.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// No more input.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token produced by the lexer.
///
/// Tokens are immutable once built. The integer payload is only present for
/// [`TokenKind::Integer`]; use [`Token::integer`] to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The token's category.
    pub kind:     TokenKind,
    /// Byte offset of the token's first character in the source line.
    pub position: usize,
    value:        Option<i64>,
}

impl Token {
    /// Builds an integer literal token.
    #[must_use]
    pub const fn integer_literal(value: i64, position: usize) -> Self {
        Self { kind: TokenKind::Integer,
               position,
               value: Some(value) }
    }

    /// Builds a token without payload.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::token::{Token, TokenKind};
    ///
    /// let plus = Token::symbol(TokenKind::Plus, 3);
    /// assert_eq!(plus.kind, TokenKind::Plus);
    /// assert_eq!(plus.integer(), None);
    /// ```
    #[must_use]
    pub const fn symbol(kind: TokenKind, position: usize) -> Self {
        Self { kind,
               position,
               value: None }
    }

    /// Returns the literal value of an integer token, `None` for every other
    /// kind.
    #[must_use]
    pub const fn integer(&self) -> Option<i64> {
        self.value
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "Token({}, {value})", self.kind),
            None => write!(f, "Token({})", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_integer_tokens_carry_a_value() {
        let number = Token::integer_literal(7, 0);
        assert_eq!(number.integer(), Some(7));
        assert!(number.is(TokenKind::Integer));

        let paren = Token::symbol(TokenKind::LeftParen, 1);
        assert_eq!(paren.integer(), None);
    }

    #[test]
    fn display_mentions_kind_and_payload() {
        assert_eq!(Token::integer_literal(12, 0).to_string(), "Token(integer, 12)");
        assert_eq!(Token::symbol(TokenKind::Divide, 4).to_string(), "Token('/')");
        assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    }
}
