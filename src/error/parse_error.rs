use thiserror::Error;

use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while matching tokens against the
/// grammar.
pub enum ParseError {
    /// The look-ahead token is not one the current rule accepts.
    #[error("Error at position {position}: Expected {}, found {found}.", describe_expected(.expected))]
    UnexpectedToken {
        /// Token kinds that would have been accepted here.
        expected: &'static [TokenKind],
        /// The kind of the look-ahead token.
        found:    TokenKind,
        /// Byte offset of the look-ahead token.
        position: usize,
    },
    /// Parentheses are nested deeper than the interpreter accepts.
    #[error("Error at position {position}: More than {limit} nested parentheses.")]
    NestingTooDeep {
        /// The deepest accepted nesting.
        limit:    usize,
        /// Byte offset of the first `(` past the limit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source line the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. } | Self::NestingTooDeep { position, .. } => {
                *position
            },
        }
    }
}

/// Renders the accepted kinds as `a`, `a or b`, or `one of a, b, c`.
fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        many => {
            let list = many.iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join(", ");
            format!("one of {list}")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_expected_kinds() {
        let err = ParseError::UnexpectedToken { expected: &[TokenKind::Integer, TokenKind::LeftParen],
                                                found:    TokenKind::Plus,
                                                position: 0, };
        assert_eq!(err.to_string(),
                   "Error at position 0: Expected integer or '(', found '+'.");

        let err = ParseError::UnexpectedToken { expected: &[TokenKind::Plus,
                                                            TokenKind::Minus,
                                                            TokenKind::EndOfInput],
                                                found:    TokenKind::Integer,
                                                position: 2, };
        assert_eq!(err.to_string(),
                   "Error at position 2: Expected one of '+', '-', end of input, found integer.");
    }
}
