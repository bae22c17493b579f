use thiserror::Error;

/// Division by zero and arithmetic overflow.
///
/// Errors raised while combining two already evaluated operands. They carry
/// the position of the operator whose combination failed.
pub mod eval_error;
/// Lexical errors.
///
/// Raised while turning characters into tokens: characters outside the token
/// alphabet and integer literals that do not fit the value range.
pub mod lex_error;
/// Grammar errors.
///
/// Raised when the look-ahead token does not fit the grammar rule being
/// applied, including unbalanced parentheses and trailing tokens.
pub mod parse_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Result type returned by every stage of an evaluation.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Any failure that can abort the evaluation of a line.
///
/// Each variant wraps the error of one phase. The `#[from]` conversions let
/// the lexer, grammar rules and arithmetic helpers propagate their own error
/// types with `?`.
///
/// # Example
/// ```
/// use tally::{
///     error::{EvalError, InterpretError},
///     evaluate,
/// };
///
/// let err = evaluate("5 / 0").unwrap_err();
/// assert!(matches!(err,
///                  InterpretError::Eval(EvalError::DivisionByZero { position: 2 })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The line contains something that is not a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well formed but cannot be computed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl InterpretError {
    /// Byte offset in the source line the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::TokenKind;

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn interpret_error_is_send_sync_static() {
        _assert_send_sync_static::<InterpretError>();
    }

    #[test]
    fn phase_errors_convert_into_interpret_error() {
        let err: InterpretError = LexError::InvalidCharacter { position:  4,
                                                               character: '$', }.into();
        assert!(matches!(err, InterpretError::Lex(_)));
        assert_eq!(err.position(), 4);

        let err: InterpretError = ParseError::UnexpectedToken { expected: &[TokenKind::RightParen],
                                                                found:    TokenKind::EndOfInput,
                                                                position: 9, }.into();
        assert!(matches!(err, InterpretError::Parse(_)));
        assert_eq!(err.position(), 9);

        let err: InterpretError = EvalError::Overflow { position: 1 }.into();
        assert_eq!(err.to_string(), "Error at position 1: Integer overflow while computing result.");
    }
}
