use std::fmt;

use crate::{error::EvalError, interpreter::token::TokenKind};

/// Result type used when combining operands.
pub type EvalResult<T> = Result<T, EvalError>;

/// The four binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// The token kind that spells this operator.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Multiply,
            Self::Div => TokenKind::Divide,
        }
    }

    /// Returns `true` for `*` and `/`, which bind tighter than `+` and `-`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Combines two operands.
    ///
    /// All operations are checked. Division truncates toward zero.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, used for error reporting.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] if `right` is zero for `/`.
    /// - [`EvalError::Overflow`] if the result does not fit into an `i64`.
    ///
    /// # Example
    /// ```
    /// use tally::{error::EvalError, interpreter::arithmetic::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7, 2, 1), Ok(3));
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2, 1), Ok(-3));
    /// assert_eq!(BinaryOperator::Div.apply(1, 0, 1),
    ///            Err(EvalError::DivisionByZero { position: 1 }));
    /// ```
    pub const fn apply(self, left: i64, right: i64, position: usize) -> EvalResult<i64> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        match result {
            Some(value) => Ok(value),
            None => Err(EvalError::Overflow { position }),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// Maps a token kind to its binary operator.
///
/// Returns `None` for integers, parentheses and end of input.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     arithmetic::{BinaryOperator, token_to_binary_operator},
///     token::TokenKind,
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LeftParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
