use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while combining operands.
pub enum EvalError {
    /// The right operand of `/` evaluated to zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// The result does not fit into an `i64`.
    #[error("Error at position {position}: Integer overflow while computing result.")]
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
}

impl EvalError {
    /// Byte offset in the source line the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}
