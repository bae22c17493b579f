use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("Error at position {position}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// Byte offset of the character.
        position:  usize,
        /// The offending character.
        character: char,
    },
    /// An integer literal does not fit into an `i64`.
    #[error("Error at position {position}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// Byte offset of the literal's first digit.
        position: usize,
        /// The literal as written.
        literal:  String,
    },
}

impl LexError {
    /// Byte offset in the source line the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}
