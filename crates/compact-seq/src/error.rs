//! Error types for compact-seq parsing and sequence operations.

use thiserror::Error;

/// Errors that can occur while parsing tokens or running a sequence operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Input text does not match the expected token grammar.
    #[error("parse error in '{token}' at position {position}: {message}")]
    Parse {
        /// The offending token.
        token: String,
        /// Character offset inside the token where parsing failed.
        position: usize,
        /// Description of the error.
        message: String,
    },

    /// A precondition the caller is responsible for was not met.
    #[error("invariant violation: {message}")]
    InvariantViolation {
        /// Description of the broken precondition.
        message: String,
    },
}

impl SeqError {
    /// Builds a [`SeqError::Parse`] from a byte offset into `token`.
    ///
    /// The stored position is a character offset, so multi-byte suits such as
    /// `♣` count as one position.
    pub(crate) fn parse_at(token: &str, byte_offset: usize, message: impl Into<String>) -> Self {
        let byte_offset = byte_offset.min(token.len());
        let position = token
            .char_indices()
            .take_while(|(i, _)| *i < byte_offset)
            .count();
        SeqError::Parse {
            token: token.to_string(),
            position,
            message: message.into(),
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(%message, "invariant violation");
        SeqError::InvariantViolation { message }
    }

    /// Returns the offending token for parse errors.
    pub fn token(&self) -> Option<&str> {
        match self {
            SeqError::Parse { token, .. } => Some(token),
            SeqError::InvariantViolation { .. } => None,
        }
    }
}

/// Result type for compact-seq operations.
pub type SeqResult<T> = std::result::Result<T, SeqError>;
