//! Error types for the runner.

use compact_seq::SeqError;
use thiserror::Error;

/// Errors that can occur while running an operation on raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// Parse or precondition error from compact-seq.
    #[error(transparent)]
    Seq(#[from] SeqError),

    /// A record of a multi-record input failed.
    #[error("record {index}: {source}")]
    Record {
        /// Zero-based index of the record.
        index: usize,
        /// The underlying error.
        source: SeqError,
    },

    /// The output would exceed the configured limit.
    #[error("output too large: {count} exceeds limit {limit}")]
    OutputTooLarge {
        /// Number of values the operation would produce.
        count: u64,
        /// Configured limit.
        limit: usize,
    },
}

impl RunnerError {
    /// The underlying compact-seq error, if any.
    pub fn seq_error(&self) -> Option<&SeqError> {
        match self {
            RunnerError::Seq(e) | RunnerError::Record { source: e, .. } => Some(e),
            RunnerError::OutputTooLarge { .. } => None,
        }
    }
}

/// Result type for runner operations.
pub type RunnerResult<T> = std::result::Result<T, RunnerError>;
