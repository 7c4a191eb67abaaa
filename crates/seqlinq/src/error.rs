//! Error types for the seqlinq crate.

use thiserror::Error;

/// Errors raised by immediate operators and enumerators.
#[derive(Debug, Error)]
pub enum SeqError {
    /// The operator needs at least one element.
    #[error("sequence contains no elements")]
    Empty,

    /// No element satisfied the predicate.
    #[error("sequence contains no matching element")]
    NoMatch,

    /// A single element was expected.
    #[error("sequence contains more than one element")]
    MoreThanOne,

    /// A single matching element was expected.
    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,

    /// The requested index is past the end of the sequence.
    #[error("index {index} is out of range")]
    IndexOutOfRange { index: usize },

    /// Checked arithmetic overflowed.
    #[error("arithmetic operation resulted in an overflow")]
    Overflow,

    /// An argument is outside its valid domain.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Two elements produced the same dictionary key.
    #[error("an element with the same key has already been added")]
    DuplicateKey,

    /// The enumerator is before the first element or past the last one.
    #[error("enumerator is not positioned on an element")]
    NoCurrent,

    /// The enumerator cannot be rewound.
    #[error("enumerator does not support reset")]
    ResetNotSupported,

    /// The dedicated thread pool could not be created.
    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SeqError {
    /// Create an invalid argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for seqlinq operations.
pub type Result<T> = std::result::Result<T, SeqError>;
