use thiserror::Error;

/// Failures of the store, evaluator and spectrum.
///
/// Every failing call leaves the store exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// Malformed or out-of-range input: negative count, negative or
    /// non-finite frequency, degenerate domain, too few samples.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Adding a component past the declared count.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),
    /// Reading or evaluating before collection is complete.
    #[error("not ready: {0}")]
    NotReady(String),
}

impl SeriesError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SeriesError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SeriesError>;
