use thiserror::Error;

/// Errors returned by alignment operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DtwError {
    #[error("dtw: empty feature sequence")]
    EmptySequence,

    #[error("dtw: dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
