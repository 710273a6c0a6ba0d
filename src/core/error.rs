//! Errors raised by the fold.

/// Result type for fold operations
pub type FoldResult<T> = Result<T, FoldError>;

/// Errors that can occur while folding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FoldError {
    /// The requested element count exceeds the sequence length
    #[error("Size out of bounds: requested {size} elements, sequence has {len}")]
    SizeOutOfBounds { size: usize, len: usize },
}
