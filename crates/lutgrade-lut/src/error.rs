//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building, parsing or writing a grid.
#[derive(Debug, Error)]
pub enum LutError {
    /// Cube dimension is unusable (outside `2..=MAX_SIZE`, or unallocatable).
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Row count does not match the declared cube dimension.
    #[error("size mismatch: LUT_3D_SIZE {size} needs {expected} rows, found {found}")]
    SizeMismatch {
        /// Declared cube dimension
        size: usize,
        /// Rows required (`size^3`)
        expected: usize,
        /// Rows actually present
        found: usize,
    },

    /// Grid data holds a negative or non-finite component.
    #[error("invalid LUT value: {0}")]
    InvalidValue(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
