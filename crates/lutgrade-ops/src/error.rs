//! Error types for grading and image operations.

use lutgrade_lut::LutError;
use thiserror::Error;

/// Error type for grading and image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Pixel buffer does not match its declared dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Grids being combined have different shapes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Grid construction failed.
    #[error(transparent)]
    Lut(#[from] LutError),
}

/// Result type for grading and image operations.
pub type OpsResult<T> = Result<T, OpsError>;
