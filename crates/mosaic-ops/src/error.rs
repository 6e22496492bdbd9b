//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Underlying buffer error.
    #[error(transparent)]
    Buffer(#[from] mosaic_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
