//! Error types for I/O operations.
//!
//! Provides unified error handling for all image format operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file to decode does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded data could not be turned into a pixel buffer.
    #[error("invalid image data: {0}")]
    Buffer(#[from] mosaic_core::Error),
}

impl IoError {
    /// Returns `true` for failures that happen while reading an image.
    pub fn is_decode_error(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::UnsupportedFormat(_) | Self::DecodeError(_) => true,
            Self::Buffer(e) => e.is_decode_error(),
            Self::Io(_) | Self::EncodeError(_) => false,
        }
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
