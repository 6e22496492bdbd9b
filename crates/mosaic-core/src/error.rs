//! Error types for pixel buffer operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of [`crate::PixelBuffer`]:
//! - Construction from decoded scanlines (bad dimensions, short data)
//! - Bounds-checked pixel access
//!
//! # Usage
//!
//! ```rust
//! use mosaic_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(4, 0, 4, 4).unwrap_err().is_bounds_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or accessing a pixel buffer.
///
/// # Categories
///
/// - **Decode errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`InvalidStride`](Error::InvalidStride), [`ScanlineTooShort`](Error::ScanlineTooShort)
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Size errors**: [`LengthMismatch`](Error::LengthMismatch)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates are outside the buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mosaic_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Width or height cannot describe a decoded image.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Row stride is too small for the given width and layout.
    #[error("stride {stride} is less than minimum {min_stride} for width {width}")]
    InvalidStride {
        /// Provided stride
        stride: usize,
        /// Minimum required stride
        min_stride: usize,
        /// Image width
        width: u32,
    },

    /// Scanline data ends before the last row is complete.
    #[error("scanline {row} truncated: expected {expected} bytes, got {got}")]
    ScanlineTooShort {
        /// Row that could not be read in full
        row: u32,
        /// Bytes needed to finish the row
        expected: usize,
        /// Bytes available for the row
        got: usize,
    },

    /// Pixel vector length does not match width * height.
    #[error("expected {expected} pixels, got {got}")]
    LengthMismatch {
        /// width * height
        expected: usize,
        /// Supplied length
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if the error came from interpreting decoded image data.
    #[inline]
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::InvalidStride { .. } | Self::ScanlineTooShort { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
        assert!(!err.is_decode_error());
    }

    #[test]
    fn test_decode_errors() {
        assert!(Error::invalid_dimensions(0, 10, "zero width").is_decode_error());
        let short = Error::ScanlineTooShort {
            row: 3,
            expected: 16,
            got: 7,
        };
        assert!(short.is_decode_error());
        assert!(short.to_string().contains("scanline 3"));
    }
}
