//! I/O traits for image readers and writers.
//!
//! These traits define the interface for format-specific implementations.
//! Codecs only implement the in-memory half; file access is shared.

use crate::{Format, IoResult};
use mosaic_core::PixelBuffer;
use std::path::Path;

/// Trait for image format readers.
///
/// # Example
///
/// ```rust,ignore
/// use mosaic_io::{ImageReader, IoResult, Format};
/// use mosaic_core::PixelBuffer;
///
/// struct MyFormatReader;
///
/// impl ImageReader for MyFormatReader {
///     fn format(&self) -> Format { Format::Unknown }
///
///     fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
///         // Decode implementation
///     }
/// }
/// ```
pub trait ImageReader {
    /// Format handled by this reader.
    fn format(&self) -> Format;

    /// Decodes an image held in memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer>;

    /// Reads an image from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer> {
        let data = std::fs::read(path.as_ref())?;
        self.read_from_memory(&data)
    }
}

/// Trait for image format writers.
pub trait ImageWriter {
    /// Format produced by this writer.
    fn format(&self) -> Format;

    /// Encodes an image into memory.
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>>;

    /// Writes an image to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> IoResult<()> {
        let bytes = self.write_to_memory(image)?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}
