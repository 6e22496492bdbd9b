//! # mosaic-io
//!
//! Decoding and encoding between image files and [`PixelBuffer`]s.
//!
//! | Format | Read | Write | Backend | Notes |
//! |--------|------|-------|---------|-------|
//! | PNG | Yes | Yes | `png` | Alpha preserved |
//! | JPEG | Yes | Yes | `jpeg-decoder` / `jpeg-encoder` | Alpha dropped, quality 100 |
//! | GIF | Yes | Yes | `image` | First frame, palette quantized |
//! | BMP | Yes | Yes | `image` | |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mosaic_io::{read, write_as, Format};
//!
//! // Read any supported format (auto-detected)
//! let image = read("photo.jpg")?;
//!
//! // Re-export in another format
//! write_as("photo.png", &image, Format::Png)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)
//! - `gif` - GIF support (default)
//! - `bmp` - BMP support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod traits;

#[cfg(any(feature = "gif", feature = "bmp"))]
mod dynamic;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "gif")]
pub mod gif;

#[cfg(feature = "bmp")]
pub mod bmp;

pub use detect::{Format, SUPPORTED_EXTENSIONS};
pub use error::{IoError, IoResult};
pub use traits::{ImageReader, ImageWriter};

use mosaic_core::PixelBuffer;
use std::path::Path;
use tracing::{debug, trace};

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes, falling back to the extension.
///
/// # Errors
///
/// - [`IoError::NotFound`] if the file does not exist
/// - [`IoError::UnsupportedFormat`] if the format is not recognized or compiled out
/// - [`IoError::DecodeError`] / [`IoError::Buffer`] if the file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    trace!(path = %path.display(), "read");
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let format = Format::detect(path)?;
    let image = match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        #[cfg(feature = "gif")]
        Format::Gif => gif::read(path),

        #[cfg(feature = "bmp")]
        Format::Bmp => bmp::read(path),

        _ => Err(unsupported(path, format)),
    }?;

    debug!(path = %path.display(), ?format, width = image.width(), height = image.height(), "decoded");
    Ok(image)
}

/// Decodes an image held in memory, detecting the format from magic bytes.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if no codec recognizes the data.
pub fn read_from_memory(data: &[u8]) -> IoResult<PixelBuffer> {
    match Format::from_bytes(data) {
        #[cfg(feature = "png")]
        Format::Png => png::PngCodec.read_from_memory(data),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::JpegCodec::new().read_from_memory(data),

        #[cfg(feature = "gif")]
        Format::Gif => gif::GifCodec.read_from_memory(data),

        #[cfg(feature = "bmp")]
        Format::Bmp => bmp::BmpCodec.read_from_memory(data),

        other => Err(IoError::UnsupportedFormat(format!("{other:?}"))),
    }
}

/// Writes an image to a file, detecting format from extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unknown extensions, otherwise
/// any error from [`write_as`].
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    write_as(path, image, Format::from_extension(path))
}

/// Encodes `image` as `format` and writes it to `path`.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if `format` is unknown or compiled out
/// - [`IoError::EncodeError`] if the codec rejects the image
/// - [`IoError::Io`] if the file cannot be written
pub fn write_as<P: AsRef<Path>>(path: P, image: &PixelBuffer, format: Format) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), ?format, "write");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, image),

        #[cfg(feature = "gif")]
        Format::Gif => gif::write(path, image),

        #[cfg(feature = "bmp")]
        Format::Bmp => bmp::write(path, image),

        _ => Err(unsupported(path, format)),
    }?;

    debug!(path = %path.display(), ?format, width = image.width(), height = image.height(), "encoded");
    Ok(())
}

fn unsupported(path: &Path, format: Format) -> IoError {
    let name = match format {
        Format::Unknown => path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
        known => known.extension().to_string(),
    };
    IoError::UnsupportedFormat(name)
}
