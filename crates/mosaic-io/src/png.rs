//! PNG format support.
//!
//! Palette, low bit depth and 16-bit images are normalized to 8 bits per
//! channel on read. Images are written as 8-bit RGBA, or RGB when every
//! pixel is opaque.
//!
//! # Example
//!
//! ```rust,ignore
//! use mosaic_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! ```

use crate::{Format, ImageReader, ImageWriter, IoError, IoResult};
use mosaic_core::{PixelBuffer, ScanlineLayout};
use std::io::Cursor;
use std::path::Path;

/// PNG reader/writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageReader for PngCodec {
    fn format(&self) -> Format {
        Format::Png
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let layout = match (info.color_type, info.bit_depth) {
            (png::ColorType::Rgb, png::BitDepth::Eight) => ScanlineLayout::Rgb8,
            (png::ColorType::Rgba, png::BitDepth::Eight) => ScanlineLayout::Rgba8,
            (png::ColorType::Grayscale, png::BitDepth::Eight) => ScanlineLayout::Gray8,
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => ScanlineLayout::GrayAlpha8,
            (color_type, bit_depth) => {
                return Err(IoError::DecodeError(format!(
                    "unsupported PNG layout {:?} {:?}",
                    color_type, bit_depth
                )));
            }
        };

        let buffer = PixelBuffer::from_scanlines(
            &buf[..info.buffer_size()],
            info.width,
            info.height,
            info.line_size,
            layout,
        )?;
        Ok(buffer)
    }
}

impl ImageWriter for PngCodec {
    fn format(&self) -> Format {
        Format::Png
    }

    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        let (color_type, data) = if image.has_alpha() {
            (png::ColorType::Rgba, image.to_rgba8())
        } else {
            (png::ColorType::Rgb, image.to_rgb8())
        };

        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::default());

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;

        Ok(out)
    }
}

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    PngCodec.read(path)
}

/// Writes an image to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    PngCodec.write(path, image)
}
