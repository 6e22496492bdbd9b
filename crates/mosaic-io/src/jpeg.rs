//! JPEG format support.
//!
//! Decoding goes through `jpeg-decoder`, encoding through `jpeg-encoder`.
//! JPEG has no alpha channel: decoded pixels are opaque and alpha is
//! discarded on write.
//!
//! # Example
//!
//! ```rust,ignore
//! use mosaic_io::jpeg::{JpegCodec, JpegWriterOptions};
//! use mosaic_io::ImageWriter;
//!
//! let writer = JpegCodec::with_options(JpegWriterOptions { quality: 85 });
//! writer.write("preview.jpg", &image)?;
//! ```

use crate::{Format, ImageReader, ImageWriter, IoError, IoResult};
use mosaic_core::{PixelBuffer, ScanlineLayout};
use std::io::Cursor;
use std::path::Path;

/// Options for writing JPEG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Default: 100, so a re-export loses as little as possible.
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self { quality: 100 }
    }
}

/// JPEG reader/writer.
#[derive(Debug, Clone, Default)]
pub struct JpegCodec {
    options: JpegWriterOptions,
}

impl JpegCodec {
    /// Creates a codec with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with custom writer options.
    pub fn with_options(options: JpegWriterOptions) -> Self {
        Self { options }
    }
}

impl ImageReader for JpegCodec {
    fn format(&self) -> Format {
        Format::Jpeg
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        let mut decoder = jpeg_decoder::Decoder::new(Cursor::new(data));
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::DecodeError(e.to_string()))?;
        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        let width = info.width as u32;
        let height = info.height as u32;

        let (layout, data) = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => (ScanlineLayout::Rgb8, pixels),
            jpeg_decoder::PixelFormat::L8 => (ScanlineLayout::Gray8, pixels),
            jpeg_decoder::PixelFormat::L16 => {
                // Keep the high byte
                let gray: Vec<u8> = pixels.chunks_exact(2).map(|l16| l16[0]).collect();
                (ScanlineLayout::Gray8, gray)
            }
            jpeg_decoder::PixelFormat::CMYK32 => {
                // Approximate CMYK to RGB conversion
                let rgb: Vec<u8> = pixels
                    .chunks_exact(4)
                    .flat_map(|cmyk| {
                        let c = cmyk[0] as f32 / 255.0;
                        let m = cmyk[1] as f32 / 255.0;
                        let y = cmyk[2] as f32 / 255.0;
                        let k = cmyk[3] as f32 / 255.0;

                        let r = ((1.0 - c) * (1.0 - k) * 255.0) as u8;
                        let g = ((1.0 - m) * (1.0 - k) * 255.0) as u8;
                        let b = ((1.0 - y) * (1.0 - k) * 255.0) as u8;

                        [r, g, b]
                    })
                    .collect();
                (ScanlineLayout::Rgb8, rgb)
            }
        };

        let stride = width as usize * layout.bytes_per_pixel();
        Ok(PixelBuffer::from_scanlines(&data, width, height, stride, layout)?)
    }
}

impl ImageWriter for JpegCodec {
    fn format(&self) -> Format {
        Format::Jpeg
    }

    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType, Encoder};

        let (width, height) = image.dimensions();
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(IoError::EncodeError(format!(
                "{width}x{height} exceeds the JPEG size limit of 65535"
            )));
        };

        let mut buffer = Vec::new();
        let encoder = Encoder::new(&mut buffer, self.options.quality.clamp(1, 100));
        encoder
            .encode(&image.to_rgb8(), w, h, ColorType::Rgb)
            .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

        Ok(buffer)
    }
}

/// Reads a JPEG file with default options.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    JpegCodec::new().read(path)
}

/// Writes a JPEG file at quality 100.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    JpegCodec::new().write(path, image)
}
