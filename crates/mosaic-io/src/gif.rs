//! GIF format support (first frame only).
//!
//! Read/write GIF images via the `image` crate. Writing quantizes to a
//! 256-color palette, so colors may shift slightly.

use crate::{dynamic, Format, ImageReader, ImageWriter, IoResult};
use image::ImageFormat;
use mosaic_core::PixelBuffer;
use std::path::Path;

/// GIF reader/writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GifCodec;

impl ImageReader for GifCodec {
    fn format(&self) -> Format {
        Format::Gif
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        dynamic::decode(data, ImageFormat::Gif)
    }
}

impl ImageWriter for GifCodec {
    fn format(&self) -> Format {
        Format::Gif
    }

    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        dynamic::encode(image, ImageFormat::Gif)
    }
}

/// Reads the first frame of a GIF file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    GifCodec.read(path)
}

/// Writes a single-frame GIF file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    GifCodec.write(path, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gif_roundtrip_two_colors() {
        let mut image = PixelBuffer::filled(8, 8, 0xFFFF_0000);
        for x in 0..8 {
            image.set(x, 0, 0xFF00_00FF).unwrap();
        }

        let bytes = GifCodec.write_to_memory(&image).unwrap();
        assert_eq!(Format::from_bytes(&bytes), Format::Gif);

        let loaded = GifCodec.read_from_memory(&bytes).unwrap();
        assert_eq!(loaded.dimensions(), (8, 8));
        let close = |a: u32, b: u32| {
            a.to_be_bytes()
                .iter()
                .zip(b.to_be_bytes())
                .all(|(x, y)| (*x as i32 - y as i32).abs() <= 8)
        };
        assert!(close(loaded.at(3, 0).unwrap(), 0xFF00_00FF));
        assert!(close(loaded.at(3, 5).unwrap(), 0xFFFF_0000));
    }
}
