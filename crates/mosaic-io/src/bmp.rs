//! BMP format support.
//!
//! Read/write Windows bitmaps via the `image` crate.

use crate::{dynamic, Format, ImageReader, ImageWriter, IoResult};
use image::ImageFormat;
use mosaic_core::PixelBuffer;
use std::path::Path;

/// BMP reader/writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpCodec;

impl ImageReader for BmpCodec {
    fn format(&self) -> Format {
        Format::Bmp
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        dynamic::decode(data, ImageFormat::Bmp)
    }
}

impl ImageWriter for BmpCodec {
    fn format(&self) -> Format {
        Format::Bmp
    }

    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        dynamic::encode(image, ImageFormat::Bmp)
    }
}

/// Reads a BMP file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    BmpCodec.read(path)
}

/// Writes a BMP file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    BmpCodec.write(path, image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::pack;

    #[test]
    fn test_bmp_roundtrip() {
        let mut image = PixelBuffer::new(5, 3);
        for y in 0..3 {
            for x in 0..5 {
                image.set(x, y, pack(255, (x * 50) as u8, (y * 80) as u8, 7)).unwrap();
            }
        }

        let bytes = BmpCodec.write_to_memory(&image).unwrap();
        assert_eq!(Format::from_bytes(&bytes), Format::Bmp);
        assert_eq!(BmpCodec.read_from_memory(&bytes).unwrap(), image);
    }
}
