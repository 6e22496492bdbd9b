//! Shared GIF/BMP plumbing over the `image` crate.
//!
//! Everything is decoded to RGBA8 before building the pixel buffer; GIF
//! reads only the first frame.

use crate::{IoError, IoResult};
use image::{DynamicImage, ImageFormat, RgbaImage};
use mosaic_core::{PixelBuffer, ScanlineLayout};
use std::io::Cursor;

pub(crate) fn decode(data: &[u8], format: ImageFormat) -> IoResult<PixelBuffer> {
    let img = image::load_from_memory_with_format(data, format)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let stride = width as usize * 4;
    Ok(PixelBuffer::from_scanlines(
        rgba.as_raw(),
        width,
        height,
        stride,
        ScanlineLayout::Rgba8,
    )?)
}

pub(crate) fn encode(image: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let rgba = RgbaImage::from_raw(image.width(), image.height(), image.to_rgba8())
        .ok_or_else(|| IoError::EncodeError("Failed to create RGBA image".into()))?;

    let mut out = Vec::new();
    DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut out), format)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(out)
}
