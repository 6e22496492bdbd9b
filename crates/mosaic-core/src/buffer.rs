//! Owned pixel buffer.
//!
//! [`PixelBuffer`] stores `width * height` packed ARGB pixels in **row-major**
//! order, top-to-bottom:
//!
//! ```text
//! pixels: [p(0,0) p(1,0) ... p(w-1,0)]  <- Row 0
//!         [p(0,1) p(1,1) ... p(w-1,1)]  <- Row 1
//!         ...
//! ```
//!
//! The buffer owns its storage; replacing a buffer drops the old allocation.
//! Once loaded, an original image is shared read-only (typically behind an
//! [`std::sync::Arc`]) and never mutated.
//!
//! # Usage
//!
//! ```rust
//! use mosaic_core::{PixelBuffer, ScanlineLayout};
//!
//! // Two opaque RGB pixels: red, blue
//! let rgb = [255, 0, 0, 0, 0, 255];
//! let buf = PixelBuffer::from_scanlines(&rgb, 2, 1, 6, ScanlineLayout::Rgb8).unwrap();
//! assert_eq!(buf.at(0, 0).unwrap(), 0xFFFF_0000);
//! assert_eq!(buf.at(1, 0).unwrap(), 0xFF00_00FF);
//! ```

use crate::pixel::{channel, pack, Channel, OPAQUE};
use crate::{Error, Result};
use std::fmt;

/// Byte layout of decoded scanlines handed over by a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanlineLayout {
    /// 8-bit luminance.
    Gray8,
    /// 8-bit luminance followed by 8-bit alpha.
    GrayAlpha8,
    /// 8-bit R, G, B.
    Rgb8,
    /// 8-bit R, G, B, A.
    Rgba8,
    /// 8-bit A, R, G, B (packed pixel in big-endian byte order).
    Argb32,
}

impl ScanlineLayout {
    /// Bytes occupied by one pixel.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::GrayAlpha8 => 2,
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Argb32 => 4,
        }
    }

    /// Converts one pixel's bytes into a packed ARGB value.
    #[inline]
    fn to_argb(self, px: &[u8]) -> u32 {
        match self {
            Self::Gray8 => pack(OPAQUE, px[0], px[0], px[0]),
            Self::GrayAlpha8 => pack(px[1], px[0], px[0], px[0]),
            Self::Rgb8 => pack(OPAQUE, px[0], px[1], px[2]),
            Self::Rgba8 => pack(px[3], px[0], px[1], px[2]),
            Self::Argb32 => pack(px[0], px[1], px[2], px[3]),
        }
    }
}

/// Owned grid of packed ARGB pixels.
///
/// Invariant: `pixels.len() == width * height`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Creates a buffer of transparent black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Creates a buffer with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width as usize * height as usize],
        }
    }

    /// Wraps an existing pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a buffer from decoded scanlines.
    ///
    /// Each row starts at `y * stride` bytes into `data`; only the first
    /// `width * layout.bytes_per_pixel()` bytes of a row are read, so the
    /// final row may omit its padding.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if width or height is zero
    /// - [`Error::InvalidStride`] if `stride` cannot hold one row
    /// - [`Error::ScanlineTooShort`] if `data` ends before the last row
    pub fn from_scanlines(
        data: &[u8],
        width: u32,
        height: u32,
        stride: usize,
        layout: ScanlineLayout,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "image must not be empty"));
        }

        let bpp = layout.bytes_per_pixel();
        let row_bytes = width as usize * bpp;
        if stride < row_bytes {
            return Err(Error::InvalidStride {
                stride,
                min_stride: row_bytes,
                width,
            });
        }

        let capacity = (width as usize).saturating_mul(height as usize).min(data.len() / bpp);
        let mut pixels = Vec::with_capacity(capacity);
        for y in 0..height {
            let start = (y as usize).checked_mul(stride);
            let scanline = start
                .and_then(|start| Some(start..start.checked_add(row_bytes)?))
                .and_then(|range| data.get(range));
            let Some(scanline) = scanline else {
                return Err(Error::ScanlineTooShort {
                    row: y,
                    expected: row_bytes,
                    got: start.map_or(0, |start| data.len().saturating_sub(start)),
                });
            };
            pixels.extend(scanline.chunks_exact(bpp).map(|px| layout.to_argb(px)));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside `[0, width) x [0, height)`.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> Result<u32> {
        let i = self.index(x, y)?;
        Ok(self.pixels[i])
    }

    /// Overwrites the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside `[0, width) x [0, height)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u32) -> Result<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = value;
        Ok(())
    }

    /// Returns row `y` as a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `y >= height`.
    pub fn row(&self, y: u32) -> Result<&[u32]> {
        if y >= self.height {
            return Err(Error::out_of_bounds(0, y, self.width, self.height));
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Ok(&self.pixels[start..start + w])
    }

    /// Mutable access to row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> Result<&mut [u32]> {
        if y >= self.height {
            return Err(Error::out_of_bounds(0, y, self.width, self.height));
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Ok(&mut self.pixels[start..start + w])
    }

    /// Returns `true` if any pixel is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.pixels.iter().any(|&p| channel(p, Channel::Alpha) != OPAQUE)
    }

    /// Interleaved 8-bit RGBA bytes, for encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            let [a, r, g, b] = p.to_be_bytes();
            out.extend_from_slice(&[r, g, b, a]);
        }
        out
    }

    /// Interleaved 8-bit RGB bytes with alpha discarded, for encoders.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for &p in &self.pixels {
            let [_, r, g, b] = p.to_be_bytes();
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &self.pixels.len())
            .finish()
    }
}
