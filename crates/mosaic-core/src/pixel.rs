//! Packed ARGB pixel arithmetic.
//!
//! A pixel is a `u32` laid out as `(alpha << 24) | (red << 16) | (green << 8) | blue`.
//! All functions here are total: channel values are `u8`, so every input is in range.
//!
//! ```rust
//! use mosaic_core::{channel, pack, Channel};
//!
//! let px = pack(255, 200, 100, 50);
//! assert_eq!(px, 0xFFC8_6432);
//! assert_eq!(channel(px, Channel::Green), 100);
//! ```

/// Fully opaque alpha.
pub const OPAQUE: u8 = 0xFF;

/// One 8-bit component of a packed ARGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Alpha, most significant byte.
    Alpha,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue, least significant byte.
    Blue,
}

impl Channel {
    /// All channels in storage order (A, R, G, B).
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// Bit offset of this channel inside a packed pixel.
    #[inline]
    pub const fn shift(self) -> u32 {
        match self {
            Self::Alpha => 24,
            Self::Red => 16,
            Self::Green => 8,
            Self::Blue => 0,
        }
    }

    /// Short display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alpha => "A",
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }
}

/// Packs four channels into one ARGB pixel.
#[inline]
pub const fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Extracts a single channel from a packed pixel.
#[inline]
pub const fn channel(pixel: u32, which: Channel) -> u8 {
    ((pixel >> which.shift()) & 0xFF) as u8
}

/// Splits a packed pixel into `[a, r, g, b]`.
#[inline]
pub const fn unpack(pixel: u32) -> [u8; 4] {
    pixel.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack(0xFF, 0xFF, 0x00, 0x00), 0xFFFF_0000);
        assert_eq!(pack(0x12, 0x34, 0x56, 0x78), 0x1234_5678);
        assert_eq!(pack(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_channel_extract() {
        let px = 0x8040_2010;
        assert_eq!(channel(px, Channel::Alpha), 0x80);
        assert_eq!(channel(px, Channel::Red), 0x40);
        assert_eq!(channel(px, Channel::Green), 0x20);
        assert_eq!(channel(px, Channel::Blue), 0x10);
    }

    #[test]
    fn test_unpack_matches_channels() {
        let px = pack(1, 2, 3, 4);
        let parts = unpack(px);
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(parts[i], channel(px, *ch), "channel {}", ch.label());
        }
    }
}
