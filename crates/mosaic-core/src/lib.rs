//! # mosaic-core
//!
//! Core types for the mosaic image viewer.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`PixelBuffer`] - Owned, fixed-size grid of packed ARGB pixels
//! - [`Channel`], [`pack`], [`channel`], [`unpack`] - Packed pixel arithmetic
//! - [`ScanlineLayout`] - Description of decoded scanline data
//! - [`Error`] - Buffer construction and access errors
//!
//! ## Pixel Layout
//!
//! Every pixel is a single `u32` with alpha in the most significant byte:
//!
//! ```text
//! bits: 31..24 23..16 15..8 7..0
//!         A      R      G    B
//! ```
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other mosaic crates depend on it:
//!
//! ```text
//! mosaic-core (this crate)
//!    ^
//!    |
//!    +-- mosaic-ops (pixelation)
//!    +-- mosaic-io (decode/encode)
//!    +-- mosaic-session (viewer state)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::{PixelBuffer, ScanlineLayout};
pub use error::{Error, Result};
pub use pixel::{channel, pack, unpack, Channel, OPAQUE};
