//! # mosaic-ops
//!
//! Image operations for the mosaic viewer.
//!
//! # Modules
//!
//! - [`grid`] - Cell grid geometry and partition rules
//! - [`pixelate`] - Block-average pixelation
//!
//! # Example
//!
//! ```rust
//! use mosaic_core::PixelBuffer;
//! use mosaic_ops::{pixelate_with, Partition, PixelateOptions};
//!
//! let src = PixelBuffer::filled(8, 8, 0xFF00_FF00);
//! let opts = PixelateOptions::new(3).with_partition(Partition::Clean);
//! let out = pixelate_with(&src, &opts).unwrap();
//! assert_eq!(out.dimensions(), (8, 8));
//! ```
//!
//! The operation is pure: the source buffer is only read and a freshly
//! allocated buffer is returned.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod grid;
pub mod pixelate;

pub use error::{OpsError, OpsResult};
pub use grid::{Cell, CellGrid, Partition};
pub use pixelate::{cell_size_from_i64, pixelate, pixelate_with, PixelateOptions, DEFAULT_CELL_SIZE};
