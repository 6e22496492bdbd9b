//! Block-average pixelation.
//!
//! Every cell of a [`CellGrid`] is replaced by the per-channel mean of the
//! source pixels it covers. Sums are accumulated as `f64`, divided by the
//! cell's pixel count and rounded to nearest with ties away from zero.
//!
//! Cells are processed row band by row band, left to right, and written into
//! a fresh output buffer. Under [`Partition::Reference`] neighbouring cells
//! overlap by one row/column; the later cell wins in the output while every
//! average is still computed from the untouched source.
//!
//! # Example
//!
//! ```rust
//! use mosaic_core::PixelBuffer;
//! use mosaic_ops::pixelate::pixelate;
//!
//! let src = PixelBuffer::filled(16, 16, 0xFF33_6699);
//! let out = pixelate(&src, 4).unwrap();
//! assert_eq!(out, src);
//! ```

use crate::grid::{Cell, CellGrid, Partition};
use crate::{OpsError, OpsResult};
use mosaic_core::{channel, pack, Channel, PixelBuffer};
use tracing::{debug, trace};

/// Cell size used when none is given.
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// Pixelation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelateOptions {
    /// Cell edge length in pixels (>= 1).
    pub cell_size: u32,
    /// Cell boundary rule.
    pub partition: Partition,
}

impl PixelateOptions {
    /// Options with the given cell size and the reference partition.
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size,
            partition: Partition::Reference,
        }
    }

    /// Sets the partition.
    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }
}

impl Default for PixelateOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

/// Pixelates `source` with the reference partition.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `cell_size` is zero.
pub fn pixelate(source: &PixelBuffer, cell_size: u32) -> OpsResult<PixelBuffer> {
    pixelate_with(source, &PixelateOptions::new(cell_size))
}

/// Pixelates `source` into a new buffer of the same size.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `options.cell_size` is zero.
pub fn pixelate_with(source: &PixelBuffer, options: &PixelateOptions) -> OpsResult<PixelBuffer> {
    let (width, height) = source.dimensions();
    let grid = CellGrid::new(width, height, options.cell_size, options.partition)?;
    debug!(
        width,
        height,
        cell_size = options.cell_size,
        partition = options.partition.name(),
        rows = grid.rows(),
        cols = grid.cols(),
        "pixelate"
    );

    let mut out = PixelBuffer::new(width, height);
    for cell in grid.iter() {
        let color = cell_average(source, &cell)?;
        trace!(x0 = cell.x0, y0 = cell.y0, x1 = cell.x1, y1 = cell.y1, color, "cell");
        fill_cell(&mut out, &cell, color)?;
    }
    Ok(out)
}

/// Mean color of the source pixels inside `cell`.
///
/// # Errors
///
/// Returns [`OpsError::Buffer`] if the cell reaches outside `source`.
pub fn cell_average(source: &PixelBuffer, cell: &Cell) -> OpsResult<u32> {
    let mut sums = [0.0f64; 4];
    for y in cell.y0..=cell.y1 {
        let row = source.row(y)?;
        let span = row
            .get(cell.x0 as usize..=cell.x1 as usize)
            .ok_or(mosaic_core::Error::out_of_bounds(cell.x1, y, source.width(), source.height()))?;
        for &px in span {
            for (sum, ch) in sums.iter_mut().zip(Channel::ALL) {
                *sum += channel(px, ch) as f64;
            }
        }
    }

    let count = cell.pixel_count() as f64;
    let [a, r, g, b] = sums.map(|sum| mean_channel(sum, count));
    Ok(pack(a, r, g, b))
}

/// Validates a signed cell size from user input.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for values below 1 or above `u32::MAX`.
pub fn cell_size_from_i64(value: i64) -> OpsResult<u32> {
    if value < 1 {
        return Err(OpsError::InvalidParameter(format!(
            "cell size must be at least 1, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| OpsError::InvalidParameter(format!("cell size {value} is too large")))
}

#[inline]
fn mean_channel(sum: f64, count: f64) -> u8 {
    // f64::round rounds half away from zero
    (sum / count).round().clamp(0.0, 255.0) as u8
}

fn fill_cell(out: &mut PixelBuffer, cell: &Cell, color: u32) -> OpsResult<()> {
    for y in cell.y0..=cell.y1 {
        out.row_mut(y)?[cell.x0 as usize..=cell.x1 as usize].fill(color);
    }
    Ok(())
}
