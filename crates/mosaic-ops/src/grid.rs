//! Cell grid geometry for pixelation.
//!
//! An image of `W x H` pixels is cut into `ceil(H / size)` row bands and
//! `ceil(W / size)` column bands. Cells carry **inclusive** bounds.
//!
//! Two partitions are supported:
//!
//! - [`Partition::Reference`] - upper edge is `min(offset + size, last_index)`.
//!   Every cell spans one extra row/column that the next band overwrites, and
//!   the last band always ends on the last index.
//! - [`Partition::Clean`] - upper edge is `min(offset + size - 1, last_index)`,
//!   a plain non-overlapping tiling.
//!
//! ```text
//! W = 5, size = 2
//! Reference: [0..=2] [2..=4] [4..=4]
//! Clean:     [0..=1] [2..=3] [4..=4]
//! ```

use crate::{OpsError, OpsResult};
use std::str::FromStr;

/// How a cell's upper edge is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Partition {
    /// Clamp `offset + size` to the last index (overlapping cells).
    #[default]
    Reference,
    /// Clamp `offset + size - 1` to the last index (exact tiling).
    Clean,
}

impl Partition {
    /// Name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Clean => "clean",
        }
    }
}

impl FromStr for Partition {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reference" | "ref" | "literal" => Ok(Self::Reference),
            "clean" | "exact" => Ok(Self::Clean),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown partition '{other}' (expected reference or clean)"
            ))),
        }
    }
}

/// One grid cell with inclusive pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// First column.
    pub x0: u32,
    /// First row.
    pub y0: u32,
    /// Last column (inclusive).
    pub x1: u32,
    /// Last row (inclusive).
    pub y1: u32,
}

impl Cell {
    /// Columns covered.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0 + 1
    }

    /// Rows covered.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0 + 1
    }

    /// Number of pixels covered.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// Band layout for one image size and cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cell_size: u32,
    partition: Partition,
    rows: u32,
    cols: u32,
}

impl CellGrid {
    /// Lays out the grid.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `cell_size` is zero.
    pub fn new(width: u32, height: u32, cell_size: u32, partition: Partition) -> OpsResult<Self> {
        if cell_size == 0 {
            return Err(OpsError::InvalidParameter("cell size must be at least 1".into()));
        }
        Ok(Self {
            width,
            height,
            cell_size,
            partition,
            rows: band_count(height, cell_size),
            cols: band_count(width, cell_size),
        })
    }

    /// Number of row bands.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of column bands.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns `true` for a zero-area image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at band `row`, column band `col`, or `None` outside the grid.
    pub fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let y0 = row * self.cell_size;
        let x0 = col * self.cell_size;
        Some(Cell {
            x0,
            y0,
            x1: self.upper(x0, self.width - 1),
            y1: self.upper(y0, self.height - 1),
        })
    }

    /// Iterates cells row band by row band, left to right.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).filter_map(move |col| self.cell(row, col)))
    }

    #[inline]
    fn upper(&self, offset: u32, last: u32) -> u32 {
        match self.partition {
            Partition::Reference => offset.saturating_add(self.cell_size).min(last),
            Partition::Clean => offset.saturating_add(self.cell_size - 1).min(last),
        }
    }
}

/// `ceil(extent / cell_size)` computed on reals.
#[inline]
fn band_count(extent: u32, cell_size: u32) -> u32 {
    (extent as f64 / cell_size as f64).ceil() as u32
}
