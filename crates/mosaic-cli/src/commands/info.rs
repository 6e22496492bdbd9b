//! Image info command.
//!
//! Prints dimensions, detected format and alpha usage for each input.

use crate::InfoArgs;
use anyhow::{Context, Result};
use mosaic_io::Format;
use std::fs;
use tracing::trace;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    trace!(count = args.input.len(), "info::run");

    for path in &args.input {
        let file_size = fs::metadata(path)
            .with_context(|| format!("Cannot stat: {}", path.display()))?
            .len();
        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let image = super::load_image(path)?;

        println!("{}", path.display());
        println!("  Resolution: {}x{}", image.width(), image.height());
        println!("  Format:     {:?} ({})", format, format.mime_type());
        println!("  Pixels:     {}", image.pixel_count());
        println!("  Alpha:      {}", if image.has_alpha() { "yes" } else { "no" });
        println!("  File size:  {}", super::format_size(file_size));

        if verbose > 0 {
            let (cols, rows) = (
                image.width().div_ceil(mosaic_ops::DEFAULT_CELL_SIZE),
                image.height().div_ceil(mosaic_ops::DEFAULT_CELL_SIZE),
            );
            println!(
                "  Cells @{}:   {}x{}",
                mosaic_ops::DEFAULT_CELL_SIZE,
                cols,
                rows
            );
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}
