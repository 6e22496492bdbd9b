//! Pixelate command.
//!
//! Loads the input into a [`Session`], pixelates the original and saves the
//! displayed result.

use crate::PixelateArgs;
use anyhow::{Context, Result};
use mosaic_ops::{cell_size_from_i64, Partition, PixelateOptions};
use mosaic_session::Session;
use tracing::{info, trace};

/// Runs the pixelate command.
pub fn run(args: PixelateArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), cell_size = args.cell_size, "pixelate::run");

    let cell_size = cell_size_from_i64(args.cell_size).context("Invalid --cell-size")?;
    let partition: Partition = args.partition.parse().context("Invalid --partition")?;
    let format = super::parse_format(args.format.as_deref())?;
    let options = PixelateOptions::new(cell_size).with_partition(partition);

    let mut session = Session::new();
    session
        .load(&args.input)
        .with_context(|| format!("Failed to load: {}", args.input.display()))?;
    session.pixelate_with(options).context("Pixelation failed")?;
    session
        .save_as(&args.output, format)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        cell_size,
        partition = partition.name(),
        "Pixelated image"
    );

    if verbose > 0 {
        println!(
            "Pixelated {} -> {} (cell size {}, {} partition)",
            args.input.display(),
            args.output.display(),
            cell_size,
            partition.name()
        );
    }

    Ok(())
}
