//! Format conversion command.

use crate::ConvertArgs;
use anyhow::{bail, Context, Result};
use mosaic_io::jpeg::{JpegCodec, JpegWriterOptions};
use mosaic_io::{Format, ImageWriter};
use tracing::{info, trace};

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "convert::run");

    let output_format = match super::parse_format(args.format.as_deref())? {
        Some(format) => format,
        None => Format::from_extension(&args.output),
    };
    let image = super::load_image(&args.input)?;

    match (output_format, args.quality) {
        (Format::Jpeg, Some(quality)) => {
            if !(1..=100).contains(&quality) {
                bail!("JPEG quality must be 1-100, got {}", quality);
            }
            JpegCodec::with_options(JpegWriterOptions { quality })
                .write(&args.output, &image)
                .with_context(|| format!("Failed to save: {}", args.output.display()))?;
        }
        (format, quality) => {
            if quality.is_some() {
                bail!("--quality only applies to JPEG output, not {:?}", format);
            }
            super::save_image(&args.output, &image, Some(format))?;
        }
    }

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        output_format = ?output_format,
        quality = args.quality,
        "Converted image"
    );

    if verbose > 0 {
        println!(
            "Converted {} -> {} ({:?})",
            args.input.display(),
            args.output.display(),
            output_format
        );
    }

    Ok(())
}
