//! mosaic - block-average pixelation from the command line
//!
//! Loads JPEG/PNG/GIF/BMP images, replaces each square cell with its
//! average color and writes the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "MOSAIC_LOG";

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(author, version, about = "Block-average image pixelation")]
#[command(long_about = "
Pixelates images by replacing each square cell with its average color.

Examples:
  mosaic info photo.jpg                         # Show image info
  mosaic pixelate photo.jpg -o out.png -c 12    # 12px cells
  mosaic pixelate photo.jpg -o out.png --partition clean
  mosaic convert photo.bmp photo.png            # Re-export only
  MOSAIC_LOG=debug mosaic pixelate a.png -o b.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write log output to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Pixelate an image
    #[command(visible_alias = "p")]
    Pixelate(PixelateArgs),

    /// Convert image format without filtering
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct PixelateArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Cell edge length in pixels (>= 1)
    #[arg(short, long, allow_negative_numbers = true, default_value_t = mosaic_ops::DEFAULT_CELL_SIZE as i64)]
    cell_size: i64,

    /// Cell boundary rule: reference, clean
    #[arg(short, long, default_value = "reference")]
    partition: String,

    /// Output format: png, jpg, gif, bmp (default: from extension)
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    output: PathBuf,

    /// Output format: png, jpg, gif, bmp (default: from extension)
    #[arg(short, long)]
    format: Option<String>,

    /// JPEG quality (1-100, default 100)
    #[arg(short, long)]
    quality: Option<u8>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log.as_deref())?;

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Pixelate(args) => commands::pixelate::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
    }
}

/// Installs the global subscriber.
///
/// `MOSAIC_LOG` wins over the `-v` count. The returned guard flushes the
/// file writer and must live until exit.
fn init_logging(verbose: u8, log: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(path) = log else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .try_init()
            .context("Failed to install log subscriber")?;
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file: {}", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(Some(guard))
}
