//! CLI command implementations

pub mod convert;
pub mod info;
pub mod pixelate;

use anyhow::{bail, Context, Result};
use mosaic_core::PixelBuffer;
use mosaic_io::Format;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    mosaic_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path, with an explicit format or one from the extension
pub fn save_image(path: &Path, image: &PixelBuffer, format: Option<Format>) -> Result<()> {
    let format = format.unwrap_or_else(|| Format::from_extension(path));
    mosaic_io::write_as(path, image, format)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parse a `--format` value
pub fn parse_format(name: Option<&str>) -> Result<Option<Format>> {
    let Some(name) = name else {
        return Ok(None);
    };
    match Format::from_name(name) {
        Format::Unknown => bail!(
            "Unknown format '{}' (expected one of: {})",
            name,
            mosaic_io::SUPPORTED_EXTENSIONS.join(", ")
        ),
        format => Ok(Some(format)),
    }
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format(None).unwrap(), None);
        assert_eq!(parse_format(Some("jpg")).unwrap(), Some(Format::Jpeg));
        assert_eq!(parse_format(Some("PNG")).unwrap(), Some(Format::Png));
        assert!(parse_format(Some("tga")).is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.img");
        let image = PixelBuffer::filled(3, 2, 0xFF10_2030);

        save_image(&path, &image, Some(Format::Png)).unwrap();
        assert_eq!(load_image(&path).unwrap(), image);

        let err = save_image(&dir.path().join("out.xyz"), &image, None).unwrap_err();
        assert!(err.to_string().starts_with("Failed to save"));
    }
}
