//! Loaded-image state.
//!
//! A [`Session`] owns one immutable original buffer and tracks what is
//! currently displayed: either that original or the latest pixelation of
//! it. State only changes when an operation fully succeeds.

use crate::view::Viewport;
use crate::{SessionError, SessionResult};
use mosaic_core::PixelBuffer;
use mosaic_io::Format;
use mosaic_ops::{pixelate_with, PixelateOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Result of a pixelation tagged with the session generation it was computed for.
#[derive(Debug)]
pub struct PixelateOutcome {
    /// Generation of the original the job read.
    pub generation: u64,
    /// Settings used.
    pub options: PixelateOptions,
    /// The transformed buffer or the failure.
    pub result: mosaic_ops::OpsResult<PixelBuffer>,
}

#[derive(Debug, Clone)]
enum Display {
    Original,
    Pixelated {
        buffer: Arc<PixelBuffer>,
        options: PixelateOptions,
    },
}

/// Viewer session: original buffer, displayed buffer and canvas zoom.
#[derive(Debug, Clone)]
pub struct Session {
    original: Option<Arc<PixelBuffer>>,
    display: Display,
    path: Option<PathBuf>,
    generation: u64,
    viewport: Viewport,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    /// Creates an empty session with a specific canvas size.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            original: None,
            display: Display::Original,
            path: None,
            generation: 0,
            viewport,
        }
    }

    /// Decodes `path` and makes it the new original.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoFileSelected`] for an empty path
    /// - [`SessionError::FileNotFound`] if nothing exists at `path`
    /// - [`SessionError::Io`] if the file cannot be decoded
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> SessionResult<()> {
        let path = path.as_ref();
        trace!(path = %path.display(), "Session::load");
        if path.as_os_str().is_empty() {
            return Err(SessionError::NoFileSelected);
        }
        if !path.exists() {
            return Err(SessionError::FileNotFound(path.to_path_buf()));
        }

        let buffer = mosaic_io::read(path)?;
        info!(path = %path.display(), width = buffer.width(), height = buffer.height(), "Loaded image");
        self.install_original(buffer, Some(path.to_path_buf()));
        Ok(())
    }

    /// Makes an already decoded buffer the new original.
    pub fn load_buffer(&mut self, buffer: PixelBuffer, path: Option<PathBuf>) {
        self.install_original(buffer, path);
    }

    fn install_original(&mut self, buffer: PixelBuffer, path: Option<PathBuf>) {
        let (w, h) = buffer.dimensions();
        self.original = Some(Arc::new(buffer));
        self.display = Display::Original;
        self.path = path;
        self.generation += 1;
        self.viewport.fit(w, h);
        debug!(generation = self.generation, zoom = self.viewport.zoom, "original installed");
    }

    /// Pixelates the original with the reference partition and displays the result.
    ///
    /// # Errors
    ///
    /// See [`Session::pixelate_with`].
    pub fn pixelate(&mut self, cell_size: u32) -> SessionResult<()> {
        self.pixelate_with(PixelateOptions::new(cell_size))
    }

    /// Pixelates the original and displays the result.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoImage`] if nothing is loaded
    /// - [`SessionError::Ops`] for an invalid cell size
    pub fn pixelate_with(&mut self, options: PixelateOptions) -> SessionResult<()> {
        let original = self.original.as_ref().ok_or(SessionError::NoImage)?;
        let buffer = pixelate_with(original, &options)?;
        info!(cell_size = options.cell_size, partition = options.partition.name(), "Pixelated");
        self.install_pixelated(buffer, options);
        Ok(())
    }

    fn install_pixelated(&mut self, buffer: PixelBuffer, options: PixelateOptions) {
        let (w, h) = buffer.dimensions();
        self.display = Display::Pixelated {
            buffer: Arc::new(buffer),
            options,
        };
        self.viewport.fit(w, h);
    }

    /// Installs a result computed off-thread.
    ///
    /// Returns `Ok(false)` and drops the buffer if a different image was
    /// loaded since the job started.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Ops`] if the job itself failed.
    pub fn apply_outcome(&mut self, outcome: PixelateOutcome) -> SessionResult<bool> {
        if outcome.generation != self.generation || self.original.is_none() {
            warn!(
                job = outcome.generation,
                current = self.generation,
                "Discarding pixelation of a replaced image"
            );
            return Ok(false);
        }
        let buffer = outcome.result?;
        self.install_pixelated(buffer, outcome.options);
        Ok(true)
    }

    /// Shows the original again. No pixels are recomputed or copied.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImage`] if nothing is loaded.
    pub fn reset(&mut self) -> SessionResult<()> {
        let original = self.original.as_ref().ok_or(SessionError::NoImage)?;
        let (w, h) = original.dimensions();
        self.display = Display::Original;
        self.viewport.fit(w, h);
        info!("Reset to original");
        Ok(())
    }

    /// Encodes the displayed buffer to `path`.
    ///
    /// The format comes from `format` or, if `None`, from the extension.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoImage`] if nothing is loaded
    /// - [`SessionError::Io`] if encoding or writing fails
    pub fn save_as<P: AsRef<Path>>(&self, path: P, format: Option<Format>) -> SessionResult<()> {
        let path = path.as_ref();
        let image = self.displayed().ok_or(SessionError::NoImage)?;
        let format = format.unwrap_or_else(|| Format::from_extension(path));
        mosaic_io::write_as(path, image, format)?;
        info!(path = %path.display(), ?format, "Saved image");
        Ok(())
    }

    /// Buffer currently on screen.
    pub fn displayed(&self) -> Option<&PixelBuffer> {
        match &self.display {
            Display::Original => self.original.as_deref(),
            Display::Pixelated { buffer, .. } => Some(buffer),
        }
    }

    /// Shared handle to the buffer currently on screen.
    pub fn displayed_arc(&self) -> Option<Arc<PixelBuffer>> {
        match &self.display {
            Display::Original => self.original.clone(),
            Display::Pixelated { buffer, .. } => Some(Arc::clone(buffer)),
        }
    }

    /// Buffer captured at load time.
    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_deref()
    }

    /// Shared handle to the original, for off-thread work.
    pub fn original_arc(&self) -> Option<Arc<PixelBuffer>> {
        self.original.clone()
    }

    /// Returns `true` if a pixelated buffer is displayed.
    pub fn is_pixelated(&self) -> bool {
        matches!(self.display, Display::Pixelated { .. })
    }

    /// Settings of the displayed pixelation, if any.
    pub fn pixelate_options(&self) -> Option<PixelateOptions> {
        match self.display {
            Display::Original => None,
            Display::Pixelated { options, .. } => Some(options),
        }
    }

    /// Cell size of the displayed pixelation, if any.
    pub fn cell_size(&self) -> Option<u32> {
        self.pixelate_options().map(|o| o.cell_size)
    }

    /// Path of the loaded file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Incremented on every load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Canvas zoom state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable canvas zoom state.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Refits the displayed buffer into the canvas.
    pub fn fit_to_window(&mut self) -> f32 {
        match self.displayed().map(PixelBuffer::dimensions) {
            Some((w, h)) => self.viewport.fit(w, h),
            None => self.viewport.zoom,
        }
    }
}
