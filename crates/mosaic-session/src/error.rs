//! Session errors.
//!
//! Every failing operation leaves the session exactly as it was.

use mosaic_io::IoError;
use mosaic_ops::OpsError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Load was requested with an empty path.
    #[error("No file selected.")]
    NoFileSelected,

    /// The path does not point to an existing file.
    #[error("The selected file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Operation needs a loaded image.
    #[error("no image loaded")]
    NoImage,

    /// A pixelation job is already running.
    #[error("a pixelation is already in progress")]
    Busy,

    /// The background worker thread stopped.
    #[error("pixelation worker is no longer running")]
    WorkerGone,

    /// The worker thread could not be started.
    #[error("failed to start worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// Decoding or encoding failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// The pixelation itself failed.
    #[error(transparent)]
    Ops(#[from] OpsError),
}

impl SessionError {
    /// Returns `true` for errors meant to be shown to the user as a blocking notice.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::NoFileSelected | Self::FileNotFound(_) | Self::Io(_))
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
