//! # mosaic-session
//!
//! Viewer state for the pixelation tool: the loaded original, the displayed
//! buffer and the canvas zoom.
//!
//! ```rust,ignore
//! use mosaic_session::Session;
//!
//! let mut session = Session::new();
//! session.load("photo.jpg")?;
//! session.pixelate(12)?;
//! session.save_as("photo_pixel.png", None)?;
//! session.reset()?; // original again, bit-identical
//! ```
//!
//! Long pixelations can run on a [`PixelateWorker`] thread; see [`worker`].

#![warn(missing_docs)]

mod error;
pub mod session;
pub mod view;
pub mod worker;

pub use error::{SessionError, SessionResult};
pub use session::{PixelateOutcome, Session};
pub use view::{fit_zoom, Viewport};
pub use worker::PixelateWorker;
