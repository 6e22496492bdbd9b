//! Zoom state for the image canvas.
//!
//! The canvas shows the displayed buffer scaled by [`Viewport::zoom`]. After
//! each load, pixelation or reset the image is fitted to the visible area,
//! which is the canvas size minus the scrollbar thickness.

/// Default canvas size in screen pixels.
pub const DEFAULT_AVAILABLE: [f32; 2] = [1280.0, 720.0];

/// Zoom factor that fits an image into the available area.
///
/// The dimension that overflows more (or underflows less) decides:
/// if `width - available_w` exceeds `height - available_h` the image is
/// scaled to the available width, even when that zooms in. Otherwise an
/// image taller than the area is scaled to the available height, and
/// anything else is shown at 1:1.
pub fn fit_zoom(image_w: u32, image_h: u32, available_w: f32, available_h: f32) -> f32 {
    if image_w == 0 || image_h == 0 {
        return 1.0;
    }
    let (w, h) = (image_w as f32, image_h as f32);
    if (w - available_w) > (h - available_h) {
        available_w / w
    } else if h > available_h {
        available_h / h
    } else {
        1.0
    }
}

/// Canvas zoom state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Zoom level (1.0 = 100%).
    pub zoom: f32,
    /// Visible canvas area in screen pixels, scrollbars excluded.
    pub available: [f32; 2],
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_AVAILABLE[0], DEFAULT_AVAILABLE[1])
    }
}

impl Viewport {
    /// Creates a viewport at 1:1 zoom.
    pub fn new(available_w: f32, available_h: f32) -> Self {
        Self {
            zoom: 1.0,
            available: [available_w, available_h],
        }
    }

    /// Fits an image of the given size and returns the new zoom.
    pub fn fit(&mut self, image_w: u32, image_h: u32) -> f32 {
        self.zoom = fit_zoom(image_w, image_h, self.available[0], self.available[1]);
        self.zoom
    }

    /// Back to 1:1.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }
}
