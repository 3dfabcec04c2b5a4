//! Drawing sink traits.
//!
//! The grid never talks to a graphics API directly. Everything it needs from
//! a surface is expressed here, so Canvas 2D, a headless recorder, or any
//! other target can be plugged in.

use serde::{Deserialize, Serialize};

use crate::types::{Rect, Vector2d};

/// Extents of a measured string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    /// Distance from the baseline to the top of the font bounding box
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the font bounding box
    pub descent: f64,
}

impl TextMetrics {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }

    /// Size of the text box as (width, ascent + descent).
    #[must_use]
    pub fn size(&self) -> Vector2d {
        Vector2d::new(self.width, self.height())
    }
}

/// Text measurement, available whenever sizes are queried.
pub trait TextMeasure {
    fn measure_text(&self, text: &str) -> TextMetrics;
}

/// A 2D surface cells draw into.
///
/// Coordinates passed to drawing methods are relative to the current origin,
/// which `translate` moves and `save`/`restore` push and pop.
pub trait DrawSink: TextMeasure {
    /// Push the current origin.
    fn save(&mut self);

    /// Pop the origin pushed by the matching `save`.
    fn restore(&mut self);

    /// Move the origin by `delta`.
    fn translate(&mut self, delta: Vector2d);

    /// Clear a rectangle to the background.
    fn clear_rect(&mut self, rect: Rect);

    /// Draw `text` with its baseline-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Vector2d);

    fn stroke_circle(&mut self, center: Vector2d, radius: f64);

    fn fill_circle(&mut self, center: Vector2d, radius: f64);
}
