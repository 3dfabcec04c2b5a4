//! Headless drawing sink.
//!
//! Records every draw call in absolute surface coordinates and measures text
//! with a fixed per-character advance. Used by the CLI, tests, and benches.

use serde::Serialize;

use super::backend::{DrawSink, TextMeasure, TextMetrics};
use crate::types::{Rect, Vector2d};

/// Default horizontal advance per character, in pixels.
pub const DEFAULT_CHAR_WIDTH: f64 = 8.0;
/// Default font ascent, in pixels.
pub const DEFAULT_ASCENT: f64 = 12.0;
/// Default font descent, in pixels.
pub const DEFAULT_DESCENT: f64 = 3.0;

/// A recorded draw call, with coordinates already translated to the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    Clear { rect: Rect },
    Text { text: String, origin: Vector2d },
    StrokeCircle { center: Vector2d, radius: f64 },
    FillCircle { center: Vector2d, radius: f64 },
}

#[derive(Debug, Clone)]
pub struct RecordingSink {
    char_width: f64,
    ascent: f64,
    descent: f64,
    origin: Vector2d,
    saved: Vec<Vector2d>,
    calls: Vec<DrawCall>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::with_font_metrics(DEFAULT_CHAR_WIDTH, DEFAULT_ASCENT, DEFAULT_DESCENT)
    }

    /// Sink whose text measures `char_width` per character and
    /// `ascent + descent` tall.
    #[must_use]
    pub fn with_font_metrics(char_width: f64, ascent: f64, descent: f64) -> Self {
        Self {
            char_width,
            ascent,
            descent,
            origin: Vector2d::ZERO,
            saved: Vec::new(),
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Remove and return everything recorded so far.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Current origin in surface coordinates.
    #[must_use]
    pub fn origin(&self) -> Vector2d {
        self.origin
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }
}

impl TextMeasure for RecordingSink {
    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * self.char_width,
            ascent: self.ascent,
            descent: self.descent,
        }
    }
}

impl DrawSink for RecordingSink {
    fn save(&mut self) {
        self.saved.push(self.origin);
    }

    fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }

    fn translate(&mut self, delta: Vector2d) {
        self.origin = self.origin + delta;
    }

    fn clear_rect(&mut self, rect: Rect) {
        let origin = self.origin + rect.origin();
        self.calls.push(DrawCall::Clear {
            rect: Rect::from_origin_size(origin, rect.size()),
        });
    }

    fn draw_text(&mut self, text: &str, origin: Vector2d) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            origin: self.origin + origin,
        });
    }

    fn stroke_circle(&mut self, center: Vector2d, radius: f64) {
        self.calls.push(DrawCall::StrokeCircle {
            center: self.origin + center,
            radius,
        });
    }

    fn fill_circle(&mut self, center: Vector2d, radius: f64) {
        self.calls.push(DrawCall::FillCircle {
            center: self.origin + center,
            radius,
        });
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_fixed_advance() {
        let sink = RecordingSink::new();
        let m = sink.measure_text("hello");
        assert_eq!(m.width, 40.0);
        assert_eq!(m.height(), 15.0);
        assert_eq!(sink.measure_text("").width, 0.0);
    }

    #[test]
    fn test_translate_save_restore() {
        let mut sink = RecordingSink::new();
        sink.save();
        sink.translate(Vector2d::new(10.0, 5.0));
        sink.draw_text("a", Vector2d::new(1.0, 1.0));
        sink.restore();
        sink.draw_text("b", Vector2d::new(1.0, 1.0));

        assert_eq!(sink.save_depth(), 0);
        assert_eq!(
            sink.calls(),
            &[
                DrawCall::Text {
                    text: "a".to_string(),
                    origin: Vector2d::new(11.0, 6.0),
                },
                DrawCall::Text {
                    text: "b".to_string(),
                    origin: Vector2d::new(1.0, 1.0),
                },
            ]
        );
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut sink = RecordingSink::new();
        sink.translate(Vector2d::new(3.0, 3.0));
        sink.restore();
        assert_eq!(sink.origin(), Vector2d::new(3.0, 3.0));
    }
}
