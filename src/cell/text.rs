//! Single-line text cell.

use super::CellHandle;
use crate::render::{DrawSink, TextMeasure};
use crate::types::Vector2d;

/// A cell showing one line of text, sized by the sink's font metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCell {
    text: String,
}

impl TextCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl CellHandle for TextCell {
    fn render(&self, sink: &mut dyn DrawSink) {
        // Text is drawn from the baseline; push it down so the top of the
        // font box sits on the cell origin.
        let ascent = sink.measure_text(&self.text).ascent;
        sink.draw_text(&self.text, Vector2d::new(0.0, ascent));
    }

    fn size(&self, measure: &dyn TextMeasure) -> Vector2d {
        measure.measure_text(&self.text).size()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingSink};

    #[test]
    fn test_size_from_metrics() {
        let sink = RecordingSink::with_font_metrics(10.0, 11.0, 4.0);
        let cell = TextCell::new("abcde");
        assert_eq!(cell.size(&sink), Vector2d::new(50.0, 15.0));
    }

    #[test]
    fn test_render_on_baseline() {
        let mut sink = RecordingSink::new();
        TextCell::new("hi").render(&mut sink);
        assert_eq!(
            sink.calls(),
            &[DrawCall::Text {
                text: "hi".to_string(),
                origin: Vector2d::new(0.0, 12.0),
            }]
        );
    }
}
