//! Canvas 2D drawing sink.
//!
//! Implements `DrawSink` over the HTML Canvas 2D API via web-sys.

use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::backend::{DrawSink, TextMeasure, TextMetrics};
use crate::error::{CellGridError, Result};
use crate::types::{Rect, Vector2d};

const DEFAULT_FONT: &str = "13px sans-serif";
const DEFAULT_INK: &str = "#222222";
const TEXT_MEASURE_CACHE_CAP: usize = 4096;

pub struct CanvasSink {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    font: String,
    /// Cache for text measurements (key: "font\ntext")
    measure_cache: RefCell<HashMap<String, TextMetrics>>,
}

impl CanvasSink {
    /// Create a sink drawing into the 2d context of `canvas`.
    ///
    /// # Errors
    /// Returns `CellGridError::Render` if the 2d context is unavailable.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| CellGridError::Render("Failed to get 2d context".into()))?
            .ok_or_else(|| CellGridError::Render("No 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                CellGridError::Render("Failed to cast to CanvasRenderingContext2d".into())
            })?;

        let sink = Self {
            canvas,
            ctx,
            font: DEFAULT_FONT.to_string(),
            measure_cache: RefCell::new(HashMap::new()),
        };
        sink.apply_style();
        Ok(sink)
    }

    /// Set the CSS font used for measuring and drawing text.
    pub fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
        self.ctx.set_font(&self.font);
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn apply_style(&self) {
        self.ctx.set_font(&self.font);
        self.ctx.set_fill_style_str(DEFAULT_INK);
        self.ctx.set_stroke_style_str(DEFAULT_INK);
        self.ctx.set_line_width(1.0);
    }

    fn circle_path(&self, center: Vector2d, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
    }
}

impl TextMeasure for CanvasSink {
    fn measure_text(&self, text: &str) -> TextMetrics {
        let key = format!("{}\n{}", self.font, text);
        if let Some(metrics) = self.measure_cache.borrow().get(&key) {
            return *metrics;
        }
        let metrics = self
            .ctx
            .measure_text(text)
            .map(|m| TextMetrics {
                width: m.width(),
                ascent: m.font_bounding_box_ascent(),
                descent: m.font_bounding_box_descent(),
            })
            .unwrap_or_default();

        let mut cache = self.measure_cache.borrow_mut();
        if cache.len() >= TEXT_MEASURE_CACHE_CAP {
            cache.clear();
        }
        cache.insert(key, metrics);
        metrics
    }
}

impl DrawSink for CanvasSink {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, delta: Vector2d) {
        let _ = self.ctx.translate(delta.x, delta.y);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn draw_text(&mut self, text: &str, origin: Vector2d) {
        let _ = self.ctx.fill_text(text, origin.x, origin.y);
    }

    fn stroke_circle(&mut self, center: Vector2d, radius: f64) {
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vector2d, radius: f64) {
        self.circle_path(center, radius);
        self.ctx.fill();
    }
}
