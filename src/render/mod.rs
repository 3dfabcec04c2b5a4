//! Drawing sinks.
//!
//! This module provides:
//! - The `DrawSink`/`TextMeasure` traits cells render through
//! - A headless recording sink (CLI, tests, benches)
//! - A Canvas 2D sink (wasm32 only)

pub mod backend;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use backend::{DrawSink, TextMeasure, TextMetrics};
pub use recording::{DrawCall, RecordingSink};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSink;
