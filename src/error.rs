//! Structured error types for cellgrid.

use std::fmt;

/// Grid axis, used to report which index was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Col => f.write_str("column"),
        }
    }
}

/// All errors that can occur while building, laying out, or rendering a grid.
#[derive(Debug, thiserror::Error)]
pub enum CellGridError {
    /// Row or column index outside the configured grid dimensions.
    #[error("Invalid {axis} index {index} (grid has {len})")]
    InvalidIndex { axis: Axis, index: u32, len: u32 },

    /// A cell is already placed at this coordinate.
    #[error("Duplicate placement at row {row}, column {col}")]
    DuplicatePlacement { row: u32, col: u32 },

    /// Slot index that does not refer to a placed cell.
    #[error("Invalid cell slot {0}")]
    InvalidSlot(u32),

    /// Every slot id is taken.
    #[error("Grid is full ({} cells)", u64::from(u32::MAX) + 1)]
    TooManyCells,

    /// Grid configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Drawing sink failure.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CellGridError>;

#[cfg(target_arch = "wasm32")]
impl From<CellGridError> for wasm_bindgen::JsValue {
    fn from(e: CellGridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
