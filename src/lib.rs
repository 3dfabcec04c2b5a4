//! cellgrid - grid layout for 2D drawing surfaces
//!
//! Arranges heterogeneous cells into rows and columns and routes pointer
//! input back to them:
//! - Row heights and column widths sized to the largest cell in each line
//! - Each cell centered inside its row/column intersection
//! - Hover and click routing to the cell under the pointer, and on into
//!   composite cells with their own hit-testing
//! - Pluggable drawing sinks: headless recorder, Canvas 2D on wasm32
//!
//! # Usage
//!
//! ```
//! use cellgrid::{CellGrid, ColId, GridConfig, RecordingSink, RowId, TextCell, Vector2d};
//!
//! let config = GridConfig::new(2, 2).with_empty_extents(20.0, 20.0);
//! let mut grid = CellGrid::new(RecordingSink::new(), config)?;
//! grid.add_cell(RowId::new(0), ColId::new(1), TextCell::new("hello"))?;
//! grid.full_render();
//!
//! let layout = grid.layout();
//! assert_eq!(layout.scale.col_widths, vec![20.0, 40.0]);
//! assert_eq!(grid.cell_at(Vector2d::new(30.0, 5.0)).map(|s| s.get()), Some(0));
//! # Ok::<(), cellgrid::CellGridError>(())
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod render;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

pub use cell::{CellHandle, Circle, CirclesCell, Subcell, SubcellEvent, TextCell};
pub use config::{DuplicatePolicy, GridConfig};
pub use error::{CellGridError, Result};
pub use grid::{CellGrid, PlacedCell};
pub use layout::{CellPlacement, GridLayout, GridScale};
pub use render::{DrawCall, DrawSink, RecordingSink, TextMeasure, TextMetrics};
pub use types::{CellSlotId, ColId, Rect, RowId, Vector2d};

#[cfg(target_arch = "wasm32")]
pub use viewer::CellGridView;

/// Get the library version
#[must_use]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
