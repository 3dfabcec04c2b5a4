//! Core value types shared by the layout, render, and cell modules.

mod ids;
mod vector;

pub use ids::{CellSlotId, ColId, RowId};
pub use vector::{Rect, Vector2d};
