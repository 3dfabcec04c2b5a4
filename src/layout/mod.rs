//! Layout engine: from placed cells to row heights, column widths, and
//! cell positions.
//!
//! This module handles:
//! - Indexing placed cells by row and by column
//! - Sizing rows and columns from the cells they contain
//! - Prefix-summing the scale into edge positions, and binary search for
//!   the row/column at a coordinate
//! - Centering each cell's content inside its row/column intersection

mod dual_index;
mod positions;
mod scale;
mod snapshot;

pub use dual_index::DualIndex;
pub use positions::{centering_offset, CellPlacement, GridEdges};
pub use scale::GridScale;
pub use snapshot::GridLayout;
