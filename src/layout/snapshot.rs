//! Serializable snapshot of a computed layout.

use serde::Serialize;

use super::{CellPlacement, GridEdges, GridScale};
use crate::types::{CellSlotId, Vector2d};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub scale: GridScale,
    pub edges: GridEdges,
    /// Placement per placed cell, in insertion order. `None` for a cell that
    /// shares its coordinate with an earlier one and was left out of the index.
    pub cells: Vec<Option<CellPlacement>>,
}

impl GridLayout {
    /// Size of the whole grid.
    #[must_use]
    pub fn total_size(&self) -> Vector2d {
        Vector2d::new(self.edges.total_width(), self.edges.total_height())
    }

    #[must_use]
    pub fn placement(&self, slot: CellSlotId) -> Option<&CellPlacement> {
        self.cells.get(slot.index())?.as_ref()
    }

    /// Placements of every laid-out cell, in insertion order.
    pub fn placements(&self) -> impl Iterator<Item = &CellPlacement> + '_ {
        self.cells.iter().flatten()
    }

}
