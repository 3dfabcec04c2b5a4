//! Pointer dispatch for `CellGrid`.
//!
//! A grid-space point is resolved to a row and column by binary search over
//! the edge positions, then to the cell indexed at that coordinate. Boxes
//! never overlap: a coordinate holds at most one laid-out cell, the first one
//! inserted there. The cell receives the point minus the top-left of its box,
//! after being told the size of that box.

use super::CellGrid;
use crate::cell::CellHandle;
use crate::layout::{CellPlacement, GridEdges};
use crate::render::DrawSink;
use crate::types::{CellSlotId, Vector2d};

impl<S: DrawSink> CellGrid<S> {
    /// Laid-out cell whose row/column box contains `point`.
    pub fn cell_at(&mut self, point: Vector2d) -> Option<CellSlotId> {
        self.locate(point).map(|(placement, _)| placement.slot)
    }

    /// Cell currently under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<CellSlotId> {
        self.hovered
    }

    /// Route a right click at `point`. Returns the cell that received it.
    pub fn right_click(&mut self, point: Vector2d) -> Option<CellSlotId> {
        let (placement, offset) = self.locate(point)?;
        tracing::trace!(slot = %placement.slot, ?offset, "right click");
        self.target(&placement)?.on_right_click(offset);
        Some(placement.slot)
    }

    /// Route a left click at `point`. Returns the cell that received it.
    pub fn left_click(&mut self, point: Vector2d) -> Option<CellSlotId> {
        let (placement, offset) = self.locate(point)?;
        tracing::trace!(slot = %placement.slot, ?offset, "left click");
        self.target(&placement)?.on_left_click(offset);
        Some(placement.slot)
    }

    /// Route a pointer move at `point`.
    ///
    /// The cell under the pointer gets `on_hover` on every move. When the
    /// pointer moves off a cell, onto another cell or onto empty space, the
    /// cell it left gets `on_unhover` first.
    pub fn hover(&mut self, point: Vector2d) -> Option<CellSlotId> {
        let hit = self.locate(point);
        let target = hit.as_ref().map(|(placement, _)| placement.slot);

        if self.hovered != target {
            tracing::trace!(from = ?self.hovered, to = ?target, "hover target changed");
            self.unhover_current();
        }
        if let Some((placement, offset)) = hit {
            if let Some(handle) = self.target(&placement) {
                handle.on_hover(offset);
            }
        }
        self.hovered = target;
        target
    }

    /// The pointer left the drawing surface.
    pub fn pointer_leave(&mut self) {
        self.unhover_current();
    }

    fn unhover_current(&mut self) {
        if let Some(prev) = self.hovered.take() {
            if let Some(handle) = self.handle_mut(prev) {
                handle.on_unhover();
            }
        }
    }

    /// Handle for the placed cell, told the size of its box.
    fn target(&mut self, placement: &CellPlacement) -> Option<&mut (dyn CellHandle + 'static)> {
        let handle = self.handle_mut(placement.slot)?;
        handle.set_assigned_size(placement.assigned);
        Some(handle)
    }

    /// Resolve `point` to a placement and the point relative to the top-left
    /// of that cell's box.
    fn locate(&mut self, point: Vector2d) -> Option<(CellPlacement, Vector2d)> {
        let index = self.dual_index();
        let scale = self.scale_for(&index);
        let edges = GridEdges::new(&scale);

        let row = edges.row_at_y(point.y)?;
        let col = edges.col_at_x(point.x)?;
        let slot = index.get(row, col)?;
        let natural = self.natural_size(slot);
        let placement = CellPlacement::compute(slot, row, col, natural, &scale, &edges)?;
        let offset = point - placement.position;
        Some((placement, offset))
    }
}
