//! The grid container.
//!
//! `CellGrid` owns the drawing sink, the placed cells, and the cached scale.
//! Everything else (index, edges, placements) is derived on demand from the
//! placed-cell list:
//!
//! placed cells → dual index → scale (cached) → edges → placements → render
//!
//! The scale is only recomputed after an insertion or an explicit
//! `invalidate`, so reading it twice without mutating the grid always gives
//! the same answer.

mod events;

use std::collections::HashSet;

use crate::cell::{sanitize_size, CellHandle};
use crate::config::{DuplicatePolicy, GridConfig};
use crate::error::{Axis, CellGridError, Result};
use crate::layout::{CellPlacement, DualIndex, GridEdges, GridLayout, GridScale};
use crate::render::DrawSink;
use crate::types::{CellSlotId, ColId, Rect, RowId, Vector2d};

/// A cell and the coordinate it was placed at.
pub struct PlacedCell {
    row: RowId,
    col: ColId,
    handle: Box<dyn CellHandle>,
}

impl PlacedCell {
    #[must_use]
    pub fn row(&self) -> RowId {
        self.row
    }

    #[must_use]
    pub fn col(&self) -> ColId {
        self.col
    }

    #[must_use]
    pub fn handle(&self) -> &dyn CellHandle {
        self.handle.as_ref()
    }
}

pub struct CellGrid<S: DrawSink> {
    sink: S,
    config: GridConfig,
    /// Insertion order; a cell's slot is its position here
    cells: Vec<PlacedCell>,
    occupied: HashSet<(RowId, ColId)>,
    /// Cleared on every insertion
    scale: Option<GridScale>,
    /// Cell the pointer is currently over
    hovered: Option<CellSlotId>,
}

impl<S: DrawSink> CellGrid<S> {
    /// Create an empty grid drawing into `sink`.
    ///
    /// # Errors
    /// Returns `CellGridError::Config` if the config fails validation.
    pub fn new(sink: S, config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sink,
            config,
            cells: Vec::new(),
            occupied: HashSet::new(),
            scale: None,
            hovered: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of placed cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cell(&self, slot: CellSlotId) -> Option<&PlacedCell> {
        self.cells.get(slot.index())
    }

    /// Place `handle` at (`row`, `col`) and invalidate the cached scale.
    ///
    /// # Errors
    /// - `InvalidIndex` if `row` or `col` is outside the configured grid.
    /// - `DuplicatePlacement` if the coordinate is taken and the duplicate
    ///   policy is `Reject`.
    pub fn add_cell(
        &mut self,
        row: RowId,
        col: ColId,
        handle: impl CellHandle + 'static,
    ) -> Result<CellSlotId> {
        self.add_boxed_cell(row, col, Box::new(handle))
    }

    /// `add_cell` for an already boxed handle.
    ///
    /// # Errors
    /// Same as `add_cell`.
    pub fn add_boxed_cell(
        &mut self,
        row: RowId,
        col: ColId,
        handle: Box<dyn CellHandle>,
    ) -> Result<CellSlotId> {
        if row.get() >= self.config.num_rows {
            return Err(CellGridError::InvalidIndex {
                axis: Axis::Row,
                index: row.get(),
                len: self.config.num_rows,
            });
        }
        if col.get() >= self.config.num_cols {
            return Err(CellGridError::InvalidIndex {
                axis: Axis::Col,
                index: col.get(),
                len: self.config.num_cols,
            });
        }
        let first_at_coord = !self.occupied.contains(&(row, col));
        if !first_at_coord && self.config.duplicate_policy == DuplicatePolicy::Reject {
            return Err(CellGridError::DuplicatePlacement {
                row: row.get(),
                col: col.get(),
            });
        }
        let slot = CellSlotId::from_index(self.cells.len()).ok_or(CellGridError::TooManyCells)?;

        self.occupied.insert((row, col));
        self.cells.push(PlacedCell { row, col, handle });
        self.scale = None;
        tracing::debug!(%row, %col, %slot, shadowed = !first_at_coord, "cell added");
        Ok(slot)
    }

    /// Drop the cached scale so the next layout re-reads every cell size.
    ///
    /// Needed only when a cell's natural size changes after insertion.
    pub fn invalidate(&mut self) {
        self.scale = None;
    }

    /// Whether a scale is cached.
    #[must_use]
    pub fn has_cached_scale(&self) -> bool {
        self.scale.is_some()
    }

    /// Build the row-major and column-major index of the placed cells.
    #[must_use]
    pub fn dual_index(&self) -> DualIndex {
        DualIndex::build(self.cells.iter().map(|c| (c.row, c.col)))
    }

    /// Current scale, computed if nothing is cached.
    pub fn scale(&mut self) -> GridScale {
        let index = self.dual_index();
        self.scale_for(&index)
    }

    /// Slot at (`row`, `col`), if a laid-out cell occupies it.
    #[must_use]
    pub fn slot_at(&self, row: RowId, col: ColId) -> Option<CellSlotId> {
        self.dual_index().get(row, col)
    }

    /// Row/column box assigned to `slot`, or `None` for an unknown or
    /// shadowed slot.
    pub fn cell_rect(&mut self, slot: CellSlotId) -> Option<Rect> {
        self.layout().placement(slot).map(CellPlacement::rect)
    }

    /// Compute the full layout: scale, edges, and per-cell placement.
    pub fn layout(&mut self) -> GridLayout {
        let index = self.dual_index();
        let scale = self.scale_for(&index);
        let edges = GridEdges::new(&scale);

        let mut cells: Vec<Option<CellPlacement>> = vec![None; self.cells.len()];
        for (row, col, slot) in index.iter() {
            let natural = self.natural_size(slot);
            if let Some(entry) = cells.get_mut(slot.index()) {
                *entry = CellPlacement::compute(slot, row, col, natural, &scale, &edges);
            }
        }

        GridLayout {
            scale,
            edges,
            cells,
        }
    }

    /// Clear the grid area and render every laid-out cell, in insertion
    /// order, each with the sink origin at its centered draw position.
    pub fn full_render(&mut self) {
        let layout = self.layout();
        tracing::debug!(
            cells = self.cells.len(),
            width = layout.edges.total_width(),
            height = layout.edges.total_height(),
            "full render"
        );
        self.sink.clear_rect(layout.edges.bounds());
        for placement in layout.placements() {
            self.draw(placement);
        }
    }

    /// Clear one cell's row/column box and render only that cell.
    ///
    /// A cell shadowed by an earlier one at the same coordinate draws nothing.
    ///
    /// # Errors
    /// Returns `InvalidSlot` if `slot` does not refer to a placed cell.
    pub fn render_cell(&mut self, slot: CellSlotId) -> Result<()> {
        if slot.index() >= self.cells.len() {
            return Err(CellGridError::InvalidSlot(slot.get()));
        }
        let layout = self.layout();
        if let Some(placement) = layout.placement(slot) {
            self.sink.clear_rect(placement.rect());
            self.draw(placement);
        }
        Ok(())
    }

    fn draw(&mut self, placement: &CellPlacement) {
        let Some(cell) = self.cells.get(placement.slot.index()) else {
            return;
        };
        self.sink.save();
        self.sink.translate(placement.draw_origin);
        cell.handle.render(&mut self.sink);
        self.sink.restore();
    }

    fn scale_for(&mut self, index: &DualIndex) -> GridScale {
        if let Some(scale) = &self.scale {
            return scale.clone();
        }
        let scale = GridScale::compute(&self.config, index, |slot| {
            let reported = self.reported_size(slot);
            let size = sanitize_size(reported);
            if size != reported {
                tracing::warn!(%slot, ?reported, "cell reported an invalid size, using {size:?}");
            }
            size
        });
        tracing::trace!(
            rows = scale.row_heights.len(),
            cols = scale.col_widths.len(),
            "scale recomputed"
        );
        self.scale = Some(scale.clone());
        scale
    }

    fn reported_size(&self, slot: CellSlotId) -> Vector2d {
        self.cells
            .get(slot.index())
            .map(|c| c.handle.size(&self.sink))
            .unwrap_or_default()
    }

    fn natural_size(&self, slot: CellSlotId) -> Vector2d {
        sanitize_size(self.reported_size(slot))
    }

    fn handle_mut(&mut self, slot: CellSlotId) -> Option<&mut (dyn CellHandle + 'static)> {
        self.cells.get_mut(slot.index()).map(|c| c.handle.as_mut())
    }
}
