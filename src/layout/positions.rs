//! Absolute cell positions and content centering.
//!
//! Column and row edges are prefix sums of the scale, so a cell's x depends
//! only on its column and its y only on its row. Lookups from a coordinate
//! back to a row or column are binary searches over those edges.

use serde::Serialize;

use super::GridScale;
use crate::types::{CellSlotId, ColId, Rect, RowId, Vector2d};

/// Cumulative edge positions of a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridEdges {
    /// `col_positions[i]` = x of column i's left edge; the last entry is the
    /// right edge of the grid
    pub col_positions: Vec<f64>,
    /// `row_positions[i]` = y of row i's top edge; the last entry is the
    /// bottom edge of the grid
    pub row_positions: Vec<f64>,
}

fn prefix_edges(extents: &[f64]) -> Vec<f64> {
    let mut edges = Vec::with_capacity(extents.len() + 1);
    let mut acc = 0.0;
    edges.push(acc);
    for extent in extents {
        acc += extent;
        edges.push(acc);
    }
    edges
}

/// Index of the half-open `[edges[i], edges[i + 1])` interval containing `v`.
fn line_at(edges: &[f64], v: f64) -> Option<u32> {
    let after = edges.partition_point(|&edge| edge <= v);
    if after == 0 || after >= edges.len() {
        return None;
    }
    u32::try_from(after - 1).ok()
}

impl GridEdges {
    #[must_use]
    pub fn new(scale: &GridScale) -> Self {
        Self {
            col_positions: prefix_edges(&scale.col_widths),
            row_positions: prefix_edges(&scale.row_heights),
        }
    }

    /// Top-left corner of the (`row`, `col`) intersection.
    #[must_use]
    pub fn origin(&self, row: RowId, col: ColId) -> Option<Vector2d> {
        let x = self.col_positions.get(col.index()).copied()?;
        let y = self.row_positions.get(row.index()).copied()?;
        Some(Vector2d::new(x, y))
    }

    /// Row containing `y`, or `None` above or below the grid.
    #[must_use]
    pub fn row_at_y(&self, y: f64) -> Option<RowId> {
        line_at(&self.row_positions, y).map(RowId::new)
    }

    /// Column containing `x`, or `None` left or right of the grid.
    #[must_use]
    pub fn col_at_x(&self, x: f64) -> Option<ColId> {
        line_at(&self.col_positions, x).map(ColId::new)
    }

    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.row_positions.last().copied().unwrap_or(0.0)
    }

    /// Bounds of the whole grid.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width(), self.total_height())
    }
}

/// Translation that centers content of size `natural` inside `assigned`.
///
/// Negative when the content is larger than its box; clipping is left to the
/// drawing sink.
#[must_use]
pub fn centering_offset(assigned: Vector2d, natural: Vector2d) -> Vector2d {
    (assigned - natural) * 0.5
}

/// Where one placed cell ends up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellPlacement {
    pub slot: CellSlotId,
    pub row: RowId,
    pub col: ColId,
    /// Top-left of the row/column intersection
    pub position: Vector2d,
    /// Size of the row/column intersection (column width, row height)
    pub assigned: Vector2d,
    /// Size the cell asked for
    pub natural: Vector2d,
    /// Origin the cell is rendered from: `position` plus the centering offset
    pub draw_origin: Vector2d,
}

impl CellPlacement {
    /// Compute the placement of `slot` at (`row`, `col`).
    ///
    /// Returns `None` if the coordinate is outside the scale.
    #[must_use]
    pub fn compute(
        slot: CellSlotId,
        row: RowId,
        col: ColId,
        natural: Vector2d,
        scale: &GridScale,
        edges: &GridEdges,
    ) -> Option<Self> {
        let position = edges.origin(row, col)?;
        let assigned = scale.assigned_size(row, col)?;
        Some(Self {
            slot,
            row,
            col,
            position,
            assigned,
            natural,
            draw_origin: position + centering_offset(assigned, natural),
        })
    }

    /// The row/column intersection box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.assigned)
    }

    /// The box actually covered by the cell's content.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size(self.draw_origin, self.natural)
    }
}
