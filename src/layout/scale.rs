//! Row heights and column widths derived from cell sizes.

use serde::Serialize;

use super::DualIndex;
use crate::config::GridConfig;
use crate::types::{CellSlotId, ColId, RowId, Vector2d};

/// Per-row heights and per-column widths of a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridScale {
    pub row_heights: Vec<f64>,
    pub col_widths: Vec<f64>,
}

impl GridScale {
    /// Every row starts at the configured empty height and grows to the
    /// tallest cell in it; every column starts at the empty width and grows
    /// to the widest cell in it. Lines with no cells keep the minimum.
    ///
    /// `size_of` must return the natural size of an indexed slot.
    pub fn compute<F>(config: &GridConfig, index: &DualIndex, size_of: F) -> Self
    where
        F: Fn(CellSlotId) -> Vector2d,
    {
        let row_heights = (0..config.num_rows)
            .map(|r| {
                index
                    .row(RowId::new(r))
                    .map(|(_, slot)| size_of(slot).y)
                    .fold(config.empty_row_height, f64::max)
            })
            .collect();

        let col_widths = (0..config.num_cols)
            .map(|c| {
                index
                    .col(ColId::new(c))
                    .map(|(_, slot)| size_of(slot).x)
                    .fold(config.empty_col_width, f64::max)
            })
            .collect();

        Self {
            row_heights,
            col_widths,
        }
    }

    #[must_use]
    pub fn row_height(&self, row: RowId) -> Option<f64> {
        self.row_heights.get(row.index()).copied()
    }

    #[must_use]
    pub fn col_width(&self, col: ColId) -> Option<f64> {
        self.col_widths.get(col.index()).copied()
    }

    /// Size of the (`row`, `col`) intersection as (column width, row height).
    #[must_use]
    pub fn assigned_size(&self, row: RowId, col: ColId) -> Option<Vector2d> {
        Some(Vector2d::new(self.col_width(col)?, self.row_height(row)?))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn sizes(table: &[Vector2d]) -> impl Fn(CellSlotId) -> Vector2d + '_ {
        move |slot| table.get(slot.index()).copied().unwrap_or_default()
    }

    #[test]
    fn test_empty_grid_uses_minimums() {
        let config = GridConfig::new(3, 2).with_empty_extents(12.0, 30.0);
        let scale = GridScale::compute(&config, &DualIndex::default(), |_| Vector2d::ZERO);
        assert_eq!(scale.row_heights, vec![12.0; 3]);
        assert_eq!(scale.col_widths, vec![30.0; 2]);
    }

    #[test]
    fn test_height_drives_rows_and_width_drives_columns() {
        let config = GridConfig::new(2, 2).with_empty_extents(20.0, 20.0);
        let index = DualIndex::build([(RowId::new(0), ColId::new(0))]);
        let table = [Vector2d::new(50.0, 15.0)];
        let scale = GridScale::compute(&config, &index, sizes(&table));

        assert_eq!(scale.row_heights, vec![20.0, 20.0]);
        assert_eq!(scale.col_widths, vec![50.0, 20.0]);
    }

    #[test]
    fn test_max_over_line() {
        let config = GridConfig::new(2, 3).with_empty_extents(5.0, 5.0);
        let index = DualIndex::build([
            (RowId::new(0), ColId::new(0)),
            (RowId::new(0), ColId::new(2)),
            (RowId::new(1), ColId::new(2)),
        ]);
        let table = [
            Vector2d::new(10.0, 40.0),
            Vector2d::new(70.0, 25.0),
            Vector2d::new(30.0, 90.0),
        ];
        let scale = GridScale::compute(&config, &index, sizes(&table));

        assert_eq!(scale.row_heights, vec![40.0, 90.0]);
        assert_eq!(scale.col_widths, vec![10.0, 5.0, 70.0]);
        assert_eq!(
            scale.assigned_size(RowId::new(1), ColId::new(2)),
            Some(Vector2d::new(70.0, 90.0))
        );
        assert_eq!(scale.assigned_size(RowId::new(2), ColId::new(0)), None);
    }

    #[test]
    fn test_columns_counted_independently_of_rows() {
        // More columns than rows: every column must still get an entry.
        let config = GridConfig::new(1, 4);
        let index = DualIndex::build([(RowId::new(0), ColId::new(3))]);
        let table = [Vector2d::new(33.0, 1.0)];
        let scale = GridScale::compute(&config, &index, sizes(&table));
        assert_eq!(scale.col_widths.len(), 4);
        assert_eq!(scale.col_width(ColId::new(3)), Some(33.0));
    }
}
