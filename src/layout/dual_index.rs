//! Row-major and column-major lookup of placed cells.
//!
//! Both views are derived from the insertion-ordered placement list and are
//! never edited by hand. When two placements share a coordinate the first one
//! is kept and later ones are left out of both views.

use std::collections::BTreeMap;

use crate::types::{CellSlotId, ColId, RowId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualIndex {
    row_major: BTreeMap<RowId, BTreeMap<ColId, CellSlotId>>,
    col_major: BTreeMap<ColId, BTreeMap<RowId, CellSlotId>>,
}

/// Insert `value` under `major`/`minor` unless that slot is already taken.
/// Returns whether the value was inserted.
fn nested_insert<Major: Ord, Minor: Ord, V>(
    map: &mut BTreeMap<Major, BTreeMap<Minor, V>>,
    major: Major,
    minor: Minor,
    value: V,
) -> bool {
    let inner = map.entry(major).or_default();
    if inner.contains_key(&minor) {
        return false;
    }
    inner.insert(minor, value);
    true
}

impl DualIndex {
    /// Build both views from placements in insertion order; the `i`th
    /// placement gets slot `i`.
    pub fn build<I>(placements: I) -> Self
    where
        I: IntoIterator<Item = (RowId, ColId)>,
    {
        let mut index = Self::default();
        for (i, (row, col)) in placements.into_iter().enumerate() {
            let Some(slot) = CellSlotId::from_index(i) else {
                break;
            };
            if nested_insert(&mut index.row_major, row, col, slot) {
                nested_insert(&mut index.col_major, col, row, slot);
            } else {
                tracing::debug!(%row, %col, %slot, "coordinate already occupied, slot not indexed");
            }
        }
        index
    }

    /// Cells in `row`, ordered by column.
    pub fn row(&self, row: RowId) -> impl Iterator<Item = (ColId, CellSlotId)> + '_ {
        self.row_major
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&c, &s)| (c, s)))
    }

    /// Cells in `col`, ordered by row.
    pub fn col(&self, col: ColId) -> impl Iterator<Item = (RowId, CellSlotId)> + '_ {
        self.col_major
            .get(&col)
            .into_iter()
            .flat_map(|rows| rows.iter().map(|(&r, &s)| (r, s)))
    }

    /// Slot occupying (`row`, `col`).
    #[must_use]
    pub fn get(&self, row: RowId, col: ColId) -> Option<CellSlotId> {
        self.row_major.get(&row)?.get(&col).copied()
    }

    /// Number of indexed slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.row_major.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_major.is_empty()
    }

    /// All indexed slots with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, ColId, CellSlotId)> + '_ {
        self.row_major
            .iter()
            .flat_map(|(&r, cols)| cols.iter().map(move |(&c, &s)| (r, c, s)))
    }
}
