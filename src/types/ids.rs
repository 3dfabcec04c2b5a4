//! Per-axis index newtypes.
//!
//! Row, column, and slot indices share a `u32` representation but are not
//! interchangeable: passing a `ColId` where a `RowId` is expected is a type
//! error.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! index_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            #[must_use]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Index as `usize`, for addressing per-axis tables.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

index_newtype!(
    /// Row index in `[0, num_rows)`.
    RowId
);
index_newtype!(
    /// Column index in `[0, num_cols)`.
    ColId
);
index_newtype!(
    /// Position of a placed cell in the grid's insertion-ordered cell list.
    CellSlotId
);

impl CellSlotId {
    /// Slot for the `i`th placed cell. `None` if `i` does not fit in `u32`.
    pub(crate) fn from_index(i: usize) -> Option<Self> {
        u32::try_from(i).ok().map(Self)
    }
}
