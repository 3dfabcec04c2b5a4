//! Grid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CellGridError, Result};

/// Default height of a row with no cells, in pixels.
pub const DEFAULT_EMPTY_ROW_HEIGHT: f64 = 20.0;

/// Default width of a column with no cells, in pixels.
pub const DEFAULT_EMPTY_COL_WIDTH: f64 = 20.0;

/// What `add_cell` does when the target (row, col) is already occupied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `CellGridError::DuplicatePlacement`.
    #[default]
    Reject,
    /// Accept the cell; the index keeps the first occupant and the later one
    /// is never laid out, rendered, or hit.
    KeepFirst,
}

/// Dimensions and minimum extents of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub num_rows: u32,
    pub num_cols: u32,
    /// Height of a row with no cells, and the lower bound for every row.
    pub empty_row_height: f64,
    /// Width of a column with no cells, and the lower bound for every column.
    pub empty_col_width: f64,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            num_rows: 0,
            num_cols: 0,
            empty_row_height: DEFAULT_EMPTY_ROW_HEIGHT,
            empty_col_width: DEFAULT_EMPTY_COL_WIDTH,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl GridConfig {
    /// Config for a `num_rows` x `num_cols` grid with default minimum extents.
    #[must_use]
    pub fn new(num_rows: u32, num_cols: u32) -> Self {
        Self {
            num_rows,
            num_cols,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_empty_extents(mut self, row_height: f64, col_width: f64) -> Self {
        self.empty_row_height = row_height;
        self.empty_col_width = col_width;
        self
    }

    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Check that the minimum extents are finite and non-negative.
    ///
    /// # Errors
    /// Returns `CellGridError::Config` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("empty_row_height", self.empty_row_height),
            ("empty_col_width", self.empty_col_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CellGridError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the config is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GridConfig::from_json(r#"{"num_rows": 3, "num_cols": 4}"#).unwrap();
        assert_eq!(config.num_rows, 3);
        assert_eq!(config.num_cols, 4);
        assert_eq!(config.empty_row_height, DEFAULT_EMPTY_ROW_HEIGHT);
        assert_eq!(config.empty_col_width, DEFAULT_EMPTY_COL_WIDTH);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_from_json_policy() {
        let config =
            GridConfig::from_json(r#"{"num_rows": 1, "num_cols": 1, "duplicate_policy": "keep_first"}"#)
                .unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::KeepFirst);
    }

    #[test]
    fn test_validate_rejects_negative_extent() {
        let config = GridConfig::new(1, 1).with_empty_extents(-1.0, 10.0);
        assert!(matches!(config.validate(), Err(CellGridError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_nan_extent() {
        let config = GridConfig::new(1, 1).with_empty_extents(10.0, f64::NAN);
        assert!(matches!(config.validate(), Err(CellGridError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GridConfig::from_json("{num_rows"),
            Err(CellGridError::Json(_))
        ));
    }
}
