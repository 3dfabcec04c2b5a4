//! CLI tool for cellgrid - lays out a grid description and outputs JSON
//!
//! Usage:
//!   cellgrid_cli <grid.json>              # Output layout JSON to stdout
//!   cellgrid_cli <grid.json> -o out.json  # Output layout JSON to file
//!
//! Input format:
//!
//! ```json
//! {
//!   "config": { "num_rows": 2, "num_cols": 2, "empty_row_height": 20, "empty_col_width": 20 },
//!   "cells": [
//!     { "kind": "text", "row": 0, "col": 0, "text": "hello" },
//!     { "kind": "circles", "row": 1, "col": 1, "radii": [5, 5],
//!       "spacing": { "x": 20, "y": 0 }, "padding": { "x": 2, "y": 2 } }
//!   ]
//! }
//! ```
//!
//! Text is measured at a fixed 8px per character, 15px tall. Set `RUST_LOG`
//! (e.g. `RUST_LOG=cellgrid=debug`) for layout tracing on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use cellgrid::{
    CellGrid, CirclesCell, ColId, DrawCall, GridConfig, GridLayout, RecordingSink, RowId,
    SubcellEvent, TextCell, Vector2d,
};

#[derive(Deserialize)]
struct GridDescription {
    config: GridConfig,
    #[serde(default)]
    cells: Vec<CellDescription>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum CellDescription {
    Text {
        row: u32,
        col: u32,
        text: String,
    },
    Circles {
        row: u32,
        col: u32,
        radii: Vec<f64>,
        spacing: Vector2d,
        #[serde(default)]
        padding: Vector2d,
    },
}

#[derive(Serialize)]
struct Output {
    layout: GridLayout,
    draw_calls: Vec<DrawCall>,
}

fn build(description: GridDescription) -> cellgrid::Result<Output> {
    description.config.validate()?;
    let mut grid = CellGrid::new(RecordingSink::new(), description.config)?;

    for cell in description.cells {
        match cell {
            CellDescription::Text { row, col, text } => {
                grid.add_cell(RowId::new(row), ColId::new(col), TextCell::new(text))?;
            }
            CellDescription::Circles {
                row,
                col,
                radii,
                spacing,
                padding,
            } => {
                let circles = radii
                    .into_iter()
                    .fold(CirclesCell::new(spacing, padding), |cell, radius| {
                        cell.with_circle(radius, |_: SubcellEvent| {})
                    });
                grid.add_cell(RowId::new(row), ColId::new(col), circles)?;
            }
        }
    }

    grid.full_render();
    let layout = grid.layout();
    let draw_calls = grid.into_sink().take_calls();
    Ok(Output { layout, draw_calls })
}

/// Read `input_path`, lay it out, and write the result as JSON to
/// `output_path` or stdout.
fn run(input_path: &str, output_path: Option<&str>) -> cellgrid::Result<()> {
    let data = fs::read_to_string(input_path)?;
    let description: GridDescription = serde_json::from_str(&data)?;
    let output = build(description)?;
    let json = serde_json::to_string_pretty(&output)?;

    match output_path {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cellgrid_cli <grid.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(args[3].as_str())
    } else {
        None
    };

    if let Err(e) = run(input_path, output_path) {
        eprintln!("Error processing {}: {}", input_path, e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_io_error() {
        let err = run("/nonexistent/cellgrid/grid.json", None).unwrap_err();
        assert!(matches!(err, cellgrid::CellGridError::Io(_)));
    }

    #[test]
    fn test_build_text_and_circles() {
        let description: GridDescription = serde_json::from_str(
            r#"{
                "config": { "num_rows": 1, "num_cols": 2 },
                "cells": [
                    { "kind": "text", "row": 0, "col": 0, "text": "abc" },
                    { "kind": "circles", "row": 0, "col": 1, "radii": [5, 5],
                      "spacing": { "x": 20, "y": 0 } }
                ]
            }"#,
        )
        .unwrap();
        let output = build(description).unwrap();
        assert_eq!(output.layout.scale.col_widths, vec![24.0, 30.0]);
        assert_eq!(output.draw_calls.len(), 4);
    }
}
