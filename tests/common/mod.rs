//! Common test utilities: a spy cell that records the events it receives
//! and whose size can be changed from the outside.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cellgrid::{
    CellGrid, CellHandle, ColId, DrawSink, GridConfig, RecordingSink, RowId, TextMeasure,
    Vector2d,
};

/// Event seen by a `SpyCell`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seen {
    RightClick(Vector2d),
    LeftClick(Vector2d),
    Hover(Vector2d),
    Unhover,
}

pub type SpyLog = Rc<RefCell<Vec<(&'static str, Seen)>>>;

/// Cell with a fixed (but externally adjustable) size that logs every
/// pointer event under its name and draws its name at its origin.
pub struct SpyCell {
    name: &'static str,
    size: Rc<Cell<Vector2d>>,
    log: SpyLog,
}

impl SpyCell {
    pub fn new(name: &'static str, size: (f64, f64), log: &SpyLog) -> Self {
        Self {
            name,
            size: Rc::new(Cell::new(Vector2d::new(size.0, size.1))),
            log: Rc::clone(log),
        }
    }

    /// Handle for changing the size after the cell is placed.
    pub fn size_handle(&self) -> Rc<Cell<Vector2d>> {
        Rc::clone(&self.size)
    }

    fn record(&self, seen: Seen) {
        self.log.borrow_mut().push((self.name, seen));
    }
}

impl CellHandle for SpyCell {
    fn render(&self, sink: &mut dyn DrawSink) {
        sink.draw_text(self.name, Vector2d::ZERO);
    }

    fn size(&self, _measure: &dyn TextMeasure) -> Vector2d {
        self.size.get()
    }

    fn on_right_click(&mut self, offset: Vector2d) {
        self.record(Seen::RightClick(offset));
    }

    fn on_left_click(&mut self, offset: Vector2d) {
        self.record(Seen::LeftClick(offset));
    }

    fn on_hover(&mut self, offset: Vector2d) {
        self.record(Seen::Hover(offset));
    }

    fn on_unhover(&mut self) {
        self.record(Seen::Unhover);
    }
}

/// `rows` x `cols` grid over a default recording sink.
pub fn grid(rows: u32, cols: u32, empty: (f64, f64)) -> CellGrid<RecordingSink> {
    let config = GridConfig::new(rows, cols).with_empty_extents(empty.0, empty.1);
    CellGrid::new(RecordingSink::new(), config).unwrap()
}

pub fn at(row: u32, col: u32) -> (RowId, ColId) {
    (RowId::new(row), ColId::new(col))
}

pub fn v(x: f64, y: f64) -> Vector2d {
    Vector2d::new(x, y)
}

pub fn take_log(log: &SpyLog) -> Vec<(&'static str, Seen)> {
    std::mem::take(&mut *log.borrow_mut())
}
