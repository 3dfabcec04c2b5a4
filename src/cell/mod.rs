//! Cell contract and the built-in cell kinds.
//!
//! A cell owns its content size and its input handling; the grid only decides
//! where the cell goes. The grid draws a cell at its content origin, centered
//! inside the row/column box it was assigned. Pointer offsets are relative to
//! the top-left of that box instead, so a cell smaller than its box needs
//! `layout::centering_offset` to map them into its drawing frame.

mod circles;
mod text;

pub use circles::{Circle, CirclesCell};
pub use text::TextCell;

use crate::render::{DrawSink, TextMeasure};
use crate::types::Vector2d;

/// Anything that can be placed in a grid slot.
pub trait CellHandle {
    /// Draw the cell. The sink origin is already at the centered content
    /// origin.
    fn render(&self, sink: &mut dyn DrawSink);

    /// Natural size of the cell content, independent of the grid.
    fn size(&self, measure: &dyn TextMeasure) -> Vector2d;

    /// Size of the box the grid assigned this cell. Delivered before every
    /// pointer event routed to the cell.
    fn set_assigned_size(&mut self, _assigned: Vector2d) {}

    fn on_right_click(&mut self, _offset: Vector2d) {}

    fn on_left_click(&mut self, _offset: Vector2d) {}

    /// Pointer moved over the cell. Called on every move, not only on entry.
    fn on_hover(&mut self, _offset: Vector2d) {}

    /// Pointer left the cell's box.
    fn on_unhover(&mut self) {}
}

/// Pointer event delivered to a sub-element of a composite cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubcellEvent {
    RightClick,
    LeftClick,
    Hover,
    Unhover,
}

/// An independently hit-tested element inside a composite cell.
///
/// The composite resolves which sub-element the pointer is over, so these
/// callbacks carry no offset.
pub trait Subcell {
    fn on_right_click(&mut self);
    fn on_left_click(&mut self);
    fn on_hover(&mut self);
    fn on_unhover(&mut self);
}

impl<F> Subcell for F
where
    F: FnMut(SubcellEvent),
{
    fn on_right_click(&mut self) {
        self(SubcellEvent::RightClick);
    }

    fn on_left_click(&mut self) {
        self(SubcellEvent::LeftClick);
    }

    fn on_hover(&mut self) {
        self(SubcellEvent::Hover);
    }

    fn on_unhover(&mut self) {
        self(SubcellEvent::Unhover);
    }
}

/// Clamp a reported size to finite, non-negative components.
///
/// A bad component counts as zero.
pub(crate) fn sanitize_size(size: Vector2d) -> Vector2d {
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Vector2d::new(clean(size.x), clean(size.y))
}
