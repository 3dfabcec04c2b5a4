//! Composite cell made of a row (or diagonal) of hit-testable circles.
//!
//! Circles are laid out by accumulating a uniform spacing vector: circle `i`
//! is centered at `i * spacing` before the whole group is shifted so the
//! bounding box (radii plus border padding included) starts at (0, 0).
//!
//! Each circle forwards pointer events to its own `Subcell`. At most one
//! circle is hovered at a time; where circles overlap, the one declared last
//! wins, matching the order they are drawn in.
//!
//! Pointer offsets arrive relative to the assigned box and are shifted by the
//! centering offset before hit-testing, so they line up with what `render`
//! drew.

use std::cell::OnceCell;
use std::fmt;

use super::{CellHandle, Subcell};
use crate::layout::centering_offset;
use crate::render::{DrawSink, TextMeasure};
use crate::types::Vector2d;

/// One circle of a `CirclesCell` and the element it forwards events to.
pub struct Circle {
    pub radius: f64,
    pub subcell: Box<dyn Subcell>,
}

impl Circle {
    pub fn new(radius: f64, subcell: impl Subcell + 'static) -> Self {
        Self {
            radius,
            subcell: Box::new(subcell),
        }
    }

    fn effective_radius(&self) -> f64 {
        if self.radius.is_finite() && self.radius > 0.0 {
            self.radius
        } else {
            0.0
        }
    }
}

impl fmt::Debug for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circle")
            .field("radius", &self.radius)
            .finish_non_exhaustive()
    }
}

/// Cell-local geometry, computed once.
#[derive(Debug, Clone, PartialEq)]
struct CircleGeometry {
    size: Vector2d,
    centers: Vec<Vector2d>,
}

#[derive(Debug)]
pub struct CirclesCell {
    circles: Vec<Circle>,
    spacing: Vector2d,
    border_padding: Vector2d,
    geometry: OnceCell<CircleGeometry>,
    /// Box assigned by the grid; `None` until the first routed event
    assigned: Option<Vector2d>,
    hovered: Option<usize>,
}

impl CirclesCell {
    /// Empty composite. `spacing` is the step between consecutive centers;
    /// `border_padding` is added around every circle when sizing the cell.
    #[must_use]
    pub fn new(spacing: Vector2d, border_padding: Vector2d) -> Self {
        Self {
            circles: Vec::new(),
            spacing,
            border_padding,
            geometry: OnceCell::new(),
            assigned: None,
            hovered: None,
        }
    }

    #[must_use]
    pub fn with_circle(mut self, radius: f64, subcell: impl Subcell + 'static) -> Self {
        self.push(Circle::new(radius, subcell));
        self
    }

    pub fn push(&mut self, circle: Circle) {
        self.circles.push(circle);
        self.geometry = OnceCell::new();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Index of the currently hovered circle.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Center of circle `idx` in cell-local coordinates.
    #[must_use]
    pub fn center(&self, idx: usize) -> Option<Vector2d> {
        self.geometry().centers.get(idx).copied()
    }

    /// Circle under `offset`, searching from the last declared circle.
    #[must_use]
    pub fn circle_at(&self, offset: Vector2d) -> Option<usize> {
        let geometry = self.geometry();
        self.circles
            .iter()
            .zip(&geometry.centers)
            .enumerate()
            .rev()
            .find(|(_, (circle, center))| center.distance(offset) <= circle.effective_radius())
            .map(|(idx, _)| idx)
    }

    /// Map a box-relative pointer offset into cell-local coordinates.
    fn to_local(&self, offset: Vector2d) -> Vector2d {
        match self.assigned {
            Some(assigned) => offset - centering_offset(assigned, self.geometry().size),
            None => offset,
        }
    }

    fn geometry(&self) -> &CircleGeometry {
        self.geometry.get_or_init(|| self.compute_geometry())
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_geometry(&self) -> CircleGeometry {
        let raw: Vec<Vector2d> = (0..self.circles.len())
            .map(|i| self.spacing * i as f64)
            .collect();

        let bounds = self
            .circles
            .iter()
            .zip(&raw)
            .map(|(circle, &center)| {
                let reach = Vector2d::splat(circle.effective_radius()) + self.border_padding;
                (center - reach, center + reach)
            })
            .reduce(|(tl_a, br_a), (tl_b, br_b)| (tl_a.min(tl_b), br_a.max(br_b)));

        let Some((top_left, bot_right)) = bounds else {
            return CircleGeometry {
                size: Vector2d::ZERO,
                centers: Vec::new(),
            };
        };

        CircleGeometry {
            size: bot_right - top_left,
            centers: raw.into_iter().map(|c| c - top_left).collect(),
        }
    }

    fn subcell_mut(&mut self, idx: usize) -> Option<&mut (dyn Subcell + 'static)> {
        self.circles.get_mut(idx).map(|c| c.subcell.as_mut())
    }
}

impl CellHandle for CirclesCell {
    fn render(&self, sink: &mut dyn DrawSink) {
        let geometry = self.geometry();
        for (idx, (circle, &center)) in self.circles.iter().zip(&geometry.centers).enumerate() {
            let radius = circle.effective_radius();
            if self.hovered == Some(idx) {
                sink.fill_circle(center, radius);
            } else {
                sink.stroke_circle(center, radius);
            }
        }
    }

    fn size(&self, _measure: &dyn TextMeasure) -> Vector2d {
        self.geometry().size
    }

    fn set_assigned_size(&mut self, assigned: Vector2d) {
        self.assigned = Some(assigned);
    }

    fn on_right_click(&mut self, offset: Vector2d) {
        let offset = self.to_local(offset);
        if let Some(sub) = self.circle_at(offset).and_then(|i| self.subcell_mut(i)) {
            sub.on_right_click();
        }
    }

    fn on_left_click(&mut self, offset: Vector2d) {
        let offset = self.to_local(offset);
        if let Some(sub) = self.circle_at(offset).and_then(|i| self.subcell_mut(i)) {
            sub.on_left_click();
        }
    }

    fn on_hover(&mut self, offset: Vector2d) {
        let next = self.circle_at(self.to_local(offset));
        if next == self.hovered {
            return;
        }
        tracing::trace!(from = ?self.hovered, to = ?next, "circle hover changed");
        if let Some(sub) = self.hovered.and_then(|i| self.subcell_mut(i)) {
            sub.on_unhover();
        }
        if let Some(sub) = next.and_then(|i| self.subcell_mut(i)) {
            sub.on_hover();
        }
        self.hovered = next;
    }

    fn on_unhover(&mut self) {
        if let Some(sub) = self.hovered.take().and_then(|i| self.subcell_mut(i)) {
            sub.on_unhover();
        }
    }
}
