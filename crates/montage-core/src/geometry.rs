//! Geometry helpers for axis-aligned item bounds.

use kurbo::Vec2;

/// Axis-aligned edges of an item, in canvas coordinates.
///
/// The canvas coordinate system is a single flat 2D plane centered at the
/// origin; an item's offset is the translation of its center from the canvas
/// center, with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Compute the edges of an item from its center offset and half-extents.
pub fn edges_of(center: Vec2, half_w: f64, half_h: f64) -> Edges {
    Edges {
        left: center.x - half_w,
        right: center.x + half_w,
        top: center.y - half_h,
        bottom: center.y + half_h,
    }
}

impl Edges {
    /// Width spanned by the edges.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height spanned by the edges.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}
