//! Axis-aligned rectangle geometry
//!
//! Everything in the play field is an AABB with a top-left anchor in a y-down
//! coordinate system (y = 0 is the top of the world).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both positive)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Whether two rectangles, each inflated by `padding` on all sides,
    /// intersect with nonzero area.
    ///
    /// Half-open semantics: edge-to-edge contact does not count as overlap
    /// when `padding` is zero.
    pub fn overlaps(&self, other: &Rect, padding: f32) -> bool {
        self.left() < other.right() + padding
            && self.right() + padding > other.left()
            && self.top() < other.bottom() + padding
            && self.bottom() + padding > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_detected() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b, 0.0));
        assert!(b.overlaps(&a, 0.0));
    }

    #[test]
    fn disjoint_rects_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b, 0.0));
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        // Right edge of `a` exactly touches left edge of `b`
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b, 0.0));
    }

    #[test]
    fn padding_inflates_the_test() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(14.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b, 0.0));
        assert!(!a.overlaps(&b, 4.0));
        assert!(a.overlaps(&b, 5.0));
    }

    #[test]
    fn vertical_separation_misses() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 30.0, 10.0, 10.0);
        assert!(!a.overlaps(&b, 0.0));
        assert!(a.overlaps(&b, 25.0));
    }
}
