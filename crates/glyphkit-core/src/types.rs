//! Glyph-space geometry primitives.

use lyon::math::Box2D;
use serde::{Deserialize, Serialize};

/// A 2D point in glyph-local coordinate space.
///
/// This is `lyon`'s point type so that outlines can be handed to the
/// `lyon` geometry and path APIs without conversion.
pub type Vertex = lyon::math::Point;

/// Shorthand constructor for a [`Vertex`].
#[inline]
pub fn vertex(x: f32, y: f32) -> Vertex {
    lyon::math::point(x, y)
}

/// Axis-aligned rectangle described by its origin and extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from a `lyon` box. Inverted boxes collapse to
    /// a zero-sized rectangle at the origin.
    pub fn from_box(bb: Box2D) -> Self {
        if bb.min.x > bb.max.x || bb.min.y > bb.max.y {
            return Self::default();
        }
        Self::new(bb.min.x, bb.min.y, bb.max.x - bb.min.x, bb.max.y - bb.min.y)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, p: Vertex) -> bool {
        p.x >= self.x && p.x <= self.max_x() && p.y >= self.y && p.y <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::math::point;

    #[test]
    fn test_rect_from_box() {
        let r = Rect::from_box(Box2D::new(point(1.0, 2.0), point(4.0, 8.0)));
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 6.0));
        assert_eq!(r.max_x(), 4.0);
        assert_eq!(r.max_y(), 8.0);
        assert_eq!(r.area(), 18.0);
        assert!(r.contains(vertex(2.0, 3.0)));
        assert!(!r.contains(vertex(5.0, 3.0)));
    }

    #[test]
    fn test_rect_from_inverted_box_is_zero() {
        let bb = Box2D::new(point(f32::MAX, f32::MAX), point(f32::MIN, f32::MIN));
        let r = Rect::from_box(bb);
        assert_eq!(r, Rect::default());
        assert!(r.is_empty());
    }

    #[test]
    fn test_degenerate_line_has_no_area() {
        let r = Rect::from_box(Box2D::new(point(0.0, 0.0), point(10.0, 0.0)));
        assert_eq!(r.width, 10.0);
        assert!(r.is_empty());
    }
}
