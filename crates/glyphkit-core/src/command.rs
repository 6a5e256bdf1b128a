//! Raw glyph outline commands.
//!
//! A glyph outline source produces a flat stream of these commands in
//! glyph space. Contour extraction matches on them exhaustively.

use std::fmt;

use crate::types::Vertex;

/// One drawing command of a raw glyph outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour at the given point.
    MoveTo(Vertex),
    /// Straight edge to the given point.
    LineTo(Vertex),
    /// Quadratic curve: control point, then end anchor.
    QuadTo(Vertex, Vertex),
    /// Cubic curve: two control points, then end anchor.
    CubicTo(Vertex, Vertex, Vertex),
    /// Close the current contour.
    Close,
}

impl PathCommand {
    /// Short tag used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveTo(_) => "MoveTo",
            Self::LineTo(_) => "LineTo",
            Self::QuadTo(..) => "QuadTo",
            Self::CubicTo(..) => "CubicTo",
            Self::Close => "Close",
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            Self::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            Self::QuadTo(c, p) => write!(f, "Q {} {} {} {}", c.x, c.y, p.x, p.y),
            Self::CubicTo(c1, c2, p) => write!(
                f,
                "C {} {} {} {} {} {}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            Self::Close => write!(f, "Z"),
        }
    }
}
