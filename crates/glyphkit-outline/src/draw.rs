//! # Draw Adapter
//!
//! Replays a [`QuadraticPath`] as a sequence of shape primitives on a
//! rendering sink. Each sub-path becomes exactly one
//! `begin_shape .. end_shape` pair, in path order.

use std::fmt::Write;

use glyphkit_core::Vertex;

use crate::reconstruct::QuadraticPath;

/// Receiver for immediate-mode shape primitives.
pub trait ShapeSink {
    /// Open a new closed shape.
    fn begin_shape(&mut self);
    /// First anchor of the shape.
    fn vertex(&mut self, p: Vertex);
    /// Quadratic curve from the previous anchor.
    fn quadratic_vertex(&mut self, ctrl: Vertex, to: Vertex);
    /// Close the shape back to its first anchor.
    fn end_shape(&mut self);
}

/// Invoke `sink` for every sub-path and segment of `path`, in order.
pub fn replay<S: ShapeSink + ?Sized>(path: &QuadraticPath, sink: &mut S) {
    for sp in path.sub_paths() {
        sink.begin_shape();
        sink.vertex(sp.start());
        for seg in sp.segments() {
            sink.quadratic_vertex(seg.ctrl, seg.to);
        }
        sink.end_shape();
    }
}

/// Collects SVG path data (`M`, `Q` and `Z` commands).
#[derive(Debug, Default, Clone)]
pub struct SvgPathSink {
    data: String,
}

impl SvgPathSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.data.trim_end()
    }

    pub fn into_string(self) -> String {
        self.as_str().to_string()
    }
}

impl ShapeSink for SvgPathSink {
    fn begin_shape(&mut self) {}

    fn vertex(&mut self, p: Vertex) {
        let _ = write!(self.data, "M {} {} ", p.x, p.y);
    }

    fn quadratic_vertex(&mut self, ctrl: Vertex, to: Vertex) {
        let _ = write!(self.data, "Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y);
    }

    fn end_shape(&mut self) {
        self.data.push_str("Z ");
    }
}

/// Builds a `tiny_skia::Path` that a host can fill or stroke on a pixmap.
pub struct SkiaPathSink {
    builder: tiny_skia::PathBuilder,
}

impl SkiaPathSink {
    pub fn new() -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
        }
    }

    /// Finish the path. Returns `None` when nothing was drawn.
    pub fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl Default for SkiaPathSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeSink for SkiaPathSink {
    fn begin_shape(&mut self) {}

    fn vertex(&mut self, p: Vertex) {
        self.builder.move_to(p.x, p.y);
    }

    fn quadratic_vertex(&mut self, ctrl: Vertex, to: Vertex) {
        self.builder.quad_to(ctrl.x, ctrl.y, to.x, to.y);
    }

    fn end_shape(&mut self) {
        self.builder.close();
    }
}
