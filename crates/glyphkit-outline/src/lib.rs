//! # GlyphKit Outline
//!
//! Turns the outline of rendered text into a deformable contour
//! representation made exclusively of quadratic segments.
//!
//! ## Pipeline
//!
//! ```text
//! GlyphOutlineSource (text -> PathCommand stream)
//!   └── extract      (vertex buffer + contour index arrays)
//!         └── reconstruct (closed QuadraticPath)
//!               ├── OutlinedWord (caches outline and bounds)
//!               └── replay       (ShapeSink primitives)
//! ```
//!
//! Straight edges become degenerate quadratics with their control point at
//! the edge midpoint, and their end points are duplicated so corners stay
//! sharp when the vertex buffer is later deformed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use glyphkit_outline::{FontOutlineSource, OutlinedWord, SvgPathSink};
//!
//! let source = FontOutlineSource::new(Default::default())?;
//! let word = OutlinedWord::new(&source, "white");
//! let mut sink = SvgPathSink::new();
//! word.draw(&mut sink)?;
//! ```

pub mod draw;
pub mod extract;
pub mod font_manager;
pub mod reconstruct;
pub mod source;
pub mod word;

pub use draw::{replay, ShapeSink, SkiaPathSink, SvgPathSink};
pub use extract::{
    extract, extract_with, Contour, ContourExtractor, ContourSet, ExtractOptions, ExtractStats,
};
pub use font_manager::FontLibrary;
pub use reconstruct::{reconstruct, QuadSegment, QuadraticPath, SubPath};
pub use source::{CommandCollector, FontOutlineSource, GlyphOutlineSource};
pub use word::OutlinedWord;

pub use glyphkit_core::{
    vertex, CubicPolicy, FontConfig, FontError, OutlineConfig, OutlineError, PathCommand, Rect,
    Result, Vertex,
};
