//! # Outlined Words
//!
//! An [`OutlinedWord`] owns a piece of text and lazily derives its contour
//! buffers, quadratic outline and bounds from a glyph outline source. Each
//! artifact is computed at most once per word and never changes afterwards.
//! To outline different text, build a new word.
//!
//! The caches are `std::cell::OnceCell`s, so a word cannot be shared across
//! threads.

use std::cell::OnceCell;
use std::fmt;

use glyphkit_core::{Rect, Result};
use tracing::debug;

use crate::draw::{replay, ShapeSink};
use crate::extract::{extract_with, ContourSet};
use crate::reconstruct::{reconstruct, QuadraticPath};
use crate::source::GlyphOutlineSource;

/// A piece of text with lazily cached contours, outline and bounds.
pub struct OutlinedWord<'s> {
    value: String,
    source: &'s dyn GlyphOutlineSource,
    contours: OnceCell<ContourSet>,
    outline: OnceCell<QuadraticPath>,
    bounds: OnceCell<Rect>,
}

impl<'s> OutlinedWord<'s> {
    pub fn new(source: &'s dyn GlyphOutlineSource, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source,
            contours: OnceCell::new(),
            outline: OnceCell::new(),
            bounds: OnceCell::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Vertex buffer and contour index arrays, extracted on first access.
    ///
    /// A failed extraction is not cached; the next call asks the source again.
    pub fn contours(&self) -> Result<&ContourSet> {
        if let Some(set) = self.contours.get() {
            return Ok(set);
        }
        let commands = self.source.outline(&self.value)?;
        let (set, stats) = extract_with(&commands, &self.source.extract_options())?;
        debug!(
            "Outlined {:?}: {} commands, {} contours",
            self.value, stats.commands, stats.contours
        );
        Ok(self.contours.get_or_init(|| set))
    }

    /// The closed quadratic outline of the word.
    pub fn outline(&self) -> Result<&QuadraticPath> {
        if let Some(path) = self.outline.get() {
            return Ok(path);
        }
        let set = self.contours()?;
        let path = reconstruct(set.vertices(), set.contours())?;
        Ok(self.outline.get_or_init(|| path))
    }

    /// Bounding box of the reconstructed outline.
    pub fn bounds(&self) -> Result<Rect> {
        if let Some(bounds) = self.bounds.get() {
            return Ok(*bounds);
        }
        let bounds = self.outline()?.bounds();
        Ok(*self.bounds.get_or_init(|| bounds))
    }

    /// Replay the outline on `sink`.
    pub fn draw<S: ShapeSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        replay(self.outline()?, sink);
        Ok(())
    }
}

impl fmt::Display for OutlinedWord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for OutlinedWord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlinedWord")
            .field("value", &self.value)
            .field("outlined", &self.outline.get().is_some())
            .finish()
    }
}
