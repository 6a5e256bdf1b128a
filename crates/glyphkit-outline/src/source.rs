//! # Glyph Outline Sources
//!
//! A [`GlyphOutlineSource`] turns text into a raw command stream. The
//! font-backed implementation lays the text out with `rusttype` and
//! records each positioned glyph's outline.

use glyphkit_core::{vertex, OutlineConfig, OutlineError, PathCommand, Result};
use rusttype::{point as rt_point, Font, OutlineBuilder, Scale};

use crate::extract::ExtractOptions;
use crate::font_manager::{self, FontLibrary};

/// Produces the raw outline of a string.
pub trait GlyphOutlineSource {
    /// Raw path commands for `text`, in device coordinates.
    fn outline(&self, text: &str) -> Result<Vec<PathCommand>>;

    /// How extraction should treat this source's commands.
    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::default()
    }
}

/// Records `rusttype` outline callbacks as [`PathCommand`]s.
#[derive(Debug, Default)]
pub struct CommandCollector {
    commands: Vec<PathCommand>,
}

impl CommandCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }
}

impl OutlineBuilder for CommandCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(vertex(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(vertex(x, y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands
            .push(PathCommand::QuadTo(vertex(x1, y1), vertex(x, y)));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicTo(
            vertex(x1, y1),
            vertex(x2, y2),
            vertex(x, y),
        ));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

/// Outline source backed by a TrueType/OpenType font.
pub struct FontOutlineSource {
    font: Font<'static>,
    config: OutlineConfig,
}

impl FontOutlineSource {
    /// Resolve the configured font from the system font database.
    pub fn new(config: OutlineConfig) -> Result<Self> {
        Self::with_library(&FontLibrary::system(), config)
    }

    /// Resolve the configured font from an existing library.
    pub fn with_library(library: &FontLibrary, config: OutlineConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| OutlineError::InvalidConfig(e.to_string()))?;
        let font = library.load(&config.font)?;
        Ok(Self::from_font(font, config))
    }

    /// Parse font bytes directly, ignoring the configured font selection.
    pub fn from_bytes(bytes: Vec<u8>, config: OutlineConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| OutlineError::InvalidConfig(e.to_string()))?;
        let font = font_manager::font_from_bytes(bytes)?;
        Ok(Self::from_font(font, config))
    }

    pub fn from_font(font: Font<'static>, config: OutlineConfig) -> Self {
        Self { font, config }
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }
}

impl GlyphOutlineSource for FontOutlineSource {
    fn outline(&self, text: &str) -> Result<Vec<PathCommand>> {
        let scale = Scale::uniform(self.config.font_size);
        let v_metrics = self.font.v_metrics(scale);
        let (x, y) = self.config.origin;
        let start = rt_point(x, y + v_metrics.ascent);

        let mut collector = CommandCollector::new();
        for glyph in self.font.layout(text, scale, start) {
            glyph.build_outline(&mut collector);
        }
        tracing::trace!(
            "Collected {} outline commands for {:?}",
            collector.commands().len(),
            text
        );
        Ok(collector.into_commands())
    }

    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::from(&self.config)
    }
}
