//! # GlyphKit
//!
//! Extracts the vector outline of rendered text and rewrites it as a
//! deformable contour representation for procedural, animatable
//! typography. Every straight edge becomes a degenerate quadratic, so an
//! outline can be drawn and deformed uniformly using only
//! (anchor, control point, anchor) segments.
//!
//! ## Architecture
//!
//! GlyphKit is organized as a workspace with multiple crates:
//!
//! 1. **glyphkit-core** - Geometry types, path commands, errors, configuration
//! 2. **glyphkit-outline** - Contour extraction, path reconstruction,
//!    outlined words, draw adapters, font-backed outline sources
//! 3. **glyphkit** - This crate, re-exporting the public API

pub use glyphkit_core::{
    vertex, ConfigError, CubicPolicy, FontConfig, FontError, OutlineConfig, OutlineError,
    PathCommand, Rect, Result, Vertex,
};

pub use glyphkit_outline::{
    extract, extract_with, reconstruct, replay, CommandCollector, Contour, ContourExtractor,
    ContourSet, ExtractOptions, ExtractStats, FontLibrary, FontOutlineSource,
    GlyphOutlineSource, OutlinedWord, QuadSegment, QuadraticPath, ShapeSink, SkiaPathSink,
    SubPath, SvgPathSink,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, defaulting to `info`
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(default_filter())
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("GlyphKit {} logging initialized", VERSION);
    Ok(())
}

/// `RUST_LOG` directives, falling back to `info` when unset.
fn default_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(
            default_filter().max_level_hint(),
            Some(tracing::level_filters::LevelFilter::INFO)
        );
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging();
        assert!(init_logging().is_err());
    }

    #[test]
    fn test_reexports_cover_pipeline() {
        let commands = [
            PathCommand::MoveTo(vertex(0.0, 0.0)),
            PathCommand::LineTo(vertex(2.0, 0.0)),
            PathCommand::Close,
        ];
        let set = extract(&commands).unwrap();
        let path = reconstruct(set.vertices(), set.contours()).unwrap();
        let mut sink = SvgPathSink::new();
        replay(&path, &mut sink);
        assert_eq!(sink.as_str(), "M 0 0 Q 1 0 2 0 Z");
    }
}
