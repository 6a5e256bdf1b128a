//! # GlyphKit Core
//!
//! Core types, errors, and configuration shared by the GlyphKit crates.
//! Provides the glyph-space geometry primitives, the path command stream
//! consumed by contour extraction, and the explicit outline configuration
//! that replaces any process-wide font render context.

pub mod command;
pub mod config;
pub mod error;
pub mod types;

pub use command::PathCommand;
pub use config::{CubicPolicy, FontConfig, OutlineConfig};
pub use error::{ConfigError, ConfigResult, FontError, OutlineError, Result};
pub use types::{vertex, Rect, Vertex};
