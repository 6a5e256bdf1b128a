//! Error handling for GlyphKit
//!
//! Provides the error types for each layer:
//! - Outline errors (malformed command streams, bad contour indices)
//! - Font errors (lookup and parsing)
//! - Config errors (loading, saving, validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Outline error type
///
/// Represents failures of the extraction and reconstruction pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlineError {
    /// A segment command arrived while no contour was open
    #[error("Malformed outline: {command} at command {index} has no open contour")]
    Malformed {
        /// Position of the offending command in the stream.
        index: usize,
        /// Tag of the offending command.
        command: &'static str,
    },

    /// A contour referenced a vertex that does not exist
    #[error("Contour index {index} out of range for {len} vertices")]
    IndexOutOfRange {
        /// The offending vertex index.
        index: usize,
        /// Length of the vertex buffer.
        len: usize,
    },

    /// The outline configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The glyph outline source could not provide a font
    #[error("Font error: {0}")]
    Font(#[from] FontError),
}

/// Font error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    /// No installed font matches the requested family
    #[error("No font found for family '{family}'")]
    NotFound {
        /// The requested family name.
        family: String,
    },

    /// The font file could not be read
    #[error("Failed to read font file {}: {reason}", path.display())]
    Io {
        /// The font file path.
        path: PathBuf,
        /// The reason reading failed.
        reason: String,
    },

    /// The font bytes are not a valid TrueType/OpenType font
    #[error("Font data could not be parsed: {0}")]
    Parse(String),
}

/// Errors related to outline configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is out of its valid range.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

/// Result type alias for outline operations.
pub type Result<T, E = OutlineError> = std::result::Result<T, E>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
