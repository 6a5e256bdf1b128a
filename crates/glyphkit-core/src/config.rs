//! Outline configuration
//!
//! Every parameter that influences how a word is turned into an outline
//! lives in [`OutlineConfig`], which is passed explicitly to the glyph
//! outline source. Configs can be loaded from and saved to JSON or TOML
//! files, chosen by extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// What contour extraction does with cubic curve segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubicPolicy {
    /// Discard the segment; no vertices are emitted
    Drop,
    /// Replace the segment by one or more quadratic curves
    #[default]
    Approximate,
}

impl std::fmt::Display for CubicPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drop => write!(f, "drop"),
            Self::Approximate => write!(f, "approximate"),
        }
    }
}

/// Font selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Family name; "", "Sans", "Serif" and "Monospace" select generic families
    pub family: String,
    pub bold: bool,
    pub italic: bool,
    /// Explicit font file, takes priority over the family lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            bold: false,
            italic: false,
            path: None,
        }
    }
}

/// Outline extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Em size in output units
    pub font_size: f32,
    /// Top-left of the text line; the baseline sits one ascent below
    pub origin: (f32, f32),
    pub cubic_policy: CubicPolicy,
    /// Maximum deviation allowed when approximating cubics
    pub cubic_tolerance: f32,
    pub font: FontConfig,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            font_size: 64.0,
            origin: (0.0, 0.0),
            cubic_policy: CubicPolicy::Approximate,
            cubic_tolerance: 0.1,
            font: FontConfig::default(),
        }
    }
}

impl OutlineConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(invalid("font_size", "must be a positive number"));
        }
        if !self.origin.0.is_finite() || !self.origin.1.is_finite() {
            return Err(invalid("origin", "must be finite"));
        }
        if !self.cubic_tolerance.is_finite() || self.cubic_tolerance <= 0.0 {
            return Err(invalid("cubic_tolerance", "must be a positive number"));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match Format::of(path)? {
            Format::Json => Self::from_json_str(&content),
            Format::Toml => Self::from_toml_str(&content),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;
        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        tracing::debug!("Saved outline config to {}", path.display());
        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
