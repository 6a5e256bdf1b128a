use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use glyphkit_core::{FontConfig, FontError};
use rusttype::Font;
use std::{collections::HashSet, fs, path::Path};

/// Font database used to resolve [`FontConfig`]s into parsed fonts.
pub struct FontLibrary {
    db: Database,
}

impl FontLibrary {
    /// Library without any fonts loaded.
    pub fn empty() -> Self {
        Self { db: Database::new() }
    }

    /// Library populated with the fonts installed on this system.
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self { db }
    }

    /// Register in-memory font data.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    pub fn list_font_families(&self) -> Vec<String> {
        let mut set = HashSet::new();
        for face in self.db.faces() {
            for (name, _) in &face.families {
                set.insert(name.clone());
            }
        }
        let mut out: Vec<_> = set.into_iter().collect();
        out.sort();
        out
    }

    /// Resolve a font; an explicit file path wins over the family query.
    pub fn load(&self, config: &FontConfig) -> Result<Font<'static>, FontError> {
        if let Some(path) = &config.path {
            return load_font_file(path);
        }
        self.load_from_db(&config.family, config.bold, config.italic)
            .ok_or_else(|| FontError::NotFound {
                family: config.family.clone(),
            })
    }

    fn load_from_db(&self, family: &str, bold: bool, italic: bool) -> Option<Font<'static>> {
        let families: Vec<Family<'_>> = match family.trim() {
            "" | "Sans" => vec![Family::SansSerif],
            "Serif" => vec![Family::Serif],
            "Monospace" => vec![Family::Monospace],
            other => vec![Family::Name(other)],
        };

        let query = Query {
            families: &families,
            weight: if bold { Weight::BOLD } else { Weight::NORMAL },
            stretch: Stretch::Normal,
            style: if italic { Style::Italic } else { Style::Normal },
        };

        let id = self.db.query(&query)?;
        let face = self.db.face(id)?;

        let bytes = match &face.source {
            fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
                fs::read(path).ok()?
            }
            fontdb::Source::Binary(bytes) => bytes.as_ref().as_ref().to_vec(),
        };
        Font::try_from_vec_and_index(bytes, face.index)
    }
}

/// Parse a font straight from a file.
pub fn load_font_file(path: &Path) -> Result<Font<'static>, FontError> {
    let bytes = fs::read(path).map_err(|e| FontError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    font_from_bytes(bytes)
}

pub fn font_from_bytes(bytes: Vec<u8>) -> Result<Font<'static>, FontError> {
    Font::try_from_vec(bytes)
        .ok_or_else(|| FontError::Parse("not a TrueType/OpenType font".to_string()))
}
