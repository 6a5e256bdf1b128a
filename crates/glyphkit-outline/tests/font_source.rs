//! Tests against a real installed font. Skipped when the system has none.

use glyphkit_outline::{
    FontLibrary, FontOutlineSource, GlyphOutlineSource, OutlineConfig, OutlinedWord, SvgPathSink,
};

fn source() -> Option<FontOutlineSource> {
    let library = FontLibrary::system();
    if library.is_empty() {
        return None;
    }
    FontOutlineSource::with_library(&library, OutlineConfig::default()).ok()
}

#[test]
fn test_word_outline_has_closed_quadratic_contours() {
    let Some(source) = source() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let word = OutlinedWord::new(&source, "White");

    let set = word.contours().unwrap();
    assert!(!set.contours().is_empty());
    for contour in set.contours() {
        assert_eq!(contour.len() % 2, 1);
    }

    let path = word.outline().unwrap();
    assert!(!path.is_empty());
    assert!(path.segment_count() > 10);

    let bounds = word.bounds().unwrap();
    assert!(bounds.width > 0.0);
    assert!(bounds.height > 0.0);

    let mut sink = SvgPathSink::new();
    word.draw(&mut sink).unwrap();
    let data = sink.into_string();
    assert!(data.starts_with('M'));
    assert!(data.ends_with('Z'));
    assert!(!data.contains('L'));
    assert!(!data.contains('C'));
}

#[test]
fn test_wider_text_has_wider_bounds() {
    let Some(source) = source() else {
        return;
    };
    let short = OutlinedWord::new(&source, "I");
    let long = OutlinedWord::new(&source, "IIII");
    assert!(long.bounds().unwrap().width > short.bounds().unwrap().width);
}

#[test]
fn test_spaces_have_no_outline() {
    let Some(source) = source() else {
        return;
    };
    let commands = GlyphOutlineSource::outline(&source, "   ").unwrap();
    assert!(commands.is_empty());
    let word = OutlinedWord::new(&source, "   ");
    assert!(word.outline().unwrap().is_empty());
}
