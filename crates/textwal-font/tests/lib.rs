//! Integration tests against a real system font
//!
//! These tests exercise the full load → measure → rasterize path. They skip
//! silently when no known system font is installed, so CI images without
//! fonts still pass.

use std::path::PathBuf;

use textwal_core::traits::FontFace;
use textwal_font::Font;

fn system_font() -> Option<PathBuf> {
    const CANDIDATES: [&str; 5] = [
        "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    ];
    CANDIDATES.iter().map(PathBuf::from).find(|path| path.exists())
}

#[test]
fn test_load_when_real_font_present_then_metrics_are_sane() {
    let Some(path) = system_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let font = Font::from_file(&path).expect("load system font");

    assert!(font.units_per_em() >= 16);

    let metrics = font.metrics();
    assert!(metrics.ascender > 0.0, "ascender should be positive");
    assert!(metrics.descender < 0.0, "descender should be negative");
    assert!(metrics.line_height() > 0.0);
}

#[test]
fn test_measure_when_real_font_present_then_advances_are_positive() {
    let Some(path) = system_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let font = Font::from_file(&path).expect("load system font");

    let glyph = font.glyph_id('A').expect("font should map 'A'");
    assert!(font.advance_width(glyph) > 0.0);

    // The measure query must not depend on rasterization
    let space = font.glyph_id(' ').expect("font should map space");
    assert!(font.advance_width(space) > 0.0);
}

#[test]
fn test_rasterize_when_real_font_present_then_coverage_is_tight() {
    let Some(path) = system_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let font = Font::from_file(&path).expect("load system font");
    let size = 48.0;

    let glyph = font.glyph_id('A').expect("font should map 'A'");
    let bitmap = font.rasterize(glyph, size).expect("rasterize 'A'");

    assert!(!bitmap.is_empty(), "'A' should have ink");
    assert_eq!(bitmap.data.len(), (bitmap.width * bitmap.height) as usize);
    // A 48px glyph fits comfortably inside a 96px box
    assert!(bitmap.width <= 96 && bitmap.height <= 96);
    // The cap sits on the baseline and rises above it
    assert!(bitmap.top > 0);
    assert!(bitmap.data.iter().any(|&coverage| coverage > 0));

    // Spaces rasterize to nothing without erroring
    let space = font.glyph_id(' ').expect("font should map space");
    let empty = font.rasterize(space, size).expect("rasterize space");
    assert!(empty.is_empty());
}

#[test]
fn test_rasterize_when_same_glyph_twice_then_output_is_identical() {
    let Some(path) = system_font() else {
        eprintln!("Skipping test: no system font found");
        return;
    };

    let font = Font::from_file(&path).expect("load system font");
    let glyph = font.glyph_id('g').expect("font should map 'g'");

    let first = font.rasterize(glyph, 32.0).expect("rasterize 'g'");
    let second = font.rasterize(glyph, 32.0).expect("rasterize 'g'");
    assert_eq!(first, second);
}
