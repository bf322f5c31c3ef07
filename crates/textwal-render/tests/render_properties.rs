//! End-to-end properties of the render pipeline
//!
//! A deterministic mock font (fixed advance, solid square glyphs) makes
//! every pixel position predictable, so alignment and blending can be
//! asserted exactly.

use textwal_core::error::Result;
use textwal_core::traits::FontFace;
use textwal_core::types::{BitmapData, FontMetrics, GlyphBitmap, GlyphId};
use textwal_core::{CharAlign, Color, RenderOptions, TextAlign};
use textwal_render::render;

/// Monospaced test font: upem 1000, advance 500, ascender 800, descender
/// -200. Every printable glyph is a solid 10x10 square sitting on the
/// baseline; spaces are ink-free.
struct SquareFont;

impl FontFace for SquareFont {
    fn units_per_em(&self) -> u16 {
        1000
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        ch.is_ascii().then_some(ch as u32)
    }

    fn advance_width(&self, _glyph_id: GlyphId) -> f32 {
        500.0
    }

    fn metrics(&self) -> FontMetrics {
        FontMetrics {
            ascender: 800.0,
            descender: -200.0,
            line_gap: 0.0,
        }
    }

    fn rasterize(&self, glyph_id: GlyphId, _size: f32) -> Result<GlyphBitmap> {
        if glyph_id == ' ' as u32 {
            return Ok(GlyphBitmap::empty());
        }
        Ok(GlyphBitmap {
            width: 10,
            height: 10,
            left: 0,
            top: 10,
            data: vec![255; 100],
        })
    }
}

fn options() -> RenderOptions {
    RenderOptions {
        font_size: 48,
        width: 200,
        height: 100,
        ..RenderOptions::default()
    }
}

fn pixel(bitmap: &BitmapData, x: u32, y: u32) -> Color {
    let idx = (y as usize * bitmap.width as usize + x as usize) * 3;
    Color::rgb(bitmap.data[idx], bitmap.data[idx + 1], bitmap.data[idx + 2])
}

#[test]
fn test_output_dimensions_match_options() {
    for (width, height) in [(200, 100), (1, 1), (17, 31)] {
        let opts = RenderOptions {
            width,
            height,
            ..options()
        };
        let bitmap = render("Hi", &SquareFont, &opts).unwrap();
        assert_eq!(bitmap.width, width);
        assert_eq!(bitmap.height, height);
        assert_eq!(bitmap.data.len(), width as usize * height as usize * 3);
    }
}

#[test]
fn test_uncovered_pixels_keep_the_background() {
    let opts = RenderOptions {
        bg_color: Color::rgb(12, 34, 56),
        ..options()
    };
    let bitmap = render("A", &SquareFont, &opts).unwrap();

    for (x, y) in [(0, 0), (199, 0), (0, 99), (199, 99)] {
        assert_eq!(pixel(&bitmap, x, y), opts.bg_color);
    }
}

#[test]
fn test_full_coverage_paints_the_exact_text_color() {
    let opts = RenderOptions {
        text_color: Color::rgb(200, 10, 10),
        ..options()
    };
    let bitmap = render("A", &SquareFont, &opts).unwrap();

    // advance 24px, block width 24, start_x = (200 - 24) / 2 = 88;
    // baseline = (100 - 48) / 2 + 38.4 -> 64; square covers rows 54..64
    assert_eq!(pixel(&bitmap, 88, 58), opts.text_color);
    assert_eq!(pixel(&bitmap, 97, 63), opts.text_color);
}

#[test]
fn test_rendering_twice_is_byte_identical() {
    let opts = options();
    let first = render("Hello\nWorld", &SquareFont, &opts).unwrap();
    let second = render("Hello\nWorld", &SquareFont, &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_centred_pair_advances_by_one_advance_width() {
    let opts = options();
    let bitmap = render("AB", &SquareFont, &opts).unwrap();

    // max width 48, start_x = 76, baseline 64; 'A' square at columns
    // 76..86, 'B' starts one advance (24px) later at 100
    assert_eq!(pixel(&bitmap, 76, 58), opts.text_color);
    assert_eq!(pixel(&bitmap, 100, 58), opts.text_color);
    // The inter-square gap and the far side stay background
    assert_eq!(pixel(&bitmap, 90, 58), opts.bg_color);
    assert_eq!(pixel(&bitmap, 111, 58), opts.bg_color);
}

#[test]
fn test_top_left_anchor_starts_at_origin_and_ascender() {
    let opts = RenderOptions {
        font_size: 50,
        text_align: TextAlign::TopLeft,
        char_align: CharAlign::Right,
        ..options()
    };
    let bitmap = render("A", &SquareFont, &opts).unwrap();

    // ascender 40px; the square hangs from the baseline: rows 30..40
    assert_eq!(pixel(&bitmap, 0, 30), opts.text_color);
    assert_eq!(pixel(&bitmap, 9, 39), opts.text_color);
    assert_eq!(pixel(&bitmap, 0, 29), opts.bg_color);
    assert_eq!(pixel(&bitmap, 0, 0), opts.bg_color);
    assert_eq!(pixel(&bitmap, 10, 30), opts.bg_color);
}

#[test]
fn test_left_advancing_pen_walks_leftward() {
    let opts = RenderOptions {
        char_align: CharAlign::Left,
        ..options()
    };
    let bitmap = render("AB", &SquareFont, &opts).unwrap();

    // block anchor 76, pen start 76 + (48 - 48) = 76; 'B' lands one
    // advance to the left at 52
    assert_eq!(pixel(&bitmap, 76, 58), opts.text_color);
    assert_eq!(pixel(&bitmap, 52, 58), opts.text_color);
    assert_eq!(pixel(&bitmap, 66, 58), opts.bg_color);
}

#[test]
fn test_oversized_text_is_clipped_not_fatal() {
    let opts = RenderOptions {
        font_size: 48,
        width: 10,
        height: 10,
        ..options()
    };
    let bitmap = render("Hello World", &SquareFont, &opts).unwrap();

    assert_eq!(bitmap.width, 10);
    assert_eq!(bitmap.height, 10);
    assert_eq!(bitmap.data.len(), 300);
}

#[test]
fn test_zero_length_text_yields_a_plain_background() {
    let opts = options();
    let bitmap = render("", &SquareFont, &opts).unwrap();

    for y in 0..opts.height {
        for x in 0..opts.width {
            assert_eq!(pixel(&bitmap, x, y), opts.bg_color);
        }
    }
}

#[test]
fn test_spaces_advance_without_ink() {
    let opts = options();
    let with_space = render("A B", &SquareFont, &opts).unwrap();

    // "A B" measures 72px: start_x = 64, baseline 64; 'A' at 64..74,
    // space leaves 88..98 blank, 'B' at 112..122
    assert_eq!(pixel(&with_space, 64, 58), opts.text_color);
    assert_eq!(pixel(&with_space, 92, 58), opts.bg_color);
    assert_eq!(pixel(&with_space, 112, 58), opts.text_color);
}
