//! The glyph compositor: walks lines and characters, blending coverage
//! bitmaps into the canvas

use textwal_core::traits::FontFace;
use textwal_core::types::GlyphBitmap;
use textwal_core::{Color, RenderOptions};

use crate::canvas::Canvas;
use crate::layout::TextLayout;

/// Draw every character of `text` at the placement the layout engine chose
///
/// Characters the font cannot resolve or rasterize are skipped without
/// advancing the pen; a bad glyph never aborts the render. All writes go
/// through the canvas's clipped blend, so nothing lands outside the buffer.
pub(crate) fn composite(
    canvas: &mut Canvas,
    text: &str,
    font: &dyn FontFace,
    layout: &TextLayout,
    options: &RenderOptions,
) {
    let size = options.font_size as f32;
    let scale = size / font.units_per_em() as f32;

    let mut baseline = layout.start_y;
    for line in text.lines() {
        let mut pen_x = layout.start_x;
        for ch in line.chars() {
            let Some(glyph_id) = font.glyph_id(ch) else {
                log::debug!("no glyph for {ch:?}, skipping");
                continue;
            };

            let bitmap = match font.rasterize(glyph_id, size) {
                Ok(bitmap) => bitmap,
                Err(err) => {
                    log::warn!("failed to rasterize {ch:?} (glyph {glyph_id}): {err}");
                    continue;
                },
            };

            if !bitmap.is_empty() {
                blend_glyph(canvas, &bitmap, pen_x as i32, baseline as i32, options.text_color);
            }

            pen_x += layout.advance_sign * font.advance_width(glyph_id) * scale;
        }

        baseline += layout.line_height;
    }
}

/// Blend one coverage grid; its top-left corner lands at
/// `(pen + left, baseline - top)`
fn blend_glyph(canvas: &mut Canvas, bitmap: &GlyphBitmap, pen_x: i32, baseline_y: i32, color: Color) {
    let origin_x = pen_x + bitmap.left;
    let origin_y = baseline_y - bitmap.top;

    for row in 0..bitmap.height {
        for col in 0..bitmap.width {
            let coverage = bitmap.data[(row * bitmap.width + col) as usize];
            canvas.blend_pixel(
                origin_x + col as i32,
                origin_y + row as i32,
                color,
                coverage,
            );
        }
    }
}
