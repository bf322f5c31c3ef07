//! One character at a time: outlines in, coverage bitmaps out
//!
//! skrifa extracts the glyph outline already scaled to the requested pixel
//! size; a pen records the path for zeno while tracking its bounds; zeno
//! scan-converts the path into an anti-aliased coverage mask.

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::MetadataProvider;
use zeno::{Command, Mask, Vector};

use textwal_core::error::{RenderError, Result};
use textwal_core::types::{GlyphBitmap, GlyphId};

/// Guard against memory bombs (malicious fonts or giant sizes)
const MAX_GLYPH_EXTENT: u32 = 4096;

/// Rasterize a single glyph at `size` pixels
///
/// The returned bitmap is tight around the ink: `left` is the horizontal
/// bearing from the pen, `top` the distance from the baseline up to the
/// bitmap's top edge. Ink-free glyphs (spaces, tabs) come back empty.
pub(crate) fn rasterize_glyph(font_data: &[u8], glyph_id: GlyphId, size: f32) -> Result<GlyphBitmap> {
    let font_ref = skrifa::FontRef::new(font_data).map_err(|_| RenderError::InvalidFont)?;

    let outlines = font_ref.outline_glyphs();
    let glyph = outlines
        .get(skrifa::GlyphId::new(glyph_id))
        .ok_or(RenderError::GlyphNotFound(glyph_id))?;

    let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
    let mut pen = MaskPen::default();
    glyph
        .draw(settings, &mut pen)
        .map_err(|_| RenderError::OutlineExtractionFailed)?;

    let Some(bounds) = pen.bounds else {
        return Ok(GlyphBitmap::empty());
    };

    // Snap to the pixel grid; control points only ever over-estimate, which
    // costs a blank border at worst
    let min_x = bounds.min_x.floor();
    let min_y = bounds.min_y.floor();
    let max_x = bounds.max_x.ceil();
    let max_y = bounds.max_y.ceil();

    let width = ((max_x - min_x) as u32).max(1);
    let height = ((max_y - min_y) as u32).max(1);
    if width > MAX_GLYPH_EXTENT || height > MAX_GLYPH_EXTENT {
        return Err(RenderError::GlyphTooLarge { width, height }.into());
    }

    let mut mask = vec![0u8; (width * height) as usize];
    Mask::new(pen.commands.as_slice())
        .size(width, height)
        .offset(Vector::new(-min_x, -min_y))
        .render_into(&mut mask, None);

    // Outlines are y-up, bitmaps are y-down
    for row in 0..(height / 2) as usize {
        let top_row = row * width as usize;
        let bottom_row = (height as usize - 1 - row) * width as usize;
        for col in 0..width as usize {
            mask.swap(top_row + col, bottom_row + col);
        }
    }

    Ok(GlyphBitmap {
        width,
        height,
        left: min_x as i32,
        top: max_y as i32,
        data: mask,
    })
}

/// Records zeno path commands while tracking the outline's bounding box
#[derive(Default)]
struct MaskPen {
    commands: Vec<Command>,
    bounds: Option<Bounds>,
}

struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl MaskPen {
    fn update(&mut self, x: f32, y: f32) {
        match &mut self.bounds {
            Some(bounds) => {
                bounds.min_x = bounds.min_x.min(x);
                bounds.min_y = bounds.min_y.min(y);
                bounds.max_x = bounds.max_x.max(x);
                bounds.max_y = bounds.max_y.max(y);
            },
            None => {
                self.bounds = Some(Bounds {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                });
            },
        }
    }
}

impl OutlinePen for MaskPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.update(x, y);
        self.commands.push(Command::MoveTo(Vector::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.update(x, y);
        self.commands.push(Command::LineTo(Vector::new(x, y)));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.update(cx, cy);
        self.update(x, y);
        self.commands
            .push(Command::QuadTo(Vector::new(cx, cy), Vector::new(x, y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.update(cx0, cy0);
        self.update(cx1, cy1);
        self.update(x, y);
        self.commands.push(Command::CurveTo(
            Vector::new(cx0, cy0),
            Vector::new(cx1, cy1),
            Vector::new(x, y),
        ));
    }

    fn close(&mut self) {
        self.commands.push(Command::Close);
    }
}
