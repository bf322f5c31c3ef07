//! Font loading and measurement for textwal
//!
//! Brings a font file into memory and answers the two questions the
//! renderer asks: "how wide is this character?" (cmap + hmtx, no
//! rasterization) and "what does it look like?" ([`raster`], skrifa
//! outlines scan-converted by zeno).
//!
//! The font owns its byte buffer; parser views are created on demand and
//! dropped with scope, so every exit path releases everything.

mod raster;

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use textwal_core::error::{FontLoadError, Result};
use textwal_core::traits::FontFace;
use textwal_core::types::{FontMetrics, GlyphBitmap, GlyphId};

/// A font that's been brought into memory, ready to render text
#[derive(Debug)]
pub struct Font {
    data: Vec<u8>,
    units_per_em: u16,
}

impl Font {
    /// Opens a font file from disk and makes it usable
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FontLoadError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::from_data(data)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        // Validate the font data by attempting to parse it
        let font_ref = ReadFontRef::new(&data).map_err(|_| FontLoadError::InvalidData)?;

        // units per em tells us how big the font's design grid is
        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            data,
            units_per_em,
        })
    }

    /// Creates a parser view on demand
    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::new(&self.data).ok()
    }
}

impl FontFace for Font {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let hmtx = font.hmtx().ok()?;

                use read_fonts::types::GlyphId as RawGlyphId;
                let advance = hmtx.advance(RawGlyphId::new(glyph_id))?;

                Some(advance as f32)
            })
            // Reasonable default when metrics are missing
            .unwrap_or(self.units_per_em as f32 / 2.0)
    }

    fn metrics(&self) -> FontMetrics {
        let Some(font) = self.font_ref() else {
            return estimated_metrics(self.units_per_em);
        };

        // Prefer the typographic metrics; hhea is the legacy fallback
        if let Ok(os2) = font.os2() {
            return FontMetrics {
                ascender: os2.s_typo_ascender() as f32,
                descender: os2.s_typo_descender() as f32,
                line_gap: os2.s_typo_line_gap() as f32,
            };
        }

        if let Ok(hhea) = font.hhea() {
            return FontMetrics {
                ascender: hhea.ascender().to_i16() as f32,
                descender: hhea.descender().to_i16() as f32,
                line_gap: hhea.line_gap().to_i16() as f32,
            };
        }

        estimated_metrics(self.units_per_em)
    }

    fn rasterize(&self, glyph_id: GlyphId, size: f32) -> Result<GlyphBitmap> {
        raster::rasterize_glyph(&self.data, glyph_id, size)
    }
}

/// Rough 80/20 split for fonts that carry no vertical metrics at all
fn estimated_metrics(units_per_em: u16) -> FontMetrics {
    let upem = units_per_em as f32;
    FontMetrics {
        ascender: upem * 0.8,
        descender: -(upem * 0.2),
        line_gap: 0.0,
    }
}
