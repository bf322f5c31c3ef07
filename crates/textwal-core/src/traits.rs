//! The seams between the pipeline and its collaborators
//!
//! Two traits keep the layout engine and compositor independent of the
//! concrete font parser and image codec:
//!
//! - [`FontFace`] - your window into font data, metrics, and glyph bitmaps
//! - [`Exporter`] - where pixels become files

use crate::error::Result;
use crate::types::{BitmapData, FontMetrics, GlyphBitmap, GlyphId};

/// A loaded font face the layout engine and compositor can query
///
/// Measurement is deliberately separate from rasterization: line widths are
/// computed in an advance-only pre-pass via [`FontFace::advance_width`], so
/// no glyph is scan-converted twice.
///
/// All linear measurements are in font units; callers scale by
/// `size / units_per_em` to reach pixels.
pub trait FontFace: Send + Sync {
    /// The font's internal coordinate system scale
    ///
    /// Type 1 fonts use 1000, TrueType often uses 2048.
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// How wide this glyph stands in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Vertical metrics shared by every line of this face
    fn metrics(&self) -> FontMetrics;

    /// Rasterize one glyph at `size` pixels into a coverage bitmap
    ///
    /// Ink-free glyphs (spaces) come back as an empty bitmap, not an error.
    fn rasterize(&self, glyph_id: GlyphId, size: f32) -> Result<GlyphBitmap>;
}

/// The final step: pixels become files
pub trait Exporter {
    /// Who are you? Used for debugging and logging
    fn name(&self) -> &'static str;

    /// Encode the rendered canvas as bytes
    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
