//! The layout engine: metric accumulation and alignment arithmetic
//!
//! Everything here works from the measure-only advance query; no glyph is
//! rasterized while computing placement. One vertical convention is used
//! throughout: every line, including the first, accounts for one font
//! line-height, and the compositor steps baselines by that same metric.

use textwal_core::traits::FontFace;
use textwal_core::{CharAlign, RenderOptions, TextAlign};

/// Pixel placement for a block of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    /// Pen x for the first character of every line
    pub start_x: f32,
    /// Baseline y of the first line
    pub start_y: f32,
    /// Baseline-to-baseline step
    pub line_height: f32,
    /// +1.0 advances the pen rightward, -1.0 leftward
    pub advance_sign: f32,
    /// Widest line in pixels
    pub max_line_width: f32,
    /// Line count x line height
    pub total_height: f32,
}

impl TextLayout {
    /// Compute placement for `text` under `options`
    ///
    /// Zero-length text collapses to the bare anchor point; a line with no
    /// visible glyphs still consumes one line-height of vertical space.
    pub fn compute(text: &str, font: &dyn FontFace, options: &RenderOptions) -> Self {
        let scale = options.font_size as f32 / font.units_per_em() as f32;
        let metrics = font.metrics();
        let ascender = metrics.ascender * scale;
        let line_height = metrics.line_height() * scale;

        let line_count = text.lines().count();
        let max_line_width = text
            .lines()
            .map(|line| measure_line(line, font, scale))
            .fold(0.0_f32, f32::max);
        let total_height = line_count as f32 * line_height;

        let width = options.width as f32;
        let height = options.height as f32;

        let block_x = match horizontal(options.text_align) {
            HAnchor::Left => 0.0,
            HAnchor::Center => (width - max_line_width) / 2.0,
            HAnchor::Right => width - max_line_width,
        };

        let start_y = match vertical(options.text_align) {
            VAnchor::Top => ascender,
            VAnchor::Center => (height - total_height) / 2.0 + ascender,
            VAnchor::Bottom => height - total_height + ascender,
        };

        // A left-advancing pen starts near the block's right edge so every
        // line ends flush with it
        let (start_x, advance_sign) = match options.char_align {
            CharAlign::Right => (block_x, 1.0),
            CharAlign::Left => (
                block_x + max_line_width - options.font_size as f32,
                -1.0,
            ),
        };

        TextLayout {
            start_x,
            start_y,
            line_height,
            advance_sign,
            max_line_width,
            total_height,
        }
    }
}

/// Sum of scaled advances for every character the font can resolve
///
/// Characters without a cmap entry contribute nothing, matching the
/// compositor's skip behavior.
pub fn measure_line(line: &str, font: &dyn FontFace, scale: f32) -> f32 {
    line.chars()
        .filter_map(|ch| font.glyph_id(ch))
        .map(|glyph_id| font.advance_width(glyph_id) * scale)
        .sum()
}

enum HAnchor {
    Left,
    Center,
    Right,
}

enum VAnchor {
    Top,
    Center,
    Bottom,
}

fn horizontal(align: TextAlign) -> HAnchor {
    match align {
        TextAlign::Left | TextAlign::TopLeft | TextAlign::BottomLeft => HAnchor::Left,
        TextAlign::Right | TextAlign::TopRight | TextAlign::BottomRight => HAnchor::Right,
        TextAlign::Centre | TextAlign::Top | TextAlign::Bottom => HAnchor::Center,
    }
}

fn vertical(align: TextAlign) -> VAnchor {
    match align {
        TextAlign::Top | TextAlign::TopLeft | TextAlign::TopRight => VAnchor::Top,
        TextAlign::Bottom | TextAlign::BottomLeft | TextAlign::BottomRight => VAnchor::Bottom,
        TextAlign::Centre | TextAlign::Left | TextAlign::Right => VAnchor::Center,
    }
}
