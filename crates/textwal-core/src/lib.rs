//! textwal core: the types every stage of the pipeline shares
//!
//! Text enters on stdin, exits as a PNG wallpaper. Every render follows the
//! same four stages:
//!
//! 1. **Layout** - font metrics turn lines of text into a placed block
//! 2. **Rasterization** - each character becomes a coverage bitmap
//! 3. **Compositing** - coverage is blended onto a background canvas
//! 4. **Export** - the canvas is encoded and written to disk
//!
//! This crate holds the data that flows between those stages ([`types`]),
//! the configuration that steers them ([`RenderOptions`]), the error
//! taxonomy ([`error`]), and the traits that decouple the core from its
//! collaborators ([`traits`]).

use std::path::PathBuf;

pub mod error;
pub mod traits;

pub use error::{Result, TextwalError};
pub use traits::{Exporter, FontFace};

/// Font used when `--font` is not given
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf";

/// The data structures that flow between pipeline stages
pub mod types {
    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;

    /// A rasterized glyph: coverage pixels plus placement metrics
    ///
    /// `data` holds one 8-bit coverage value per pixel, row-major,
    /// top-to-bottom. `left` and `top` position the grid relative to the
    /// pen: its top-left corner lands at `(pen_x + left, baseline - top)`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GlyphBitmap {
        pub width: u32,
        pub height: u32,
        /// Horizontal bearing: offset from the pen to the left edge
        pub left: i32,
        /// Vertical bearing: distance from the baseline up to the top edge
        pub top: i32,
        pub data: Vec<u8>,
    }

    impl GlyphBitmap {
        /// Whitespace and other ink-free glyphs rasterize to this
        pub fn empty() -> Self {
            Self {
                width: 0,
                height: 0,
                left: 0,
                top: 0,
                data: Vec::new(),
            }
        }

        /// True when there is nothing to draw
        pub fn is_empty(&self) -> bool {
            self.width == 0 || self.height == 0
        }
    }

    /// Raw RGB8 pixel data, row-major, top-to-bottom
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub data: Vec<u8>,
    }

    /// Vertical font metrics in font units
    ///
    /// Scale by `size / units_per_em` to reach pixels.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct FontMetrics {
        /// Baseline to the top of the tallest glyphs (positive)
        pub ascender: f32,
        /// Baseline to the bottom of the deepest glyphs (negative)
        pub descender: f32,
        /// Extra space between lines on top of ascender + descender
        pub line_gap: f32,
    }

    impl FontMetrics {
        /// Baseline-to-baseline distance
        pub fn line_height(&self) -> f32 {
            self.ascender - self.descender + self.line_gap
        }
    }
}

/// Simple RGB color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Parse a `#RRGGBB` hex triplet; the leading `#` may be omitted
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid_color(s));
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid_color(s))?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid_color(s))?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid_color(s))?;

        Ok(Self::rgb(r, g, b))
    }
}

fn invalid_color(s: &str) -> TextwalError {
    TextwalError::Config(format!("Color must be in #RRGGBB format, got {s:?}"))
}

/// Where the rendered text block is anchored on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Centre,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Which way glyphs advance within a line
///
/// `Right` is the forward direction: the pen moves rightward after each
/// character. `Left` subtracts each advance instead, which keeps line right
/// edges flush for right-anchored layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharAlign {
    Left,
    #[default]
    Right,
}

/// Everything one render run needs to know
///
/// Constructed once from defaults plus command-line overrides, immutable
/// thereafter, passed by reference into layout and compositing.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub font: PathBuf,
    pub output: PathBuf,
    /// Font pixel size; must be >= 1
    pub font_size: u32,
    /// Canvas width in pixels; must be >= 1
    pub width: u32,
    /// Canvas height in pixels; must be >= 1
    pub height: u32,
    pub bg_color: Color,
    pub text_color: Color,
    pub text_align: TextAlign,
    pub char_align: CharAlign,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font: PathBuf::from(DEFAULT_FONT_PATH),
            output: PathBuf::from("output.png"),
            font_size: 48,
            width: 1920,
            height: 1080,
            bg_color: Color::white(),
            text_color: Color::black(),
            text_align: TextAlign::default(),
            char_align: CharAlign::default(),
        }
    }
}
