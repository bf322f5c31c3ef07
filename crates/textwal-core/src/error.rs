//! Error types for textwal

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextwalError>;

/// Main error type for textwal
#[derive(Debug, Error)]
pub enum TextwalError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Empty input: nothing to render")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,
}

/// Rendering errors
///
/// The glyph-level variants (`GlyphNotFound`, `InvalidFont`,
/// `OutlineExtractionFailed`, `GlyphTooLarge`) are soft failures at the
/// compositing level: the affected character is skipped and rendering
/// continues. The canvas-level variants are fatal.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Out of memory")]
    OutOfMemory,

    #[error("Glyph {0} not found in font")]
    GlyphNotFound(u32),

    #[error("Font data failed to parse")]
    InvalidFont,

    #[error("Outline extraction failed")]
    OutlineExtractionFailed,

    #[error("Glyph bitmap too large: {width}x{height}")]
    GlyphTooLarge { width: u32, height: u32 },
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
