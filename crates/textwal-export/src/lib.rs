//! PNG export format
//!
//! Serializes a rendered canvas to PNG using the `image` crate. The canvas
//! is already RGB8, so the data goes straight into the encoder.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use textwal_core::error::{ExportError, Result};
use textwal_core::traits::Exporter;
use textwal_core::types::BitmapData;

/// PNG exporter for rendered canvases
pub struct PngExporter;

impl PngExporter {
    /// Create a new PNG exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        // Validate buffer size before handing it to the encoder
        let expected = bitmap.width as usize * bitmap.height as usize * 3;
        if bitmap.data.len() != expected {
            return Err(ExportError::EncodingFailed(format!(
                "Buffer size mismatch: expected {} bytes for {}x{} RGB, got {}",
                expected,
                bitmap.width,
                bitmap.height,
                bitmap.data.len()
            ))
            .into());
        }

        let mut png_data = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut png_data,
            CompressionType::Default,
            FilterType::Sub,
        );

        encoder
            .write_image(&bitmap.data, bitmap.width, bitmap.height, ExtendedColorType::Rgb8)
            .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

        Ok(png_data)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}
