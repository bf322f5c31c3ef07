//! Layout and compositing: where text becomes pixels
//!
//! The heart of textwal. Three small machines cooperate here:
//!
//! - [`layout`] measures lines with advance-only font queries and turns the
//!   nine-way text alignment into a pen start position
//! - [`canvas`] owns the background-filled RGB buffer and the clipped
//!   coverage blend
//! - the compositor walks lines and characters, asking the font for one
//!   coverage bitmap at a time and blending it in place
//!
//! [`render`] wires the three together for a single synchronous pass.

pub mod canvas;
mod compositor;
pub mod layout;

pub use canvas::Canvas;
pub use layout::TextLayout;

use textwal_core::error::Result;
use textwal_core::traits::FontFace;
use textwal_core::types::BitmapData;
use textwal_core::RenderOptions;

/// Render `text` onto a freshly allocated background canvas
///
/// This is the whole pipeline short of encoding: layout, canvas allocation,
/// and glyph compositing. The returned bitmap always has exactly the
/// configured dimensions. Fails only on invalid canvas dimensions or
/// allocation failure; per-glyph problems are soft-skipped.
pub fn render(text: &str, font: &dyn FontFace, options: &RenderOptions) -> Result<BitmapData> {
    let layout = TextLayout::compute(text, font, options);
    log::debug!(
        "layout: block {:.0}x{:.0} starting at ({:.1}, {:.1}), line step {:.1}",
        layout.max_line_width,
        layout.total_height,
        layout.start_x,
        layout.start_y,
        layout.line_height,
    );

    let mut canvas = Canvas::new(options.width, options.height, options.bg_color)?;
    compositor::composite(&mut canvas, text, font, &layout, options);

    Ok(canvas.into_bitmap())
}
