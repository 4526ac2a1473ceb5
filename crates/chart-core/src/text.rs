// File: crates/chart-core/src/text.rs
// Summary: Text metrics seam used by boxes to size labels, plus a deterministic heuristic measurer.

use serde::Deserialize;

/// Measures rendered text width. Boxes only need widths; heights come from [`Font`].
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64;

    /// Width of the widest string in `texts`, 0 when empty.
    fn longest_width(&self, texts: &[String], font_size: f64) -> f64 {
        texts.iter().map(|t| self.text_width(t, font_size)).fold(0.0, f64::max)
    }
}

/// Average-glyph-width approximation. Deterministic across platforms.
#[derive(Clone, Copy, Debug)]
pub struct ApproxTextMeasure {
    /// Glyph advance as a fraction of the font size.
    pub glyph_em: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { glyph_em: 0.6 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        self.glyph_em * font_size * text.chars().count() as f64
    }
}

/// Font size in pixels and line height as a multiple of it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Font {
    pub size: f64,
    pub line_height: f64,
}

impl Font {
    pub const fn new(size: f64, line_height: f64) -> Self {
        Self { size, line_height }
    }
    /// Line height in pixels.
    pub fn line_px(&self) -> f64 {
        self.size * self.line_height
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(12.0, 1.2)
    }
}
