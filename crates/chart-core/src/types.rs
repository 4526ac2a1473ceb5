// File: crates/chart-core/src/types.rs
// Summary: Shared value types for layout (insets used as padding and margins, sizes).

use serde::Serialize;

/// Default canvas width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 640.0;

/// Per-side distances in pixels. Used both for chart padding and for the
/// margins the layout engine hands to boxes once neighbouring sides are known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same distance on all four sides.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

/// A width/height pair. Boxes return one from `update` as their minimum footprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
