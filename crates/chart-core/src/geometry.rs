// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry for layout results (chart area rectangle, committed box bounds).

use serde::Serialize;

/// Axis-aligned rectangle in canvas pixels. The chart area is one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Geometry the layout engine commits onto a box.
///
/// `width`/`height` are written by the box itself during `update` and may be
/// overwritten by the engine's growth correction; they are not derived from
/// the edges. A full-width title, for instance, spans `left..right` across the
/// padded canvas while keeping whatever `width` it measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BoxGeometry {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxGeometry {
    /// The placed edges as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }

    /// Copy the four edges of `r`; width and height are left untouched.
    pub fn set_bounds(&mut self, r: Rect) {
        self.left = r.left;
        self.top = r.top;
        self.right = r.right;
        self.bottom = r.bottom;
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
