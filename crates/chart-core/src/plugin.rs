// File: crates/chart-core/src/plugin.rs
// Summary: Plugin-contributed decoration boxes: fixed-thickness strips and chart-area overlays.

use crate::geometry::BoxGeometry;
use crate::layout::{BoxOptions, LayoutBox, Position};
use crate::types::{Insets, Size};

/// A box a plugin registers to reserve space (a watermark strip, a toolbar, a
/// spacer) or to track the chart area. It asks for a fixed thickness on its
/// edge and takes whatever length the layout offers along it.
pub struct Decoration {
    id: String,
    options: BoxOptions,
    thickness: Size,
    geometry: BoxGeometry,
}

impl Decoration {
    pub fn new(id: impl Into<String>, options: BoxOptions, thickness: Size) -> Self {
        Self { id: id.into(), options, thickness, geometry: BoxGeometry::default() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Requested thickness; only `height` matters for horizontal boxes and only `width` for vertical ones.
    pub fn thickness(&self) -> Size {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: Size) {
        self.thickness = thickness;
    }
}

impl LayoutBox for Decoration {
    fn options(&self) -> &BoxOptions { &self.options }
    fn options_mut(&mut self) -> &mut BoxOptions { &mut self.options }

    fn update(&mut self, max_width: f64, max_height: f64, _margins: Option<Insets>) -> Size {
        let size = match self.options.position {
            Position::Top | Position::Bottom => Size::new(max_width, self.thickness.height),
            Position::Left | Position::Right => Size::new(self.thickness.width, max_height),
            Position::ChartArea | Position::Unknown => Size::new(max_width, max_height),
        };
        self.geometry.width = size.width;
        self.geometry.height = size.height;
        size
    }

    fn geometry(&self) -> &BoxGeometry { &self.geometry }
    fn geometry_mut(&mut self) -> &mut BoxGeometry { &mut self.geometry }
}
