// File: crates/chart-core/src/radial.rs
// Summary: Radial scale overlay for radar/polar charts; occupies the chart area itself.

use serde::Deserialize;

use crate::geometry::BoxGeometry;
use crate::layout::{BoxOptions, LayoutBox, Position};
use crate::types::{Insets, Size};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadialOptions {
    pub display: bool,
    pub font_size: f64,
    /// Vertical padding of the tick label backdrop.
    pub backdrop_padding_y: f64,
}

impl Default for RadialOptions {
    fn default() -> Self {
        Self { display: true, font_size: 12.0, backdrop_padding_y: 2.0 }
    }
}

pub struct RadialScale {
    box_options: BoxOptions,
    options: RadialOptions,
    x_center: f64,
    y_center: f64,
    drawing_area: f64,
    geometry: BoxGeometry,
}

impl RadialScale {
    pub fn new(options: RadialOptions) -> Self {
        Self {
            box_options: BoxOptions::new(Position::ChartArea, false),
            options,
            x_center: 0.0,
            y_center: 0.0,
            drawing_area: 0.0,
            geometry: BoxGeometry::default(),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x_center, self.y_center)
    }

    /// Radius available to the outermost ring.
    pub fn drawing_area(&self) -> f64 {
        self.drawing_area
    }
}

impl LayoutBox for RadialScale {
    fn options(&self) -> &BoxOptions { &self.box_options }
    fn options_mut(&mut self) -> &mut BoxOptions { &mut self.box_options }

    fn is_horizontal(&self) -> bool {
        false
    }

    /// Called once the engine has copied the chart area onto this box.
    fn update(&mut self, max_width: f64, max_height: f64, _margins: Option<Insets>) -> Size {
        self.geometry.width = max_width;
        self.geometry.height = max_height;
        self.x_center = self.geometry.left + (max_width / 2.0).round();
        self.y_center = self.geometry.top + (max_height / 2.0).round();

        let half = max_width.min(max_height) / 2.0;
        self.drawing_area = if self.options.display {
            half - (self.options.font_size / 2.0 + self.options.backdrop_padding_y)
        } else {
            half
        };
        Size::new(max_width, max_height)
    }

    fn geometry(&self) -> &BoxGeometry { &self.geometry }
    fn geometry_mut(&mut self) -> &mut BoxGeometry { &mut self.geometry }
}
