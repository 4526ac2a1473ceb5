// File: crates/chart-core/src/title.rs
// Summary: Chart title box; reserves one strip of text lines plus padding on its edge.

use serde::Deserialize;

use crate::geometry::BoxGeometry;
use crate::layout::{BoxOptions, LayoutBox, Position};
use crate::text::Font;
use crate::types::{Insets, Size};

/// Title text: a single line or several.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TitleText {
    Line(String),
    Lines(Vec<String>),
}

impl TitleText {
    pub fn line_count(&self) -> usize {
        match self {
            TitleText::Line(_) => 1,
            TitleText::Lines(lines) => lines.len(),
        }
    }
}

impl Default for TitleText {
    fn default() -> Self {
        TitleText::Line(String::new())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleOptions {
    pub display: bool,
    pub position: Position,
    pub full_width: bool,
    pub font_size: f64,
    pub line_height: f64,
    pub padding: f64,
    pub text: TitleText,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            display: true,
            position: Position::Top,
            full_width: true,
            font_size: 12.0,
            line_height: 1.2,
            padding: 10.0,
            text: TitleText::default(),
        }
    }
}

pub struct Title {
    box_options: BoxOptions,
    options: TitleOptions,
    geometry: BoxGeometry,
}

impl Title {
    pub fn new(options: TitleOptions) -> Self {
        let box_options = BoxOptions::new(options.position, options.full_width);
        Self { box_options, options, geometry: BoxGeometry::default() }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(TitleOptions { text: TitleText::Line(text.into()), ..TitleOptions::default() })
    }

    pub fn title_options(&self) -> &TitleOptions {
        &self.options
    }

    /// Thickness of the title strip: all lines plus padding above and below.
    fn text_size(&self) -> f64 {
        if !self.options.display {
            return 0.0;
        }
        let font = Font::new(self.options.font_size, self.options.line_height);
        self.options.text.line_count() as f64 * font.line_px() + self.options.padding * 2.0
    }
}

impl LayoutBox for Title {
    fn options(&self) -> &BoxOptions { &self.box_options }
    fn options_mut(&mut self) -> &mut BoxOptions { &mut self.box_options }

    fn update(&mut self, max_width: f64, max_height: f64, _margins: Option<Insets>) -> Size {
        let text_size = self.text_size();
        let size = if self.is_horizontal() {
            Size::new(max_width, text_size)
        } else {
            Size::new(text_size, max_height)
        };
        self.geometry.width = size.width;
        self.geometry.height = size.height;
        size
    }

    fn geometry(&self) -> &BoxGeometry { &self.geometry }
    fn geometry_mut(&mut self) -> &mut BoxGeometry { &mut self.geometry }
}
