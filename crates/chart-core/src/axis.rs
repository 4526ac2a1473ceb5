// File: crates/chart-core/src/axis.rs
// Summary: Cartesian axis box. Builds tick labels, picks a label rotation that fits, and reports its footprint.

use std::rc::Rc;

use serde::Deserialize;

use crate::geometry::{clamp, BoxGeometry};
use crate::grid::{format_tick, linear_ticks, log_ticks};
use crate::layout::{BoxOptions, LayoutBox, Position};
use crate::text::{Font, TextMeasure};
use crate::types::{Insets, Size};

/// Extra room kept around a label so neighbours stay readable.
const LABEL_GAP: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleKind {
    Category,
    Linear,
    #[serde(rename = "logarithmic")]
    Log10,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickOptions {
    pub display: bool,
    pub font_size: f64,
    pub min_rotation: f64,
    pub max_rotation: f64,
    pub padding: f64,
    pub max_ticks_limit: usize,
    /// Draw labels inside the chart area; they then take no width.
    pub mirror: bool,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            display: true,
            font_size: 12.0,
            min_rotation: 0.0,
            max_rotation: 50.0,
            padding: 0.0,
            max_ticks_limit: 11,
            mirror: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleLabelOptions {
    pub display: bool,
    pub label_string: String,
    pub font_size: f64,
    pub line_height: f64,
    pub padding: f64,
}

impl Default for ScaleLabelOptions {
    fn default() -> Self {
        Self {
            display: false,
            label_string: String::new(),
            font_size: 12.0,
            line_height: 1.2,
            padding: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridLineOptions {
    pub draw_ticks: bool,
    pub tick_mark_length: f64,
}

impl Default for GridLineOptions {
    fn default() -> Self {
        Self { draw_ticks: true, tick_mark_length: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    #[serde(rename = "type")]
    pub kind: Option<ScaleKind>,
    pub position: Option<Position>,
    pub display: bool,
    pub full_width: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub ticks: TickOptions,
    pub scale_label: ScaleLabelOptions,
    pub grid_lines: GridLineOptions,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            kind: None,
            position: None,
            display: true,
            full_width: false,
            min: None,
            max: None,
            ticks: TickOptions::default(),
            scale_label: ScaleLabelOptions::default(),
            grid_lines: GridLineOptions::default(),
        }
    }
}

pub struct Axis {
    box_options: BoxOptions,
    options: AxisOptions,
    kind: ScaleKind,
    min: f64,
    max: f64,
    categories: Vec<String>,
    measure: Rc<dyn TextMeasure>,

    labels: Vec<String>,
    label_rotation: f64,
    longest_label_width: f64,
    padding: Insets,
    margins: Insets,
    max_width: f64,
    max_height: f64,
    geometry: BoxGeometry,
}

impl Axis {
    /// `position` falls back to `options.position`, then to bottom.
    pub fn new(options: AxisOptions, kind: ScaleKind, measure: Rc<dyn TextMeasure>) -> Self {
        let position = options.position.unwrap_or(Position::Bottom);
        let box_options = BoxOptions::new(position, options.full_width);
        let min = options.min.unwrap_or(0.0);
        let max = options.max.unwrap_or(1.0);
        Self {
            box_options,
            options,
            kind,
            min,
            max,
            categories: Vec::new(),
            measure,
            labels: Vec::new(),
            label_rotation: 0.0,
            longest_label_width: 0.0,
            padding: Insets::default(),
            margins: Insets::default(),
            max_width: 0.0,
            max_height: 0.0,
            geometry: BoxGeometry::default(),
        }
    }

    pub fn linear(position: Position, min: f64, max: f64, measure: Rc<dyn TextMeasure>) -> Self {
        let options = AxisOptions { position: Some(position), ..AxisOptions::default() };
        let mut a = Self::new(options, ScaleKind::Linear, measure);
        a.set_range(min, max);
        a
    }

    pub fn category(position: Position, labels: Vec<String>, measure: Rc<dyn TextMeasure>) -> Self {
        let options = AxisOptions { position: Some(position), ..AxisOptions::default() };
        let mut a = Self::new(options, ScaleKind::Category, measure);
        a.categories = labels;
        a
    }

    pub fn kind(&self) -> ScaleKind { self.kind }
    pub fn range(&self) -> (f64, f64) { (self.min, self.max) }
    pub fn axis_options(&self) -> &AxisOptions { &self.options }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    pub fn set_categories(&mut self, labels: Vec<String>) {
        self.categories = labels;
    }

    /// Tick labels from the last update.
    pub fn labels(&self) -> &[String] { &self.labels }
    /// Label rotation in degrees from the last update.
    pub fn label_rotation(&self) -> f64 { self.label_rotation }
    pub fn longest_label_width(&self) -> f64 { self.longest_label_width }
    /// Space kept inside the axis for the outermost labels, after margins were applied.
    pub fn padding(&self) -> Insets { self.padding }
    pub fn margins(&self) -> Insets { self.margins }

    fn is_full_width(&self) -> bool {
        self.box_options.full_width
    }

    fn build_labels(&mut self) {
        self.labels = match self.kind {
            ScaleKind::Category => self.categories.clone(),
            ScaleKind::Linear => linear_ticks(self.min, self.max, self.options.ticks.max_ticks_limit)
                .into_iter()
                .map(format_tick)
                .collect(),
            ScaleKind::Log10 => log_ticks(self.min, self.max).into_iter().map(format_tick).collect(),
        };
    }

    /// Pixel position of tick `index` along the axis.
    pub fn pixel_for_tick(&self, index: usize) -> f64 {
        let steps = self.labels.len().saturating_sub(1).max(1) as f64;
        let g = &self.geometry;
        if self.is_horizontal() {
            let inner = g.width - self.padding.hsum();
            let pixel = inner / steps * index as f64 + self.padding.left;
            let mut v = g.left + pixel.round();
            if self.is_full_width() {
                v += self.margins.left;
            }
            v
        } else {
            let inner = g.height - self.padding.vsum();
            g.top + (inner / steps * index as f64 + self.padding.top).round()
        }
    }

    fn calculate_tick_rotation(&mut self) {
        let ticks = &self.options.ticks;
        let mut rotation = ticks.min_rotation;
        if self.options.display && self.is_horizontal() && !self.labels.is_empty() {
            let original = self.measure.longest_width(&self.labels, ticks.font_size);
            let mut label_width = original;
            let tick_width = self.pixel_for_tick(1) - self.pixel_for_tick(0) - 2.0 * LABEL_GAP;
            while label_width > tick_width && rotation < ticks.max_rotation {
                let angle = rotation.to_radians();
                if angle.sin() * original > self.max_height {
                    rotation -= 1.0;
                    break;
                }
                rotation += 1.0;
                label_width = angle.cos() * original;
            }
        }
        self.label_rotation = clamp(rotation, 0.0, 90.0);
    }

    fn fit(&mut self) -> Size {
        let opts = &self.options;
        let display = opts.display;
        let horizontal = self.is_horizontal();
        let tick_mark = if display && opts.grid_lines.draw_ticks {
            opts.grid_lines.tick_mark_length
        } else {
            0.0
        };

        let mut size = if horizontal {
            let width = if self.is_full_width() {
                self.max_width - self.margins.left - self.margins.right
            } else {
                self.max_width
            };
            Size::new(width, tick_mark)
        } else {
            Size::new(tick_mark, self.max_height)
        };

        if opts.scale_label.display && display {
            let label = &opts.scale_label;
            let delta = Font::new(label.font_size, label.line_height).line_px() + label.padding * 2.0;
            if horizontal {
                size.height += delta;
            } else {
                size.width += delta;
            }
        }

        if opts.ticks.display && display {
            let font_size = opts.ticks.font_size;
            let largest = self.measure.longest_width(&self.labels, font_size);
            let line_space = font_size * 0.5;
            let tick_padding = opts.ticks.padding;

            if horizontal {
                self.longest_label_width = largest;
                let angle = self.label_rotation.to_radians();
                let (sin, cos) = angle.sin_cos();
                let label_height = sin * largest + font_size + line_space;
                size.height = (size.height + label_height + tick_padding).min(self.max_height);

                let first = self.labels.first().map_or(0.0, |l| self.measure.text_width(l, font_size));
                let last = self.labels.last().map_or(0.0, |l| self.measure.text_width(l, font_size));
                // Rotated labels hang off one side only.
                if self.label_rotation != 0.0 {
                    let bottom = self.box_options.position == Position::Bottom;
                    self.padding.left = if bottom { cos * first } else { cos * line_space } + LABEL_GAP;
                    self.padding.right = if bottom { cos * line_space } else { cos * last } + LABEL_GAP;
                } else {
                    self.padding.left = first / 2.0 + LABEL_GAP;
                    self.padding.right = last / 2.0 + LABEL_GAP;
                }
            } else {
                let largest = if opts.ticks.mirror { 0.0 } else { largest + tick_padding };
                size.width = (size.width + largest).min(self.max_width);
                self.padding.top = font_size / 2.0;
                self.padding.bottom = font_size / 2.0;
            }
        }

        self.handle_margins();
        self.geometry.width = size.width;
        self.geometry.height = size.height;
        size
    }

    /// Space already reserved by neighbouring boxes counts towards label padding.
    fn handle_margins(&mut self) {
        let m = self.margins;
        self.padding.left = (self.padding.left - m.left).max(0.0);
        self.padding.top = (self.padding.top - m.top).max(0.0);
        self.padding.right = (self.padding.right - m.right).max(0.0);
        self.padding.bottom = (self.padding.bottom - m.bottom).max(0.0);
    }
}

impl LayoutBox for Axis {
    fn options(&self) -> &BoxOptions { &self.box_options }
    fn options_mut(&mut self) -> &mut BoxOptions { &mut self.box_options }

    fn update(&mut self, max_width: f64, max_height: f64, margins: Option<Insets>) -> Size {
        self.max_width = max_width;
        self.max_height = max_height;
        self.margins = margins.unwrap_or_default();

        if self.is_horizontal() {
            self.geometry.width = max_width;
            self.geometry.left = 0.0;
            self.geometry.right = max_width;
        } else {
            self.geometry.height = max_height;
            self.geometry.top = 0.0;
            self.geometry.bottom = max_height;
        }
        self.padding = Insets::default();

        self.build_labels();
        self.calculate_tick_rotation();
        self.fit()
    }

    fn geometry(&self) -> &BoxGeometry { &self.geometry }
    fn geometry_mut(&mut self) -> &mut BoxGeometry { &mut self.geometry }
}
