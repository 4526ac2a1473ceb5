// File: crates/chart-core/src/legend.rs
// Summary: Legend box; wraps dataset labels into rows (top/bottom) or columns (left/right).

use std::rc::Rc;

use serde::Deserialize;

use crate::geometry::BoxGeometry;
use crate::layout::{BoxOptions, LayoutBox, Position};
use crate::text::TextMeasure;
use crate::types::{Insets, Size};

/// Base thickness of a displayed legend before any items.
const LEGEND_BASE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendLabelOptions {
    /// Width of the colour swatch in front of each label.
    pub box_width: f64,
    pub font_size: f64,
    pub padding: f64,
}

impl Default for LegendLabelOptions {
    fn default() -> Self {
        Self { box_width: 40.0, font_size: 12.0, padding: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendOptions {
    pub display: bool,
    pub position: Position,
    pub full_width: bool,
    pub labels: LegendLabelOptions,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: true,
            position: Position::Top,
            full_width: true,
            labels: LegendLabelOptions::default(),
        }
    }
}

pub struct Legend {
    box_options: BoxOptions,
    options: LegendOptions,
    items: Vec<String>,
    measure: Rc<dyn TextMeasure>,
    line_widths: Vec<f64>,
    column_widths: Vec<f64>,
    geometry: BoxGeometry,
}

impl Legend {
    pub fn new(options: LegendOptions, items: Vec<String>, measure: Rc<dyn TextMeasure>) -> Self {
        let box_options = BoxOptions::new(options.position, options.full_width);
        Self {
            box_options,
            options,
            items,
            measure,
            line_widths: Vec::new(),
            column_widths: Vec::new(),
            geometry: BoxGeometry::default(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    /// Row widths from the last horizontal fit. Each row is measured from its own
    /// start, not from the legend's placed `left`, so a relayout reproduces them.
    pub fn line_widths(&self) -> &[f64] {
        &self.line_widths
    }

    /// Column widths from the last vertical fit.
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    fn item_width(&self, label: &str) -> f64 {
        let l = &self.options.labels;
        l.box_width + l.font_size / 2.0 + self.measure.text_width(label, l.font_size)
    }

    /// Height of the wrapped rows for a legend `max_width` wide.
    fn fit_rows(&mut self, max_width: f64) -> f64 {
        let l = self.options.labels.clone();
        let row_height = l.font_size + l.padding;
        let widths: Vec<f64> = self.items.iter().map(|t| self.item_width(t)).collect();

        let mut lines = vec![0.0];
        let mut total = if widths.is_empty() { 0.0 } else { row_height };
        for w in widths {
            let last = lines.len() - 1;
            // An item that overflows starts a new row, even if the current row is still empty.
            if lines[last] + w + l.padding >= max_width {
                total += row_height;
                // Rows start at 0 rather than at `geometry.left`; wrapping must not depend on the last placement.
                lines.push(0.0);
            }
            let last = lines.len() - 1;
            lines[last] += w + l.padding;
        }
        self.line_widths = lines;
        total
    }

    /// Width of the stacked columns for a legend `max_height` tall.
    fn fit_columns(&mut self, max_height: f64) -> f64 {
        let l = self.options.labels.clone();
        let item_height = l.font_size + l.padding;
        let widths: Vec<f64> = self.items.iter().map(|t| self.item_width(t)).collect();

        let mut columns = Vec::new();
        let mut total = l.padding;
        let mut col_width = 0.0_f64;
        let mut col_height = 0.0;
        for w in widths {
            if col_height + item_height > max_height {
                total += col_width + l.padding;
                columns.push(col_width);
                col_width = 0.0;
                col_height = 0.0;
            }
            col_width = col_width.max(w);
            col_height += item_height;
        }
        total += col_width;
        columns.push(col_width);
        self.column_widths = columns;
        total
    }
}

impl LayoutBox for Legend {
    fn options(&self) -> &BoxOptions { &self.box_options }
    fn options_mut(&mut self) -> &mut BoxOptions { &mut self.box_options }

    fn update(&mut self, max_width: f64, max_height: f64, _margins: Option<Insets>) -> Size {
        let display = self.options.display;
        let horizontal = self.is_horizontal();
        let base = if display { LEGEND_BASE } else { 0.0 };
        let mut size = if horizontal {
            Size::new(max_width, base)
        } else {
            Size::new(base, max_height)
        };

        self.line_widths.clear();
        self.column_widths.clear();
        if display {
            if horizontal {
                size.height += self.fit_rows(max_width);
            } else {
                size.width += self.fit_columns(max_height);
            }
        }

        self.geometry.width = size.width;
        self.geometry.height = size.height;
        size
    }

    fn geometry(&self) -> &BoxGeometry { &self.geometry }
    fn geometry_mut(&mut self) -> &mut BoxGeometry { &mut self.geometry }
}
