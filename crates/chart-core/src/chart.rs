// File: crates/chart-core/src/chart.rs
// Summary: Chart instance: owns the registered boxes, the options layout reads, and the resulting chart area.

use std::cell::RefCell;
use std::rc::Rc;

use crate::axis::{Axis, AxisOptions, ScaleKind};
use crate::config::{ChartConfig, ChartData, ChartOptions};
use crate::geometry::Rect;
use crate::layout::{self, BoxOptions, BoxRef, LayoutBox, Position};
use crate::legend::Legend;
use crate::radial::RadialScale;
use crate::text::TextMeasure;
use crate::title::Title;

#[derive(Default)]
pub struct Chart {
    /// Registered boxes in registration order.
    pub boxes: Vec<BoxRef>,
    pub options: ChartOptions,
    /// Plotting rectangle from the last layout pass.
    pub chart_area: Option<Rect>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ChartOptions) -> Self {
        Self { options, ..Self::default() }
    }

    pub fn add_box(&mut self, item: BoxRef) {
        layout::add_box(self, item);
    }

    pub fn remove_box<B: LayoutBox + ?Sized>(&mut self, item: &Rc<RefCell<B>>) {
        layout::remove_box(self, item);
    }

    pub fn configure<B: LayoutBox + ?Sized>(&mut self, item: &Rc<RefCell<B>>, options: BoxOptions) {
        layout::configure(self, item, options);
    }

    /// Run a full layout pass for a `width` x `height` canvas.
    pub fn update_layout(&mut self, width: f64, height: f64) {
        layout::update(self, width, height);
    }

    /// Build a chart and register the boxes its configuration declares:
    /// title, legend, x axes, y axes, then the radial scale.
    pub fn from_config(config: &ChartConfig, measure: Rc<dyn TextMeasure>) -> Self {
        let mut chart = Chart::with_options(config.options.clone());
        let options = &config.options;

        if let Some(title) = &options.title {
            chart.add_box(Rc::new(RefCell::new(Title::new(title.clone()))));
        }

        let legend = options.legend.clone().unwrap_or_default();
        let items = config.data.legend_labels();
        chart.add_box(Rc::new(RefCell::new(Legend::new(legend, items, measure.clone()))));

        if config.kind.is_cartesian() {
            let scales = options.scales.clone().unwrap_or_default();
            let x_axes = if scales.x_axes.is_empty() { vec![AxisOptions::default()] } else { scales.x_axes };
            let y_axes = if scales.y_axes.is_empty() { vec![AxisOptions::default()] } else { scales.y_axes };

            for opts in x_axes {
                let axis = build_axis(opts, Position::Bottom, ScaleKind::Category, &config.data, &measure);
                chart.add_box(Rc::new(RefCell::new(axis)));
            }
            for opts in y_axes {
                let axis = build_axis(opts, Position::Left, ScaleKind::Linear, &config.data, &measure);
                chart.add_box(Rc::new(RefCell::new(axis)));
            }
        }

        if config.kind.is_radial() {
            let radial = options.scale.clone().unwrap_or_default();
            chart.add_box(Rc::new(RefCell::new(RadialScale::new(radial))));
        }

        chart
    }
}

fn build_axis(
    mut opts: AxisOptions,
    default_position: Position,
    default_kind: ScaleKind,
    data: &ChartData,
    measure: &Rc<dyn TextMeasure>,
) -> Axis {
    opts.position = Some(opts.position.unwrap_or(default_position));
    let kind = opts.kind.unwrap_or(default_kind);
    let (data_min, data_max) = data.value_range();
    let (min, max) = (opts.min.unwrap_or(data_min), opts.max.unwrap_or(data_max));

    let mut axis = Axis::new(opts, kind, measure.clone());
    axis.set_range(min, max);
    if kind == ScaleKind::Category {
        axis.set_categories(data.category_labels());
    }
    axis
}
