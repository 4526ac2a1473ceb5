// File: crates/chart-core/src/layout.rs
// Summary: Box layout engine. Sizes and places axes, legends, titles and overlays around the chart area.
//
// The pass is a fixed sequence: measure every box at an average allowance,
// refit with the margins committed by the other axis, reconcile any growth,
// then place boxes with running cursors and hand the chart area to overlays.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};
use serde::Deserialize;

use crate::chart::Chart;
use crate::geometry::{BoxGeometry, Rect};
use crate::types::{Insets, Size};

/// Edge of the canvas a box asks for, or the chart area itself for overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    ChartArea,
    /// Anything else. Such boxes are skipped by the layout pass.
    #[serde(other)]
    Unknown,
}

impl Position {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Position::Top | Position::Bottom)
    }
}

/// Layout-relevant options every box carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxOptions {
    #[serde(default)]
    pub position: Position,
    /// Horizontal boxes only: span the padded canvas width instead of the chart area width.
    #[serde(default)]
    pub full_width: bool,
}

impl BoxOptions {
    pub const fn new(position: Position, full_width: bool) -> Self {
        Self { position, full_width }
    }
}

/// A rectangular region that takes part in chart layout.
///
/// Two channels come out of a box: the [`Size`] returned by [`LayoutBox::update`]
/// is the minimum footprint for the given allowance, while [`LayoutBox::geometry`]
/// holds the committed placement. `update` is expected to set
/// `geometry().width`/`height` to what it measured; the engine writes the edges
/// afterwards and may overwrite the cross-axis size during growth correction.
pub trait LayoutBox {
    fn options(&self) -> &BoxOptions;
    fn options_mut(&mut self) -> &mut BoxOptions;

    fn is_horizontal(&self) -> bool {
        self.options().position.is_horizontal()
    }

    /// Recompute content for the allowance and return the minimum size.
    /// `margins` carries space already committed on the other axis, when known.
    fn update(&mut self, max_width: f64, max_height: f64, margins: Option<Insets>) -> Size;

    fn geometry(&self) -> &BoxGeometry;
    fn geometry_mut(&mut self) -> &mut BoxGeometry;
}

/// Shared handle to a registered box. Callers keep their own clone to read back
/// geometry after layout.
pub type BoxRef = Rc<RefCell<dyn LayoutBox>>;

fn same_box<A: ?Sized, B: ?Sized>(a: &Rc<RefCell<A>>, b: &Rc<RefCell<B>>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Register a box. Registering the same box twice lays it out twice.
pub fn add_box(chart: &mut Chart, item: BoxRef) {
    chart.boxes.push(item);
}

/// Remove the first registration of `item`. Does nothing if it is not registered.
pub fn remove_box<B: LayoutBox + ?Sized>(chart: &mut Chart, item: &Rc<RefCell<B>>) {
    if let Some(index) = chart.boxes.iter().position(|b| same_box(b, item)) {
        chart.boxes.remove(index);
    }
}

/// Replace a box's layout options; the next [`update`] sees the new position.
pub fn configure<B: LayoutBox + ?Sized>(_chart: &mut Chart, item: &Rc<RefCell<B>>, options: BoxOptions) {
    *item.borrow_mut().options_mut() = options;
}

struct MinBoxSize {
    item: BoxRef,
    horizontal: bool,
    size: Size,
}

fn min_size_of<'a>(sizes: &'a [MinBoxSize], item: &BoxRef) -> Option<&'a MinBoxSize> {
    sizes.iter().find(|m| same_box(&m.item, item))
}

fn full_width(item: &BoxRef) -> bool {
    item.borrow().options().full_width
}

fn filter_by_position(boxes: &[BoxRef], position: Position) -> Vec<BoxRef> {
    boxes
        .iter()
        .filter(|b| b.borrow().options().position == position)
        .cloned()
        .collect()
}

fn sum_widths(boxes: &[BoxRef]) -> f64 {
    boxes.iter().map(|b| b.borrow().geometry().width).sum()
}

fn sum_heights(boxes: &[BoxRef]) -> f64 {
    boxes.iter().map(|b| b.borrow().geometry().height).sum()
}

/// Lay out every registered box inside a `width` x `height` canvas and store
/// the resulting plotting rectangle in `chart.chart_area`.
///
/// Never fails. Degenerate input (no boxes on an axis, boxes larger than the
/// canvas) yields degenerate but finite-or-IEEE geometry rather than an error.
pub fn update(chart: &mut Chart, width: f64, height: f64) {
    let padding = chart.options.layout.resolved_padding();
    let left_padding = padding.left;
    let right_padding = padding.right;
    let top_padding = padding.top;
    let bottom_padding = padding.bottom;

    debug!(width, height, boxes = chart.boxes.len(); "Updating chart layout");

    for b in &chart.boxes {
        if b.borrow().options().position == Position::Unknown {
            debug!("Skipping box with unknown position");
        }
    }

    let left_boxes = filter_by_position(&chart.boxes, Position::Left);
    let right_boxes = filter_by_position(&chart.boxes, Position::Right);
    let mut top_boxes = filter_by_position(&chart.boxes, Position::Top);
    let mut bottom_boxes = filter_by_position(&chart.boxes, Position::Bottom);
    let chart_area_boxes = filter_by_position(&chart.boxes, Position::ChartArea);

    // Full-width boxes sit outermost: first on top, last on the bottom. Vec::sort_by_key is stable.
    top_boxes.sort_by_key(|b| !full_width(b));
    bottom_boxes.sort_by_key(full_width);

    let chart_width = width - left_padding - right_padding;
    let chart_height = height - top_padding - bottom_padding;
    let chart_area_width = chart_width / 2.0;
    let chart_area_height = chart_height / 2.0;

    // Average allowances. A zero count divides to inf/NaN, which no box ever sees.
    let vertical_box_width =
        (width - chart_area_width) / (left_boxes.len() + right_boxes.len()) as f64;
    let horizontal_box_height =
        (height - chart_area_height) / (top_boxes.len() + bottom_boxes.len()) as f64;

    let mut max_chart_area_width = chart_width;
    let mut max_chart_area_height = chart_height;
    let mut min_box_sizes: Vec<MinBoxSize> = Vec::new();

    let measure_order = left_boxes
        .iter()
        .chain(&right_boxes)
        .chain(&top_boxes)
        .chain(&bottom_boxes);
    for item in measure_order {
        let mut b = item.borrow_mut();
        let horizontal = b.is_horizontal();
        let size = if horizontal {
            let max_w = if b.options().full_width { chart_width } else { max_chart_area_width };
            let size = b.update(max_w, horizontal_box_height, None);
            max_chart_area_height -= size.height;
            size
        } else {
            let size = b.update(vertical_box_width, chart_area_height, None);
            max_chart_area_width -= size.width;
            size
        };
        trace!(horizontal, width = size.width, height = size.height; "Box minimum size");
        min_box_sizes.push(MinBoxSize { item: item.clone(), horizontal, size });
    }

    // At this point the chart area is as large as it can be with every box at its minimum.
    let mut total_left_boxes_width = left_padding;
    let mut total_right_boxes_width = right_padding;
    let mut total_top_boxes_height = top_padding;
    let mut total_bottom_boxes_height = bottom_padding;

    let fit_box = |item: &BoxRef, margins: Insets| {
        let Some(min) = min_size_of(&min_box_sizes, item) else { return };
        let mut b = item.borrow_mut();
        if min.horizontal {
            let max_w = if b.options().full_width { chart_width } else { max_chart_area_width };
            b.update(max_w, chart_height / 2.0, Some(margins));
        } else {
            b.update(min.size.width, max_chart_area_height, Some(margins));
        }
    };

    for item in left_boxes.iter().chain(&right_boxes) {
        fit_box(item, Insets::new(total_left_boxes_width, total_right_boxes_width, 0.0, 0.0));
    }
    total_left_boxes_width += sum_widths(&left_boxes);
    total_right_boxes_width += sum_widths(&right_boxes);

    for item in top_boxes.iter().chain(&bottom_boxes) {
        fit_box(item, Insets::new(total_left_boxes_width, total_right_boxes_width, 0.0, 0.0));
    }
    total_top_boxes_height += sum_heights(&top_boxes);
    total_bottom_boxes_height += sum_heights(&bottom_boxes);

    // Let vertical boxes know how much is taken above and below them.
    let vertical_margins =
        Insets::new(0.0, 0.0, total_top_boxes_height, total_bottom_boxes_height);
    for item in left_boxes.iter().chain(&right_boxes) {
        if let Some(min) = min_size_of(&min_box_sizes, item) {
            item.borrow_mut().update(min.size.width, max_chart_area_height, Some(vertical_margins));
        }
    }

    // Margins may have changed box sizes (label rotation), so total again.
    total_left_boxes_width = left_padding + sum_widths(&left_boxes);
    total_right_boxes_width = right_padding + sum_widths(&right_boxes);
    total_top_boxes_height = top_padding + sum_heights(&top_boxes);
    total_bottom_boxes_height = bottom_padding + sum_heights(&bottom_boxes);

    // Boxes only ever grow past their minimum, so forcing the new size is safe.
    let new_max_chart_area_height = height - total_top_boxes_height - total_bottom_boxes_height;
    let new_max_chart_area_width = width - total_left_boxes_width - total_right_boxes_width;

    if new_max_chart_area_width != max_chart_area_width
        || new_max_chart_area_height != max_chart_area_height
    {
        debug!(
            width = new_max_chart_area_width,
            height = new_max_chart_area_height;
            "Chart area changed after margin refit"
        );
        for item in left_boxes.iter().chain(&right_boxes) {
            item.borrow_mut().geometry_mut().height = new_max_chart_area_height;
        }
        for item in top_boxes.iter().chain(&bottom_boxes) {
            let mut b = item.borrow_mut();
            if !b.options().full_width {
                b.geometry_mut().width = new_max_chart_area_width;
            }
        }
        max_chart_area_height = new_max_chart_area_height;
        max_chart_area_width = new_max_chart_area_width;
    }

    let mut left = left_padding;
    let mut top = top_padding;

    let place_box = |item: &BoxRef, left: &mut f64, top: &mut f64| {
        let mut b = item.borrow_mut();
        let horizontal = b.is_horizontal();
        let full = b.options().full_width;
        let g = b.geometry_mut();
        if horizontal {
            g.left = if full { left_padding } else { total_left_boxes_width };
            g.right = if full {
                width - right_padding
            } else {
                total_left_boxes_width + max_chart_area_width
            };
            g.top = *top;
            g.bottom = *top + g.height;
            *top = g.bottom;
        } else {
            g.left = *left;
            g.right = *left + g.width;
            g.top = total_top_boxes_height;
            g.bottom = total_top_boxes_height + max_chart_area_height;
            *left = g.right;
        }
    };

    for item in left_boxes.iter().chain(&top_boxes) {
        place_box(item, &mut left, &mut top);
    }

    left += max_chart_area_width;
    top += max_chart_area_height;

    for item in right_boxes.iter().chain(&bottom_boxes) {
        place_box(item, &mut left, &mut top);
    }

    let chart_area = Rect::from_ltrb(
        total_left_boxes_width,
        total_top_boxes_height,
        total_left_boxes_width + max_chart_area_width,
        total_top_boxes_height + max_chart_area_height,
    );
    chart.chart_area = Some(chart_area);

    debug!(
        left = chart_area.left,
        top = chart_area.top,
        right = chart_area.right,
        bottom = chart_area.bottom;
        "Chart area committed"
    );

    for item in &chart_area_boxes {
        let mut b = item.borrow_mut();
        b.geometry_mut().set_bounds(chart_area);
        b.update(max_chart_area_width, max_chart_area_height, None);
    }
}
