// File: crates/chart-core/tests/layout_scenarios.rs
// Purpose: Fixed layout scenarios: placement of edge boxes, padding forms, growth correction and overlays.

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::{
    BoxGeometry, BoxOptions, Chart, Decoration, Insets, LayoutBox, LayoutOptions, Padding, Position,
    RadialOptions, RadialScale, Rect, Size,
};
use float_cmp::assert_approx_eq;

fn strip(position: Position, full_width: bool, thickness: f64) -> Rc<RefCell<Decoration>> {
    Rc::new(RefCell::new(Decoration::new(
        "strip",
        BoxOptions::new(position, full_width),
        Size::new(thickness, thickness),
    )))
}

fn bounds<B: LayoutBox + ?Sized>(b: &Rc<RefCell<B>>) -> Rect {
    b.borrow().geometry().bounds()
}

#[test]
fn left_and_bottom_axis_claim_their_edges() {
    let mut chart = Chart::new();
    let left = strip(Position::Left, false, 40.0);
    let bottom = strip(Position::Bottom, false, 30.0);
    chart.add_box(left.clone());
    chart.add_box(bottom.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(40.0, 0.0, 400.0, 270.0)));
    assert_eq!(bounds(&left), Rect::from_ltrb(0.0, 0.0, 40.0, 270.0));
    assert_eq!(bounds(&bottom), Rect::from_ltrb(40.0, 270.0, 400.0, 300.0));
}

#[test]
fn full_width_title_sits_above_legend() {
    let mut chart = Chart::new();
    let legend = strip(Position::Top, false, 10.0);
    let title = strip(Position::Top, true, 20.0);
    // Registration order is legend first; the full-width title still goes outermost.
    chart.add_box(legend.clone());
    chart.add_box(title.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(bounds(&title), Rect::from_ltrb(0.0, 0.0, 400.0, 20.0));
    assert_eq!(bounds(&legend), Rect::from_ltrb(0.0, 20.0, 400.0, 30.0));
    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(0.0, 30.0, 400.0, 300.0)));
}

#[test]
fn non_full_width_legend_is_bounded_by_vertical_boxes() {
    let mut chart = Chart::new();
    let title = strip(Position::Top, true, 20.0);
    let legend = strip(Position::Top, false, 10.0);
    let axis = strip(Position::Left, false, 50.0);
    chart.add_box(title.clone());
    chart.add_box(legend.clone());
    chart.add_box(axis.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(bounds(&title), Rect::from_ltrb(0.0, 0.0, 400.0, 20.0));
    assert_eq!(bounds(&legend), Rect::from_ltrb(50.0, 20.0, 400.0, 30.0));
    assert_eq!(bounds(&axis), Rect::from_ltrb(0.0, 30.0, 50.0, 300.0));
    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(50.0, 30.0, 400.0, 300.0)));
}

#[test]
fn full_width_bottom_box_is_outermost() {
    let mut chart = Chart::new();
    let footer = strip(Position::Bottom, true, 10.0);
    let axis = strip(Position::Bottom, false, 20.0);
    let left = strip(Position::Left, false, 30.0);
    chart.add_box(footer.clone());
    chart.add_box(axis.clone());
    chart.add_box(left.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(bounds(&axis), Rect::from_ltrb(30.0, 270.0, 400.0, 290.0));
    assert_eq!(bounds(&footer), Rect::from_ltrb(0.0, 290.0, 400.0, 300.0));
}

#[test]
fn right_boxes_stack_from_the_chart_area_outwards() {
    let mut chart = Chart::new();
    let inner = strip(Position::Right, false, 40.0);
    let outer = strip(Position::Right, false, 20.0);
    chart.add_box(inner.clone());
    chart.add_box(outer.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(bounds(&inner), Rect::from_ltrb(340.0, 0.0, 380.0, 300.0));
    assert_eq!(bounds(&outer), Rect::from_ltrb(380.0, 0.0, 400.0, 300.0));
    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(0.0, 0.0, 340.0, 300.0)));
}

#[test]
fn no_boxes_yields_padded_canvas() {
    let mut chart = Chart::new();
    chart.update_layout(640.0, 480.0);
    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(0.0, 0.0, 640.0, 480.0)));

    chart.options.layout = LayoutOptions::with_padding(Padding::Uniform(12.0));
    chart.update_layout(640.0, 480.0);
    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(12.0, 12.0, 628.0, 468.0)));
}

#[test]
fn per_side_padding_defaults_missing_sides_to_zero() {
    let mut chart = Chart::new();
    chart.options.layout = serde_json::from_str(r#"{"padding": {"left": 5, "top": 3}}"#).unwrap();
    let bottom = strip(Position::Bottom, true, 10.0);
    chart.add_box(bottom.clone());

    chart.update_layout(200.0, 100.0);

    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(5.0, 3.0, 200.0, 90.0)));
    assert_eq!(bounds(&bottom), Rect::from_ltrb(5.0, 90.0, 200.0, 100.0));
}

#[test]
fn padding_offsets_every_box() {
    let mut chart = Chart::new();
    chart.options.layout = LayoutOptions::with_padding(Padding::Uniform(10.0));
    let left = strip(Position::Left, false, 40.0);
    let top = strip(Position::Top, true, 20.0);
    chart.add_box(left.clone());
    chart.add_box(top.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(bounds(&top), Rect::from_ltrb(10.0, 10.0, 390.0, 30.0));
    assert_eq!(bounds(&left), Rect::from_ltrb(10.0, 30.0, 50.0, 290.0));
    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(50.0, 30.0, 390.0, 290.0)));
}

#[test]
fn top_only_layout_stays_finite() {
    // No left/right boxes: the vertical allowance divides by zero but is never handed out.
    let mut chart = Chart::new();
    let title = strip(Position::Top, true, 20.0);
    chart.add_box(title.clone());

    chart.update_layout(400.0, 300.0);

    let area = chart.chart_area.unwrap();
    assert!(area.left.is_finite() && area.right.is_finite());
    assert_eq!(area, Rect::from_ltrb(0.0, 20.0, 400.0, 300.0));
    assert_eq!(bounds(&title), Rect::from_ltrb(0.0, 0.0, 400.0, 20.0));
}

#[test]
fn duplicate_registration_is_counted_twice() {
    let mut chart = Chart::new();
    let axis = strip(Position::Left, false, 40.0);
    chart.add_box(axis.clone());
    chart.add_box(axis.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(80.0, 0.0, 400.0, 300.0)));
    // The second placement wins.
    assert_eq!(bounds(&axis), Rect::from_ltrb(40.0, 0.0, 80.0, 300.0));
}

#[test]
fn oversized_boxes_invert_the_chart_area() {
    let mut chart = Chart::new();
    let left = strip(Position::Left, false, 300.0);
    let right = strip(Position::Right, false, 300.0);
    chart.add_box(left.clone());
    chart.add_box(right.clone());

    chart.update_layout(400.0, 300.0);

    // Not clamped: the chart area ends up with negative width.
    let area = chart.chart_area.unwrap();
    assert_eq!(area, Rect::from_ltrb(300.0, 0.0, 100.0, 300.0));
    assert_approx_eq!(f64, area.width(), -200.0);
    assert_eq!(bounds(&left), Rect::from_ltrb(0.0, 0.0, 300.0, 300.0));
    assert_eq!(bounds(&right), Rect::from_ltrb(100.0, 0.0, 400.0, 300.0));
}

#[test]
fn overlays_receive_the_chart_area() {
    let mut chart = Chart::new();
    let overlay = strip(Position::ChartArea, false, 0.0);
    let radial = Rc::new(RefCell::new(RadialScale::new(RadialOptions::default())));
    let second = strip(Position::ChartArea, false, 0.0);
    chart.add_box(overlay.clone());
    chart.add_box(radial.clone());
    chart.add_box(second.clone());
    chart.add_box(strip(Position::Left, false, 40.0));
    chart.add_box(strip(Position::Top, true, 20.0));

    chart.update_layout(400.0, 300.0);

    let area = chart.chart_area.unwrap();
    assert_eq!(area, Rect::from_ltrb(40.0, 20.0, 400.0, 300.0));
    for b in [&overlay, &second] {
        let g = *b.borrow().geometry();
        assert_eq!(g.bounds(), area);
        assert_eq!((g.width, g.height), (360.0, 280.0));
    }
    assert_eq!(bounds(&radial), area);
    assert_eq!(radial.borrow().center(), (220.0, 160.0));
}

#[test]
fn overlay_does_not_consume_space() {
    let mut with_overlay = Chart::new();
    with_overlay.add_box(strip(Position::ChartArea, false, 500.0));
    with_overlay.add_box(strip(Position::Bottom, false, 30.0));
    with_overlay.update_layout(400.0, 300.0);

    let mut without = Chart::new();
    without.add_box(strip(Position::Bottom, false, 30.0));
    without.update_layout(400.0, 300.0);

    assert_eq!(with_overlay.chart_area, without.chart_area);
}

/// Bottom box whose labels need more room once it learns the side margins.
struct GrowingAxis {
    options: BoxOptions,
    geometry: BoxGeometry,
}

impl LayoutBox for GrowingAxis {
    fn options(&self) -> &BoxOptions { &self.options }
    fn options_mut(&mut self) -> &mut BoxOptions { &mut self.options }

    fn update(&mut self, max_width: f64, _max_height: f64, margins: Option<Insets>) -> Size {
        let height = if margins.is_some() { 40.0 } else { 20.0 };
        self.geometry.width = max_width;
        self.geometry.height = height;
        Size::new(max_width, height)
    }

    fn geometry(&self) -> &BoxGeometry { &self.geometry }
    fn geometry_mut(&mut self) -> &mut BoxGeometry { &mut self.geometry }
}

#[test]
fn growth_after_refit_shrinks_chart_area() {
    let mut chart = Chart::new();
    let left = strip(Position::Left, false, 30.0);
    let bottom = Rc::new(RefCell::new(GrowingAxis {
        options: BoxOptions::new(Position::Bottom, false),
        geometry: BoxGeometry::default(),
    }));
    chart.add_box(left.clone());
    chart.add_box(bottom.clone());

    chart.update_layout(400.0, 300.0);

    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(30.0, 0.0, 400.0, 260.0)));
    // Vertical boxes are stretched to the corrected chart area height.
    assert_approx_eq!(f64, left.borrow().geometry().height, 260.0);
    assert_eq!(bounds(&left), Rect::from_ltrb(0.0, 0.0, 30.0, 260.0));
    assert_eq!(bounds(&bottom), Rect::from_ltrb(30.0, 260.0, 400.0, 300.0));
    assert_approx_eq!(f64, bottom.borrow().geometry().width, 370.0);
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Call {
    max_width: f64,
    max_height: f64,
    margins: Option<Insets>,
}

/// Records every update call and reports a fixed thickness.
struct Probe {
    options: BoxOptions,
    thickness: f64,
    calls: Vec<Call>,
    geometry: BoxGeometry,
}

impl Probe {
    fn new(position: Position, thickness: f64) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            options: BoxOptions::new(position, false),
            thickness,
            calls: Vec::new(),
            geometry: BoxGeometry::default(),
        }))
    }
}

impl LayoutBox for Probe {
    fn options(&self) -> &BoxOptions { &self.options }
    fn options_mut(&mut self) -> &mut BoxOptions { &mut self.options }

    fn update(&mut self, max_width: f64, max_height: f64, margins: Option<Insets>) -> Size {
        self.calls.push(Call { max_width, max_height, margins });
        let size = if self.options.position.is_horizontal() {
            Size::new(max_width, self.thickness)
        } else if self.options.position == Position::ChartArea {
            Size::new(max_width, max_height)
        } else {
            Size::new(self.thickness, max_height)
        };
        self.geometry.width = size.width;
        self.geometry.height = size.height;
        size
    }

    fn geometry(&self) -> &BoxGeometry { &self.geometry }
    fn geometry_mut(&mut self) -> &mut BoxGeometry { &mut self.geometry }
}

#[test]
fn boxes_are_updated_at_most_three_times() {
    let mut chart = Chart::new();
    let left = Probe::new(Position::Left, 40.0);
    let right = Probe::new(Position::Right, 20.0);
    let top = Probe::new(Position::Top, 10.0);
    let bottom = Probe::new(Position::Bottom, 30.0);
    let overlay = Probe::new(Position::ChartArea, 0.0);
    for b in [&left, &right, &top, &bottom, &overlay] {
        chart.add_box(b.clone());
    }

    chart.update_layout(400.0, 300.0);

    assert_eq!(left.borrow().calls.len(), 3);
    assert_eq!(right.borrow().calls.len(), 3);
    assert_eq!(top.borrow().calls.len(), 2);
    assert_eq!(bottom.borrow().calls.len(), 2);
    assert_eq!(overlay.borrow().calls.len(), 1);
}

#[test]
fn update_arguments_follow_each_step() {
    let mut chart = Chart::new();
    let left = Probe::new(Position::Left, 40.0);
    let right = Probe::new(Position::Right, 20.0);
    let top = Probe::new(Position::Top, 10.0);
    let bottom = Probe::new(Position::Bottom, 30.0);
    let overlay = Probe::new(Position::ChartArea, 0.0);
    for b in [&left, &right, &top, &bottom, &overlay] {
        chart.add_box(b.clone());
    }

    chart.update_layout(400.0, 300.0);

    // Measure: vertical boxes share (400 - 200) / 2, horizontal ones (300 - 150) / 2.
    let l = left.borrow();
    assert_eq!(l.calls[0], Call { max_width: 100.0, max_height: 150.0, margins: None });
    let t = top.borrow();
    assert_eq!(t.calls[0], Call { max_width: 340.0, max_height: 75.0, margins: None });

    // Fit: horizontal boxes learn the vertical totals.
    assert_eq!(
        t.calls[1],
        Call { max_width: 340.0, max_height: 150.0, margins: Some(Insets::new(40.0, 20.0, 0.0, 0.0)) }
    );
    assert_eq!(l.calls[1].max_width, 40.0);
    assert_eq!(l.calls[1].max_height, 260.0);
    // Vertical totals are only summed once every vertical box has been fitted.
    assert_eq!(l.calls[1].margins, Some(Insets::default()));
    let r = right.borrow();
    assert_eq!(r.calls[1].margins, Some(Insets::default()));

    // Refit: vertical boxes learn the horizontal totals.
    assert_eq!(
        l.calls[2],
        Call { max_width: 40.0, max_height: 260.0, margins: Some(Insets::new(0.0, 0.0, 10.0, 30.0)) }
    );

    assert_eq!(
        overlay.borrow().calls[0],
        Call { max_width: 340.0, max_height: 260.0, margins: None }
    );
    assert_eq!(chart.chart_area, Some(Rect::from_ltrb(40.0, 10.0, 380.0, 270.0)));
}
