// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the box layout engine, built-in boxes and chart configuration.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod plugin;
pub mod radial;
pub mod text;
pub mod title;
pub mod types;

pub use axis::{Axis, AxisOptions, ScaleKind};
pub use chart::Chart;
pub use config::{ChartConfig, ChartKind, ChartOptions, LayoutOptions, Padding};
pub use error::{ConfigError, Result};
pub use geometry::{BoxGeometry, Rect};
pub use layout::{add_box, configure, remove_box, update, BoxOptions, BoxRef, LayoutBox, Position};
pub use legend::{Legend, LegendOptions};
pub use plugin::Decoration;
pub use radial::{RadialOptions, RadialScale};
pub use text::{ApproxTextMeasure, Font, TextMeasure};
pub use title::{Title, TitleOptions, TitleText};
pub use types::{Insets, Size};
