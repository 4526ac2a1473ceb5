// File: crates/chart-core/src/config.rs
// Summary: Declarative chart configuration (type, data, layout padding, title, legend, scales) loaded from JSON.

use std::path::Path;

use log::info;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::axis::AxisOptions;
use crate::error::{ConfigError, Result};
use crate::legend::LegendOptions;
use crate::radial::RadialOptions;
use crate::title::TitleOptions;
use crate::types::{Insets, Size};

/// Chart padding as written in config: one number for every side, or per side.
///
/// Parsing never fails: a non-numeric side is 0 and any other value is no padding.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "RawPadding")]
pub enum Padding {
    Uniform(f64),
    Sides(SidePadding),
}

/// Per-side padding; a missing or non-numeric side is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidePadding {
    #[serde(deserialize_with = "lenient_number")]
    pub left: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub right: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub top: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub bottom: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPadding {
    Uniform(f64),
    Sides(SidePadding),
    Invalid(IgnoredAny),
}

impl From<RawPadding> for Padding {
    fn from(raw: RawPadding) -> Self {
        match raw {
            RawPadding::Uniform(v) => Padding::Uniform(v),
            RawPadding::Sides(s) => Padding::Sides(s),
            RawPadding::Invalid(_) => Padding::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Other(IgnoredAny),
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<f64>, D::Error> {
    Ok(match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Number(v) => Some(v),
        LenientNumber::Other(_) => None,
    })
}

impl Padding {
    pub fn resolve(&self) -> Insets {
        match *self {
            Padding::Uniform(v) => Insets::uniform(v),
            Padding::Sides(s) => Insets::new(
                s.left.unwrap_or(0.0),
                s.right.unwrap_or(0.0),
                s.top.unwrap_or(0.0),
                s.bottom.unwrap_or(0.0),
            ),
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Uniform(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Absent or `null` padding is 0 on every side.
    pub padding: Option<Padding>,
}

impl LayoutOptions {
    pub fn with_padding(padding: Padding) -> Self {
        Self { padding: Some(padding) }
    }

    pub fn resolved_padding(&self) -> Insets {
        self.padding.map(|p| p.resolve()).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Scatter,
    Radar,
    PolarArea,
    Pie,
    Doughnut,
    #[serde(other)]
    Other,
}

impl ChartKind {
    /// Charts drawn on x/y axes.
    pub fn is_cartesian(self) -> bool {
        matches!(self, ChartKind::Line | ChartKind::Bar | ChartKind::Scatter | ChartKind::Other)
    }

    /// Charts drawn on a radial scale that fills the chart area.
    pub fn is_radial(self) -> bool {
        matches!(self, ChartKind::Radar | ChartKind::PolarArea)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub label: Option<String>,
    /// `null` entries are gaps and do not affect axis ranges.
    pub data: Vec<Option<f64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Min and max over every dataset value; `(0, 1)` when there is nothing finite.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.datasets.iter().flat_map(|d| d.data.iter().flatten().copied()) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        (min, max)
    }

    /// Category labels: explicit labels, or point indices of the longest dataset.
    pub fn category_labels(&self) -> Vec<String> {
        if !self.labels.is_empty() {
            return self.labels.clone();
        }
        let n = self.datasets.iter().map(|d| d.data.len()).max().unwrap_or(0);
        (0..n).map(|i| i.to_string()).collect()
    }

    /// One legend entry per dataset; unlabelled datasets get an empty entry.
    pub fn legend_labels(&self) -> Vec<String> {
        self.datasets.iter().map(|d| d.label.clone().unwrap_or_default()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScalesOptions {
    pub x_axes: Vec<AxisOptions>,
    pub y_axes: Vec<AxisOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub layout: LayoutOptions,
    pub title: Option<TitleOptions>,
    pub legend: Option<LegendOptions>,
    pub scales: Option<ScalesOptions>,
    /// Radial scale options for radar and polar area charts.
    pub scale: Option<RadialOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading chart configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Parse a canvas width/height pair given as text.
pub fn canvas_size(width: &str, height: &str) -> Result<Size> {
    Ok(Size::new(parse_dimension(width)?, parse_dimension(height)?))
}

fn parse_dimension(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidDimension(s.to_string())),
    }
}
