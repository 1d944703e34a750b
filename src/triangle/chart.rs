use serde::Serialize;

use super::stats::{DistributionSeries, ProbabilityPoint};

pub const X_AXIS_LABEL: &str = "Number of correct participants";
pub const Y_AXIS_LABEL: &str = "Event probability under the null hypothesis";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Stack,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum TraceRole {
    /// Outcomes below the observed count.
    Below,
    /// The observed count and every more extreme outcome.
    AtOrAbove,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: String,
    pub fixed_range: bool,
}

impl Axis {
    fn fixed(title: &str) -> Self {
        Self {
            title: title.to_string(),
            fixed_range: true,
        }
    }
}

/// One bar series. `x` and `y` are parallel and ascending in `x`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BarTrace {
    pub role: TraceRole,
    pub x: Vec<u64>,
    pub y: Vec<f64>,
}

/// Renderer-neutral description of the stacked bar chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub bar_mode: BarMode,
    pub bar_gap: f64,
    pub show_legend: bool,
    pub hover: bool,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub traces: Vec<BarTrace>,
}

impl ChartSpec {
    /// Builds the two-trace stacked chart. Both traces are always present so
    /// the colour assignment stays stable even when one side is empty.
    pub fn from_distribution(title: impl Into<String>, series: &DistributionSeries) -> Self {
        let trace = |role: TraceRole, points: &[ProbabilityPoint]| BarTrace {
            role,
            x: points.iter().map(|p| p.k).collect(),
            y: points.iter().map(|p| p.probability).collect(),
        };

        Self {
            title: title.into(),
            bar_mode: BarMode::Stack,
            bar_gap: 0.0,
            show_legend: false,
            hover: false,
            x_axis: Axis::fixed(X_AXIS_LABEL),
            y_axis: Axis::fixed(Y_AXIS_LABEL),
            traces: vec![
                trace(TraceRole::Below, series.below.as_slice()),
                trace(TraceRole::AtOrAbove, series.at_or_above.as_slice()),
            ],
        }
    }

    pub fn trace(&self, role: TraceRole) -> Option<&BarTrace> {
        self.traces.iter().find(|t| t.role == role)
    }
}
