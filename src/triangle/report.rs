use serde::Serialize;

use super::chart::ChartSpec;
use super::stats::TrialCounts;
use crate::error::Result;

/// Default form values shown before the first submission.
pub const DEFAULT_SAMPLE_SIZE: u64 = 20;
pub const DEFAULT_CORRECT: u64 = 10;

/// Status line for a successful calculation. Rounding happens only here.
pub fn format_p_value(p_value: f64) -> String {
    format!("Exact p-value: {:.4}", p_value)
}

/// Everything a renderer needs for one submission: the exact p-value, the
/// status line and the chart titled with it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TriangleReport {
    pub n: u64,
    pub correct: u64,
    pub p_value: f64,
    pub status: String,
    pub chart: ChartSpec,
}

impl TriangleReport {
    pub fn from_counts(counts: &TrialCounts) -> Self {
        let p_value = counts.p_value();
        let status = format_p_value(p_value);
        let chart = ChartSpec::from_distribution(status.clone(), &counts.distribution());
        Self {
            n: counts.n(),
            correct: counts.correct(),
            p_value,
            status,
            chart,
        }
    }
}

/// Validates and runs one calculation. Validation failures return before any
/// distribution work is done; their `Display` text is the user-facing status.
pub fn calculate(n: u64, correct: u64) -> Result<TriangleReport> {
    let counts = TrialCounts::new(n, correct)?;
    let report = TriangleReport::from_counts(&counts);
    tracing::debug!(
        n,
        correct,
        p_value = report.p_value,
        "triangle test calculated"
    );
    Ok(report)
}

/// Status line for either outcome, as shown above the chart.
pub fn status_line(outcome: &Result<TriangleReport>) -> String {
    match outcome {
        Ok(report) => report.status.clone(),
        Err(e) => e.to_string(),
    }
}
