//! Exact binomial statistics for the triangle test.
//!
//! A participant sees three samples, two identical, and picks the odd one.
//! Under the null hypothesis every pick is a guess with success probability
//! 1/3, so the number of correct picks out of `n` is Binomial(n, 1/3).

pub mod chart;
pub mod report;
pub mod stats;

pub use chart::{ChartSpec, TraceRole};
pub use report::{calculate, format_p_value, status_line, TriangleReport};
pub use stats::{
    distribution, exact_p_value, validate, DistributionSeries, ProbabilityPoint, TrialCounts,
    MAX_SAMPLE_SIZE, NULL_SUCCESS_PROBABILITY,
};
