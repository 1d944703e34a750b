pub mod error;
pub mod triangle;

pub use error::{Result, TriangleError};
pub use triangle::{
    calculate, distribution, exact_p_value, validate, ChartSpec, DistributionSeries,
    TriangleReport, TrialCounts, MAX_SAMPLE_SIZE, NULL_SUCCESS_PROBABILITY,
};
