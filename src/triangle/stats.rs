use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

use crate::error::{Result, TriangleError};

/// Chance of picking the odd sample out of three by guessing.
pub const NULL_SUCCESS_PROBABILITY: f64 = 1.0 / 3.0;

/// Largest accepted panel. The distribution and chart hold one point per
/// outcome, so memory and response size grow linearly with `n`.
pub const MAX_SAMPLE_SIZE: u64 = 10_000;

// ── Validated Input ─────────────────────────────────────────────────

/// A trial count and correct count that passed validation, together with the
/// Binomial(n, 1/3) null model built for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialCounts {
    n: u64,
    correct: u64,
    null_model: Binomial,
}

impl TrialCounts {
    /// Validates `(n, correct)`. `n` is checked before `correct`, so an empty
    /// or oversized sample is reported as such regardless of `correct`.
    pub fn new(n: u64, correct: u64) -> Result<Self> {
        if n == 0 {
            return Err(TriangleError::EmptySample);
        }
        if n > MAX_SAMPLE_SIZE {
            return Err(TriangleError::SampleTooLarge {
                n,
                max: MAX_SAMPLE_SIZE,
            });
        }
        if correct > n {
            return Err(TriangleError::CorrectExceedsTotal { correct, total: n });
        }
        let null_model = Binomial::new(NULL_SUCCESS_PROBABILITY, n)?;
        Ok(Self {
            n,
            correct,
            null_model,
        })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    /// Exact upper-tail p-value P(X >= correct) for X ~ Binomial(n, 1/3).
    ///
    /// Evaluated as the survival function at `correct - 1`, which statrs
    /// computes through the regularized incomplete beta function rather than
    /// `1 - cdf`, so small tails keep their precision.
    pub fn p_value(&self) -> f64 {
        if self.correct == 0 {
            // P(X <= -1) = 0
            return 1.0;
        }
        self.null_model.sf(self.correct - 1).clamp(0.0, 1.0)
    }

    /// Probability of exactly `k` correct identifications under the null.
    pub fn pmf(&self, k: u64) -> f64 {
        self.null_model.pmf(k)
    }

    /// Null PMF over the full support `0..=n`, split at `correct`.
    ///
    /// The support uses the same `n` as [`TrialCounts::p_value`]. Shifting the
    /// chart to `n + 1` trials would make the plotted tail disagree with the
    /// reported p-value.
    pub fn distribution(&self) -> DistributionSeries {
        let (below, at_or_above): (Vec<_>, Vec<_>) = (0..=self.n)
            .map(|k| ProbabilityPoint {
                k,
                probability: self.pmf(k),
            })
            .partition(|point| point.k < self.correct);

        DistributionSeries {
            below,
            at_or_above,
        }
    }
}

// ── Distribution Series ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProbabilityPoint {
    pub k: u64,
    pub probability: f64,
}

/// PMF points in ascending `k`, partitioned at the observed correct count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistributionSeries {
    /// Outcomes with fewer correct identifications than observed.
    pub below: Vec<ProbabilityPoint>,
    /// The observed outcome and everything more extreme.
    pub at_or_above: Vec<ProbabilityPoint>,
}

impl DistributionSeries {
    pub fn len(&self) -> usize {
        self.below.len() + self.at_or_above.len()
    }

    pub fn is_empty(&self) -> bool {
        self.below.is_empty() && self.at_or_above.is_empty()
    }

    /// All points in ascending `k`.
    pub fn iter(&self) -> impl Iterator<Item = &ProbabilityPoint> {
        self.below.iter().chain(self.at_or_above.iter())
    }

    pub fn total_probability(&self) -> f64 {
        self.iter().map(|p| p.probability).sum()
    }

    /// Summed probability of the observed-or-more-extreme region.
    pub fn tail_probability(&self) -> f64 {
        self.at_or_above.iter().map(|p| p.probability).sum()
    }
}

// ── Free Functions ──────────────────────────────────────────────────

/// Checks that at least one participant took part and that the correct count
/// does not exceed it.
pub fn validate(n: u64, correct: u64) -> Result<TrialCounts> {
    TrialCounts::new(n, correct)
}

pub fn exact_p_value(n: u64, correct: u64) -> Result<f64> {
    Ok(validate(n, correct)?.p_value())
}

pub fn distribution(n: u64, correct: u64) -> Result<DistributionSeries> {
    Ok(validate(n, correct)?.distribution())
}
