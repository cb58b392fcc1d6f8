//! Binomial-proportion intervals for the MOS
//!
//! These methods map each rating onto a Bernoulli-sum framing: a rating
//! r contributes r−1 "successes" out of 4 "trials", so the observed mean
//! estimates a proportion p = (MOS−1)/4. A proportion interval is
//! computed on [0, 1] and transformed back to the rating scale via
//! `rating = 4p + 1`. The binomial sum over-estimates the true rating
//! variance, so these intervals are conservative.
//!
//! Four constructions are provided:
//!
//! - [`WaldCI`]: normal approximation on the proportion, unclamped
//! - [`WilsonCI`]: continuity-corrected Wilson score over the pooled
//!   trial count
//! - [`ClopperPearsonCI`]: exact interval via the beta-binomial
//!   relationship
//! - [`JeffreysCI`]: Bayesian credible interval under the Jeffreys
//!   Beta(1/2, 1/2) prior

use crate::traits::MosIntervalEstimator;
use crate::types::{ConfidenceInterval, SignificanceLevel};
use mos_core::math::distributions::{beta_quantile, normal_quantile};
use mos_core::{rating_from_proportion, Result, RowStatistics};

fn interval_from_proportions(
    p_lower: f64,
    p_upper: f64,
    stats: &RowStatistics,
    level: SignificanceLevel,
) -> ConfidenceInterval {
    ConfidenceInterval::new(
        rating_from_proportion(p_lower),
        rating_from_proportion(p_upper),
        stats.mos(),
        level.confidence_level(),
    )
}

/// Wald interval on the success proportion.
///
/// `p ± z·√(p(1−p)/n)` with n the number of subjects. The bounds are
/// mapped to the rating scale without clamping; near-degenerate rows can
/// produce bounds outside [1, 5].
#[derive(Debug, Clone, Copy)]
pub struct WaldCI {
    level: SignificanceLevel,
}

impl WaldCI {
    /// Create a new Wald estimator
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }
}

impl MosIntervalEstimator for WaldCI {
    fn confidence_interval(
        &self,
        _ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        let p = stats.proportion();
        let n = stats.n() as f64;
        let z = normal_quantile(self.level.upper_tail())?;

        let std_error = (p * (1.0 - p) / n).sqrt();
        let margin = z * std_error;

        Ok(interval_from_proportions(
            p - margin,
            p + margin,
            stats,
            self.level,
        ))
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Wald"
    }

    fn short_label(&self) -> &'static str {
        "wald"
    }
}

/// Continuity-corrected Wilson score interval over the pooled trial
/// count `n·4`, clamped to the rating scale.
#[derive(Debug, Clone, Copy)]
pub struct WilsonCI {
    level: SignificanceLevel,
}

impl WilsonCI {
    /// Create a new continuity-corrected Wilson estimator
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }
}

impl MosIntervalEstimator for WilsonCI {
    fn confidence_interval(
        &self,
        _ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        let t = stats.trials() as f64;
        let p = stats.proportion();
        let z = normal_quantile(self.level.upper_tail())?;
        let z2 = z * z;
        let denom = 2.0 * (t + z2);

        // The continuity-corrected score bounds (Newcombe). At the
        // degenerate proportions the correction is undefined and the
        // bound sits on the boundary. The radicand can dip below zero
        // for alpha near 1.
        let p_lower = if stats.successes() == 0 {
            0.0
        } else {
            let radicand = (z2 - 1.0 / t + 4.0 * t * p * (1.0 - p) + (4.0 * p - 2.0)).max(0.0);
            ((2.0 * t * p + z2 - (z * radicand.sqrt() + 1.0)) / denom).max(0.0)
        };
        let p_upper = if stats.successes() == stats.trials() {
            1.0
        } else {
            let radicand = (z2 - 1.0 / t + 4.0 * t * p * (1.0 - p) - (4.0 * p - 2.0)).max(0.0);
            ((2.0 * t * p + z2 + (z * radicand.sqrt() + 1.0)) / denom).min(1.0)
        };

        Ok(interval_from_proportions(p_lower, p_upper, stats, self.level).clamped_to_scale())
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Wilson with continuity correction"
    }

    fn short_label(&self) -> &'static str {
        "wilson"
    }
}

/// Exact Clopper-Pearson interval via the beta-binomial relationship,
/// clamped to the rating scale.
#[derive(Debug, Clone, Copy)]
pub struct ClopperPearsonCI {
    level: SignificanceLevel,
}

impl ClopperPearsonCI {
    /// Create a new Clopper-Pearson estimator
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }
}

impl MosIntervalEstimator for ClopperPearsonCI {
    fn confidence_interval(
        &self,
        _ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        let s = stats.successes();
        let t = stats.trials();

        // At s = 0 / s = t one beta shape parameter would be zero; the
        // exact bound is the boundary itself.
        let p_lower = if s == 0 {
            0.0
        } else {
            beta_quantile(
                self.level.tail_probability(),
                s as f64,
                (t - s) as f64 + 1.0,
            )?
        };
        let p_upper = if s == t {
            1.0
        } else {
            beta_quantile(self.level.upper_tail(), s as f64 + 1.0, (t - s) as f64)?
        };

        Ok(interval_from_proportions(p_lower, p_upper, stats, self.level).clamped_to_scale())
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Clopper-Pearson"
    }

    fn short_label(&self) -> &'static str {
        "cp"
    }
}

/// Jeffreys interval: equal-tailed credible interval of the
/// Beta(s + 1/2, t − s + 1/2) posterior, clamped to the rating scale.
///
/// A row with no successes pins the lower bound to the scale minimum,
/// and a fully saturated row pins the upper bound to the scale maximum.
#[derive(Debug, Clone, Copy)]
pub struct JeffreysCI {
    level: SignificanceLevel,
}

impl JeffreysCI {
    /// Create a new Jeffreys estimator
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }
}

impl MosIntervalEstimator for JeffreysCI {
    fn confidence_interval(
        &self,
        _ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        let s = stats.successes();
        let t = stats.trials();
        let shape_a = s as f64 + 0.5;
        let shape_b = (t - s) as f64 + 0.5;

        let p_lower = if s == 0 {
            0.0
        } else {
            beta_quantile(self.level.tail_probability(), shape_a, shape_b)?
        };
        let p_upper = if s == t {
            1.0
        } else {
            beta_quantile(self.level.upper_tail(), shape_a, shape_b)?
        };

        Ok(interval_from_proportions(p_lower, p_upper, stats, self.level).clamped_to_scale())
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Jeffreys"
    }

    fn short_label(&self) -> &'static str {
        "jeff"
    }
}
