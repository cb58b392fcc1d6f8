//! Nonparametric bootstrap interval for the MOS
//!
//! Resamples the rating row with replacement, computes the mean of each
//! resample, and takes the empirical `[alpha/2, 1 − alpha/2]` quantiles
//! of the resample-mean distribution as the interval.

use crate::traits::MosIntervalEstimator;
use crate::types::{ConfidenceInterval, SignificanceLevel};
use mos_core::{Error, Result, RowStatistics};
use rand::prelude::*;
use tracing::debug;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 2000;

/// Percentile bootstrap estimator for the MOS.
///
/// Nondeterministic unless a seed is fixed with [`with_seed`]; with a
/// seed, repeated runs on identical data yield identical intervals.
///
/// [`with_seed`]: BootstrapCI::with_seed
#[derive(Debug, Clone)]
pub struct BootstrapCI {
    level: SignificanceLevel,
    n_resamples: usize,
    seed: Option<u64>,
}

impl BootstrapCI {
    /// Create a new bootstrap estimator with the default resample count
    pub fn new(level: SignificanceLevel) -> Self {
        Self {
            level,
            n_resamples: DEFAULT_RESAMPLES,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        assert!(n_resamples > 0, "Number of resamples must be positive");
        self.n_resamples = n_resamples;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw resample means of the rating row.
    ///
    /// Each resample gets its own generator seeded from the base seed,
    /// so the draws are independent of iteration order.
    fn resample_means(&self, ratings: &[u8]) -> Vec<f64> {
        let n = ratings.len();
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());

        debug!(
            n_resamples = self.n_resamples,
            n, "Drawing bootstrap resample means"
        );

        (0..self.n_resamples)
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                let sum: u64 = (0..n)
                    .map(|_| u64::from(ratings[rng.gen_range(0..n)]))
                    .sum();
                sum as f64 / n as f64
            })
            .collect()
    }
}

impl MosIntervalEstimator for BootstrapCI {
    fn confidence_interval(
        &self,
        ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        if ratings.is_empty() {
            return Err(Error::empty_row());
        }

        let mut means = self.resample_means(ratings);
        means.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let lower_idx = ((self.level.tail_probability() * means.len() as f64) as usize)
            .min(means.len() - 1);
        let upper_idx =
            ((self.level.upper_tail() * means.len() as f64) as usize).min(means.len() - 1);

        // Resample means of valid ratings already lie on the scale.
        Ok(ConfidenceInterval::new(
            means[lower_idx],
            means[upper_idx],
            stats.mos(),
            self.level.confidence_level(),
        ))
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Bootstrap"
    }

    fn short_label(&self) -> &'static str {
        "boot"
    }
}
