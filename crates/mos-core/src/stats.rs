//! Per-condition summary statistics
//!
//! Every interval estimator consumes the same derived quantities: the
//! MOS, the sample dispersion, the binomial success/trial counts, and
//! the category histogram. [`RowStatistics`] computes them in a single
//! pass over a condition's ratings so the dispatcher can share one
//! summary across all estimation methods.

use crate::error::{Error, Result};
use crate::scale::{is_valid_rating, SCALE_MIN, SCALE_POINTS, SCALE_RANGE};

/// Summary statistics for one test condition's ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStatistics {
    n: usize,
    mean: f64,
    sum_sq_dev: f64,
    successes: u64,
    trials: u64,
    histogram: [u64; SCALE_POINTS],
}

impl RowStatistics {
    /// Compute statistics from a validated rating row.
    ///
    /// Fails with [`Error::InsufficientSamples`] on an empty row. The
    /// caller is responsible for scale validation (see
    /// [`crate::RatingMatrix`]); out-of-range values here are a logic
    /// error.
    pub fn from_ratings(ratings: &[u8]) -> Result<Self> {
        if ratings.is_empty() {
            return Err(Error::empty_row());
        }
        debug_assert!(ratings.iter().all(|&r| is_valid_rating(r)));

        let n = ratings.len();
        let mut sum = 0u64;
        let mut histogram = [0u64; SCALE_POINTS];
        for &r in ratings {
            sum += u64::from(r);
            histogram[usize::from(r - SCALE_MIN)] += 1;
        }
        let mean = sum as f64 / n as f64;

        let sum_sq_dev = ratings
            .iter()
            .map(|&r| {
                let d = f64::from(r) - mean;
                d * d
            })
            .sum::<f64>();

        // Binomial framing: each subject contributes SCALE_RANGE trials,
        // of which (rating - SCALE_MIN) count as successes.
        let successes = sum - n as u64 * u64::from(SCALE_MIN);
        let trials = n as u64 * u64::from(SCALE_RANGE);

        Ok(Self {
            n,
            mean,
            sum_sq_dev,
            successes,
            trials,
            histogram,
        })
    }

    /// Number of subjects
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Mean Opinion Score: the arithmetic mean of the ratings
    #[inline]
    pub fn mos(&self) -> f64 {
        self.mean
    }

    /// Sample variance (divisor n−1).
    ///
    /// Undefined for a single subject; fails with
    /// [`Error::InsufficientSamples`].
    pub fn variance(&self) -> Result<f64> {
        if self.n < 2 {
            return Err(Error::InsufficientSamples {
                expected: 2,
                actual: self.n,
            });
        }
        Ok(self.sum_sq_dev / (self.n - 1) as f64)
    }

    /// Sample standard deviation (divisor n−1)
    pub fn std_dev(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }

    /// Standard error of the mean, `s / sqrt(n)`
    pub fn std_error(&self) -> Result<f64> {
        Ok(self.std_dev()? / (self.n as f64).sqrt())
    }

    /// Total success count under the binomial framing, `Σ (rating − 1)`
    #[inline]
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Pooled trial count under the binomial framing, `n · SCALE_RANGE`
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Estimated success proportion, `successes / trials`.
    ///
    /// Equals `(MOS − SCALE_MIN) / SCALE_RANGE`.
    #[inline]
    pub fn proportion(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }

    /// Rating counts per category, index 0 holding the count of 1-ratings
    #[inline]
    pub fn histogram(&self) -> &[u64; SCALE_POINTS] {
        &self.histogram
    }

    /// Empirical category frequencies, summing to 1
    pub fn frequencies(&self) -> [f64; SCALE_POINTS] {
        let n = self.n as f64;
        let mut freq = [0.0; SCALE_POINTS];
        for (f, &count) in freq.iter_mut().zip(self.histogram.iter()) {
            *f = count as f64 / n;
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_statistics() {
        let stats = RowStatistics::from_ratings(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(stats.n(), 5);
        assert_relative_eq!(stats.mos(), 3.0);
        assert_relative_eq!(stats.variance().unwrap(), 2.5);
        assert_relative_eq!(stats.std_dev().unwrap(), 2.5f64.sqrt());
        assert_eq!(stats.successes(), 10);
        assert_eq!(stats.trials(), 20);
        assert_relative_eq!(stats.proportion(), 0.5);
        assert_eq!(stats.histogram(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_proportion_matches_mos_mapping() {
        let stats = RowStatistics::from_ratings(&[4, 4, 5, 3, 4]).unwrap();
        assert_relative_eq!(stats.proportion(), (stats.mos() - 1.0) / 4.0);
    }

    #[test]
    fn test_degenerate_rows() {
        let all_ones = RowStatistics::from_ratings(&[1, 1, 1, 1]).unwrap();
        assert_eq!(all_ones.successes(), 0);
        assert_relative_eq!(all_ones.proportion(), 0.0);
        assert_relative_eq!(all_ones.variance().unwrap(), 0.0);

        let all_fives = RowStatistics::from_ratings(&[5, 5, 5, 5]).unwrap();
        assert_eq!(all_fives.successes(), all_fives.trials());
        assert_relative_eq!(all_fives.proportion(), 1.0);
    }

    #[test]
    fn test_single_subject() {
        let stats = RowStatistics::from_ratings(&[3]).unwrap();
        assert_relative_eq!(stats.mos(), 3.0);
        assert!(matches!(
            stats.variance(),
            Err(Error::InsufficientSamples {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_empty_row() {
        assert!(matches!(
            RowStatistics::from_ratings(&[]),
            Err(Error::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn test_frequencies() {
        let stats = RowStatistics::from_ratings(&[1, 5, 1, 5]).unwrap();
        let freq = stats.frequencies();
        assert_relative_eq!(freq[0], 0.5);
        assert_relative_eq!(freq[4], 0.5);
        assert_relative_eq!(freq.iter().sum::<f64>(), 1.0);
    }
}
