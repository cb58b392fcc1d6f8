//! Asymptotic mean intervals based on theoretical distributions
//!
//! The classical `MOS ± q · s/√n` constructions. Both assume the sample
//! mean is (asymptotically) normal; the Student-t variant replaces the
//! normal quantile with the t quantile at n−1 degrees of freedom, which
//! widens the interval for small panels and converges to the normal one
//! as n grows.
//!
//! These are the only two methods whose bounds are NOT clamped to the
//! rating scale; the raw algebraic interval is returned.

use crate::traits::MosIntervalEstimator;
use crate::types::{ConfidenceInterval, SignificanceLevel};
use mos_core::math::distributions::{normal_quantile, student_t_quantile};
use mos_core::{Result, RowStatistics};

/// Normal-approximation interval for the MOS
#[derive(Debug, Clone, Copy)]
pub struct NormalCI {
    level: SignificanceLevel,
}

impl NormalCI {
    /// Create a new normal-approximation estimator
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }
}

impl MosIntervalEstimator for NormalCI {
    fn confidence_interval(
        &self,
        _ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        let std_error = stats.std_error()?;
        let z = normal_quantile(self.level.upper_tail())?;

        let margin = z * std_error;
        Ok(ConfidenceInterval::new(
            stats.mos() - margin,
            stats.mos() + margin,
            stats.mos(),
            self.level.confidence_level(),
        ))
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Normal approximation"
    }

    fn short_label(&self) -> &'static str {
        "norm"
    }
}

/// Student-t interval for the MOS, with n−1 degrees of freedom
#[derive(Debug, Clone, Copy)]
pub struct StudentTCI {
    level: SignificanceLevel,
}

impl StudentTCI {
    /// Create a new Student-t estimator
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }
}

impl MosIntervalEstimator for StudentTCI {
    fn confidence_interval(
        &self,
        _ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        let std_error = stats.std_error()?;
        let df = (stats.n() - 1) as f64;
        let t = student_t_quantile(self.level.upper_tail(), df)?;

        let margin = t * std_error;
        Ok(ConfidenceInterval::new(
            stats.mos() - margin,
            stats.mos() + margin,
            stats.mos(),
            self.level.confidence_level(),
        ))
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Student-t approximation"
    }

    fn short_label(&self) -> &'static str {
        "t"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mos_core::Error;

    fn stats_for(ratings: &[u8]) -> RowStatistics {
        RowStatistics::from_ratings(ratings).unwrap()
    }

    #[test]
    fn test_normal_interval() {
        let ratings = [1, 2, 3, 4, 5];
        let stats = stats_for(&ratings);

        let ci = NormalCI::new(SignificanceLevel::default())
            .confidence_interval(&ratings, &stats)
            .unwrap();

        // MOS = 3, s = sqrt(2.5), se = sqrt(0.5), z = 1.959964
        let margin = 1.959964 * 0.5f64.sqrt();
        assert_relative_eq!(ci.estimate, 3.0);
        assert_relative_eq!(ci.lower, 3.0 - margin, epsilon = 1e-5);
        assert_relative_eq!(ci.upper, 3.0 + margin, epsilon = 1e-5);
    }

    #[test]
    fn test_t_wider_than_normal_for_small_n() {
        let ratings = [2, 3, 4, 3, 5];
        let stats = stats_for(&ratings);
        let level = SignificanceLevel::default();

        let normal = NormalCI::new(level)
            .confidence_interval(&ratings, &stats)
            .unwrap();
        let t = StudentTCI::new(level)
            .confidence_interval(&ratings, &stats)
            .unwrap();

        assert!(t.width() > normal.width());
        assert!(normal.contains(stats.mos()));
        assert!(t.contains(stats.mos()));
    }

    #[test]
    fn test_unbounded_below_scale() {
        // An extreme row pushes the unclamped lower bound below 1
        let ratings = [1, 1, 1, 5];
        let stats = stats_for(&ratings);

        let ci = StudentTCI::new(SignificanceLevel::default())
            .confidence_interval(&ratings, &stats)
            .unwrap();

        assert!(ci.lower < 1.0);
    }

    #[test]
    fn test_single_subject_rejected() {
        let ratings = [4];
        let stats = stats_for(&ratings);
        let level = SignificanceLevel::default();

        assert!(matches!(
            NormalCI::new(level).confidence_interval(&ratings, &stats),
            Err(Error::InsufficientSamples { .. })
        ));
        assert!(matches!(
            StudentTCI::new(level).confidence_interval(&ratings, &stats),
            Err(Error::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn test_confidence_levels_ordered() {
        let ratings = [1, 2, 3, 4, 5, 2, 3, 4, 3, 3];
        let stats = stats_for(&ratings);

        let ci_90 = NormalCI::new(SignificanceLevel::new(0.10).unwrap())
            .confidence_interval(&ratings, &stats)
            .unwrap();
        let ci_95 = NormalCI::new(SignificanceLevel::new(0.05).unwrap())
            .confidence_interval(&ratings, &stats)
            .unwrap();
        let ci_99 = NormalCI::new(SignificanceLevel::new(0.01).unwrap())
            .confidence_interval(&ratings, &stats)
            .unwrap();

        assert!(ci_90.width() < ci_95.width());
        assert!(ci_95.width() < ci_99.width());
    }
}
