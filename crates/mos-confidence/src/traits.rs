//! Core trait for MOS interval estimation
//!
//! Each estimation method is a pure function from (ratings, summary
//! statistics) to an immutable interval. Strategies never write into
//! shared result storage; the dispatcher in [`crate::api`] owns all
//! result assembly.

use crate::types::ConfidenceInterval;
use mos_core::{Result, RowStatistics};

/// A confidence interval estimator for one test condition's MOS.
///
/// Implementations receive both the raw rating row and its precomputed
/// [`RowStatistics`]; most methods only need the statistics, while the
/// bootstrap resamples the raw ratings and the multinomial method reads
/// the category histogram.
pub trait MosIntervalEstimator {
    /// Calculate the confidence interval for one condition.
    ///
    /// # Arguments
    /// * `ratings` - The condition's validated ratings, one per subject
    /// * `stats` - Summary statistics precomputed from `ratings`
    fn confidence_interval(
        &self,
        ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval>;

    /// Get the confidence level
    fn confidence_level(&self) -> f64;

    /// Full method name for presentation
    fn name(&self) -> &'static str;

    /// Short method label for compact table headers
    fn short_label(&self) -> &'static str;
}
