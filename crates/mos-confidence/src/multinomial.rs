//! Simultaneous multinomial-proportion interval for the MOS
//!
//! Treats a rating row as a 5-category multinomial sample instead of a
//! binomial collapse. A Bonferroni-corrected chi-square critical value
//! yields a bound on the mean that holds simultaneously across all five
//! category-proportion estimates with joint confidence 1 − alpha.

use crate::traits::MosIntervalEstimator;
use crate::types::{ConfidenceInterval, SignificanceLevel};
use mos_core::math::distributions::chi_squared_quantile;
use mos_core::{Result, RowStatistics, SCALE_MIN, SCALE_POINTS};

/// Simultaneous CI for the mean of a 5-category multinomial.
///
/// The critical value is `χ²⁻¹(1 − alpha/5; 1)`: Bonferroni over the
/// five category proportions, one degree of freedom per marginal.
#[derive(Debug, Clone, Copy)]
pub struct SimultaneousCI {
    level: SignificanceLevel,
}

impl SimultaneousCI {
    /// Create a new simultaneous multinomial estimator
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }
}

impl MosIntervalEstimator for SimultaneousCI {
    fn confidence_interval(
        &self,
        _ratings: &[u8],
        stats: &RowStatistics,
    ) -> Result<ConfidenceInterval> {
        let categories = SCALE_POINTS as f64;
        let critical =
            chi_squared_quantile(1.0 - self.level.value() / categories, 1.0)?;

        // First and second moments of the category distribution over the
        // rating values 1..=5
        let frequencies = stats.frequencies();
        let mut first_moment = 0.0;
        let mut second_moment = 0.0;
        for (idx, &freq) in frequencies.iter().enumerate() {
            let rating = f64::from(SCALE_MIN) + idx as f64;
            first_moment += rating * freq;
            second_moment += rating * rating * freq;
        }

        // Population variance of the categories; floating-point round-off
        // can leave a tiny negative residue for constant rows
        let variance = (second_moment - first_moment * first_moment).max(0.0);
        let bound = (critical / stats.n() as f64 * variance).sqrt();

        Ok(ConfidenceInterval::new(
            first_moment - bound,
            first_moment + bound,
            stats.mos(),
            self.level.confidence_level(),
        )
        .clamped_to_scale())
    }

    fn confidence_level(&self) -> f64 {
        self.level.confidence_level()
    }

    fn name(&self) -> &'static str {
        "Simultaneous CI for multinomial proportions"
    }

    fn short_label(&self) -> &'static str {
        "simult"
    }
}
