//! High-level analysis API
//!
//! [`MosCiEstimator`] is the dispatcher over the eight interval
//! estimators: it validates the whole request up front, computes one
//! [`RowStatistics`] per test condition, invokes every strategy in
//! catalog order, and owns assembly of the result matrices. Strategies
//! themselves never touch shared result storage.
//!
//! Validation is fail-fast: a malformed request aborts the whole call
//! and no partial results are produced.

use crate::asymptotic::{NormalCI, StudentTCI};
use crate::binomial::{ClopperPearsonCI, JeffreysCI, WaldCI, WilsonCI};
use crate::bootstrap::{BootstrapCI, DEFAULT_RESAMPLES};
use crate::catalog::{Method, NUM_METHODS};
use crate::multinomial::SimultaneousCI;
use crate::traits::MosIntervalEstimator;
use crate::types::{ConfidenceInterval, SignificanceLevel};
use mos_core::{Error, RatingMatrix, Result, RowStatistics};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete analysis of a rating matrix: the MOS and eight interval
/// estimates per test condition.
///
/// The three matrices are indexed `[condition][method]`, with columns in
/// the order of [`Method::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosAnalysis {
    /// The significance level the analysis was run at
    pub alpha: f64,
    /// Full method names, in catalog order
    pub method_names: Vec<String>,
    /// Short method labels, in catalog order
    pub method_labels: Vec<String>,
    /// Mean Opinion Score per test condition
    pub mos: Vec<f64>,
    /// Lower interval bounds, `[condition][method]`
    pub ci_lower: Vec<[f64; NUM_METHODS]>,
    /// Upper interval bounds, `[condition][method]`
    pub ci_upper: Vec<[f64; NUM_METHODS]>,
    /// Interval widths, `[condition][method]`
    pub ci_width: Vec<[f64; NUM_METHODS]>,
}

impl MosAnalysis {
    /// Number of test conditions analyzed
    pub fn conditions(&self) -> usize {
        self.mos.len()
    }

    /// Reconstruct one interval from the result matrices
    pub fn interval(&self, condition: usize, method: Method) -> ConfidenceInterval {
        let m = method.index();
        ConfidenceInterval::new(
            self.ci_lower[condition][m],
            self.ci_upper[condition][m],
            self.mos[condition],
            1.0 - self.alpha,
        )
    }

    /// Render an aligned per-condition, per-method summary table
    pub fn summary(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(out, "MOS confidence intervals (alpha = {})", self.alpha);
        let _ = write!(out, "{:>4} {:>7}", "TC", "MOS");
        for label in &self.method_labels {
            let _ = write!(out, " {label:>16}");
        }
        let _ = writeln!(out);

        for condition in 0..self.conditions() {
            let _ = write!(out, "{:>4} {:>7.3}", condition, self.mos[condition]);
            for m in 0..NUM_METHODS {
                let cell = format!(
                    "[{:.3}, {:.3}]",
                    self.ci_lower[condition][m], self.ci_upper[condition][m]
                );
                let _ = write!(out, " {cell:>16}");
            }
            let _ = writeln!(out);
        }
        out
    }
}

/// Dispatcher over the eight MOS interval estimators.
///
/// Configured once, then applied to whole rating matrices. Rows are
/// independent; with the `parallel` feature they are fanned out across
/// rayon workers with deterministic per-row bootstrap seeds, so parallel
/// and sequential runs produce identical results.
#[derive(Debug, Clone)]
pub struct MosCiEstimator {
    level: SignificanceLevel,
    n_resamples: usize,
    seed: Option<u64>,
}

impl MosCiEstimator {
    /// Create a new estimator at the given significance level
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

    /// Set the base random seed for the bootstrap method.
    ///
    /// With a fixed seed the whole analysis is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Estimate the MOS and all eight intervals for every test condition.
    ///
    /// Fails with [`Error::InsufficientSamples`] when fewer than two
    /// subjects rated the conditions (the variance-based methods are
    /// undefined); any failure aborts the whole call.
    #[instrument(skip(self, matrix), fields(
        conditions = matrix.conditions(),
        subjects = matrix.subjects(),
        n_resamples = self.n_resamples,
    ))]
    pub fn estimate(&self, matrix: &RatingMatrix) -> Result<MosAnalysis> {
        if matrix.subjects() < 2 {
            return Err(Error::InsufficientSamples {
                expected: 2,
                actual: matrix.subjects(),
            });
        }

        // Resolved once per call so every row draws from a distinct,
        // deterministic stream.
        let base_seed = self.seed.unwrap_or_else(|| thread_rng().gen());

        debug!("Running all {NUM_METHODS} estimation methods");

        let rows: Vec<&[u8]> = matrix.rows().collect();

        #[cfg(feature = "parallel")]
        let per_row = {
            use rayon::prelude::*;
            rows.par_iter()
                .enumerate()
                .map(|(idx, row)| self.condition_intervals(row, idx, base_seed))
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let per_row = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.condition_intervals(row, idx, base_seed))
            .collect::<Result<Vec<_>>>()?;

        let mut analysis = MosAnalysis {
            alpha: self.level.value(),
            method_names: Method::ALL.iter().map(|m| m.name().to_string()).collect(),
            method_labels: Method::ALL
                .iter()
                .map(|m| m.short_label().to_string())
                .collect(),
            mos: Vec::with_capacity(per_row.len()),
            ci_lower: Vec::with_capacity(per_row.len()),
            ci_upper: Vec::with_capacity(per_row.len()),
            ci_width: Vec::with_capacity(per_row.len()),
        };

        for (mos, intervals) in per_row {
            let mut lower = [0.0; NUM_METHODS];
            let mut upper = [0.0; NUM_METHODS];
            let mut width = [0.0; NUM_METHODS];
            for (m, ci) in intervals.iter().enumerate() {
                lower[m] = ci.lower;
                upper[m] = ci.upper;
                width[m] = ci.width();
            }
            analysis.mos.push(mos);
            analysis.ci_lower.push(lower);
            analysis.ci_upper.push(upper);
            analysis.ci_width.push(width);
        }

        Ok(analysis)
    }

    /// Run all eight strategies over one condition, in catalog order.
    fn condition_intervals(
        &self,
        ratings: &[u8],
        condition: usize,
        base_seed: u64,
    ) -> Result<(f64, [ConfidenceInterval; NUM_METHODS])> {
        let stats = RowStatistics::from_ratings(ratings)?;

        // Offset by the resample count so per-resample seed streams of
        // neighbouring rows never overlap.
        let row_seed = base_seed.wrapping_add((condition * self.n_resamples) as u64);
        let bootstrap = BootstrapCI::new(self.level)
            .with_resamples(self.n_resamples)
            .with_seed(row_seed);

        let intervals = [
            bootstrap.confidence_interval(ratings, &stats)?,
            NormalCI::new(self.level).confidence_interval(ratings, &stats)?,
            StudentTCI::new(self.level).confidence_interval(ratings, &stats)?,
            WaldCI::new(self.level).confidence_interval(ratings, &stats)?,
            WilsonCI::new(self.level).confidence_interval(ratings, &stats)?,
            ClopperPearsonCI::new(self.level).confidence_interval(ratings, &stats)?,
            JeffreysCI::new(self.level).confidence_interval(ratings, &stats)?,
            SimultaneousCI::new(self.level).confidence_interval(ratings, &stats)?,
        ];

        Ok((stats.mos(), intervals))
    }
}

impl Default for MosCiEstimator {
    fn default() -> Self {
        Self::new(SignificanceLevel::default())
    }
}

/// Analyze a rating matrix at the given significance level.
///
/// Convenience wrapper over [`MosCiEstimator`]; the bootstrap method is
/// randomly seeded. Use [`mos_confidence_intervals_seeded`] for
/// reproducible results.
pub fn mos_confidence_intervals(matrix: &RatingMatrix, alpha: f64) -> Result<MosAnalysis> {
    MosCiEstimator::new(SignificanceLevel::new(alpha)?).estimate(matrix)
}

/// Analyze a rating matrix with a fixed bootstrap seed
pub fn mos_confidence_intervals_seeded(
    matrix: &RatingMatrix,
    alpha: f64,
    seed: u64,
) -> Result<MosAnalysis> {
    MosCiEstimator::new(SignificanceLevel::new(alpha)?)
        .with_seed(seed)
        .estimate(matrix)
}
