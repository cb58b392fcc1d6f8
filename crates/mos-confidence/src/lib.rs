//! Multi-method confidence interval estimation for Mean Opinion Scores
//!
//! This crate provides eight interval constructions for the MOS of a
//! subjective QoE experiment, each embedding a distinct statistical
//! model:
//!
//! - **Bootstrap**: nonparametric percentile interval over resample means
//! - **Normal / Student-t**: classical asymptotic mean intervals
//! - **Wald / Wilson / Clopper-Pearson / Jeffreys**: binomial-proportion
//!   intervals under the conservative Bernoulli-sum framing
//! - **Simultaneous**: a multinomial interval with Bonferroni-corrected
//!   joint coverage over all five rating categories
//!
//! # Overview
//!
//! Every strategy is a pure function from one condition's ratings to an
//! immutable interval; the [`api::MosCiEstimator`] dispatcher runs all
//! eight over every row of a [`RatingMatrix`](mos_core::RatingMatrix)
//! and assembles the `[condition][method]` result matrices.
//!
//! # Example
//!
//! ```rust
//! use mos_confidence::{mos_confidence_intervals_seeded, Method};
//! use mos_core::RatingMatrix;
//!
//! let matrix = RatingMatrix::from_rows(&[
//!     vec![4, 5, 3, 4, 5, 4, 4, 3],
//!     vec![2, 1, 2, 3, 2, 2, 1, 2],
//! ]).unwrap();
//!
//! let analysis = mos_confidence_intervals_seeded(&matrix, 0.05, 42).unwrap();
//! let ci = analysis.interval(0, Method::StudentT);
//! println!("95% CI for condition 0: [{:.2}, {:.2}]", ci.lower, ci.upper);
//! ```

pub mod api;
mod asymptotic;
mod binomial;
mod bootstrap;
mod catalog;
mod multinomial;
mod traits;
mod types;

// Re-exports
pub use api::{
    mos_confidence_intervals, mos_confidence_intervals_seeded, MosAnalysis, MosCiEstimator,
};
pub use asymptotic::{NormalCI, StudentTCI};
pub use binomial::{ClopperPearsonCI, JeffreysCI, WaldCI, WilsonCI};
pub use bootstrap::{BootstrapCI, DEFAULT_RESAMPLES};
pub use catalog::{Method, NUM_METHODS};
pub use multinomial::SimultaneousCI;
pub use traits::MosIntervalEstimator;
pub use types::{ConfidenceInterval, SignificanceLevel};

/// Convenience constructor for a dispatcher at a raw alpha
pub fn estimator(alpha: f64) -> mos_core::Result<MosCiEstimator> {
    Ok(MosCiEstimator::new(SignificanceLevel::new(alpha)?))
}
