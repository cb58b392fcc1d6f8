//! Multi-method confidence interval estimation for Mean Opinion Scores
//!
//! This crate is a thin facade over the `mos-ci` workspace. It re-exports
//! the two member crates:
//!
//! - [`core`] (`mos-core`): errors, the 5-point rating scale, rating
//!   matrices, per-condition statistics, and the distribution quantile
//!   functions the estimators share
//! - [`confidence`] (`mos-confidence`): the eight interval estimators and
//!   the high-level analysis API
//!
//! # Example
//!
//! ```rust
//! use mos_ci::confidence::mos_confidence_intervals;
//! use mos_ci::core::RatingMatrix;
//!
//! let matrix = RatingMatrix::from_rows(&[
//!     vec![4, 5, 3, 4, 5, 4, 4, 3],
//!     vec![2, 1, 2, 3, 2, 2, 1, 2],
//! ]).unwrap();
//!
//! let analysis = mos_confidence_intervals(&matrix, 0.05).unwrap();
//! println!("{}", analysis.summary());
//! ```

pub use mos_confidence as confidence;
pub use mos_core as core;

// Most callers only want the analysis entry points.
pub use mos_confidence::{mos_confidence_intervals, MosAnalysis, MosCiEstimator};
pub use mos_core::{RatingMatrix, Result};
