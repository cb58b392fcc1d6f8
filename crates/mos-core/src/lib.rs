//! Core types for MOS confidence interval estimation
//!
//! This crate provides the shared foundation of the `mos-ci` workspace:
//!
//! - [`error`]: the unified [`Error`]/[`Result`] types
//! - [`scale`]: the 5-point rating scale constants and mappings
//! - [`matrix`]: validated k×n rating matrices
//! - [`stats`]: single-pass per-condition summary statistics
//! - [`math`]: the distribution quantile functions the estimators share
//!
//! Everything here is a pure computation over validated inputs; no state
//! persists across calls.

pub mod error;
pub mod math;
pub mod matrix;
pub mod scale;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};
pub use matrix::RatingMatrix;
pub use scale::{
    clamp_to_scale, is_valid_rating, rating_from_proportion, SCALE_MAX, SCALE_MIN, SCALE_POINTS,
    SCALE_RANGE,
};
pub use stats::RowStatistics;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
