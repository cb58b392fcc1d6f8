//! Error types for MOS confidence interval estimation
//!
//! Provides a unified error type for all mos-ci crates. Validation errors
//! are raised before any per-condition computation begins, so a failed
//! call never produces partial results.

use thiserror::Error;

/// Core error type for MOS analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A rating outside the 5-point scale
    #[error("Invalid rating {value} at condition {condition}, subject {subject}: ratings must be in 1..=5")]
    InvalidRating {
        value: u8,
        condition: usize,
        subject: usize,
    },

    /// Too few subjects for the requested operation
    #[error("Insufficient samples: expected at least {expected} subjects, got {actual}")]
    InsufficientSamples { expected: usize, actual: usize },

    /// Numerical computation error from a distribution primitive.
    ///
    /// With validated inputs these indicate an internal invariant
    /// violation, not a user error.
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance level {alpha} must be in (0, 1)"))
    }

    /// Create an error for an empty ratings row
    pub fn empty_row() -> Self {
        Self::InsufficientSamples {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a ragged ratings matrix
    pub fn ragged_row(condition: usize, expected: usize, actual: usize) -> Self {
        Self::InvalidParameter(format!(
            "Ragged ratings matrix: condition {condition} has {actual} subjects, expected {expected}"
        ))
    }

    /// Create an error for an invalid quantile probability
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in (0, 1)"))
    }
}
