//! Common types for MOS confidence intervals

use mos_core::{clamp_to_scale, Error, Result};
use std::fmt;

/// A confidence interval around a Mean Opinion Score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (the MOS)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Clamp both bounds to the valid rating range `[1, 5]`
    pub fn clamped_to_scale(self) -> Self {
        Self {
            lower: clamp_to_scale(self.lower),
            upper: clamp_to_scale(self.upper),
            ..self
        }
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], MOS: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Two-sided significance level with validation.
///
/// `alpha` is the probability mass outside the interval; the resulting
/// intervals carry confidence `1 − alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// Create a new significance level.
    ///
    /// Fails with [`Error::InvalidParameter`] unless `alpha` lies in
    /// (0, 1).
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::invalid_alpha(alpha));
        }
        Ok(Self(alpha))
    }

    /// Get the significance level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the confidence level (1 − alpha)
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the lower tail probability (alpha/2 for two-sided intervals)
    pub fn tail_probability(&self) -> f64 {
        self.0 / 2.0
    }

    /// Get the upper tail probability (1 − alpha/2)
    pub fn upper_tail(&self) -> f64 {
        1.0 - self.0 / 2.0
    }
}

impl Default for SignificanceLevel {
    /// The conventional alpha = 0.05 (95% confidence)
    fn default() -> Self {
        Self(0.05)
    }
}

impl TryFrom<f64> for SignificanceLevel {
    type Error = Error;

    fn try_from(alpha: f64) -> Result<Self> {
        Self::new(alpha)
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alpha = {}", self.0)
    }
}
