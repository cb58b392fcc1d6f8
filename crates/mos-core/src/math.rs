//! Distribution quantile functions
//!
//! The interval estimators need the inverse CDFs of four distributions.
//! Rather than constructing `statrs` distribution objects ad hoc at every
//! call site, this module exposes them as four pure functions with
//! explicit domains, all mapping construction failures onto
//! [`Error::Computation`](crate::Error::Computation).

/// Inverse CDF lookups backed by `statrs`
pub mod distributions {
    use crate::error::{Error, Result};
    use statrs::distribution::{Beta, ChiSquared, ContinuousCDF, Normal, StudentsT};

    fn check_probability(p: f64) -> Result<()> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::invalid_probability(p));
        }
        Ok(())
    }

    /// Standard normal quantile `Φ⁻¹(p)`, for `p` in (0, 1)
    pub fn normal_quantile(p: f64) -> Result<f64> {
        check_probability(p)?;
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))?;
        Ok(normal.inverse_cdf(p))
    }

    /// Student-t quantile with `df` degrees of freedom, for `p` in (0, 1)
    /// and `df` > 0
    pub fn student_t_quantile(p: f64, df: f64) -> Result<f64> {
        check_probability(p)?;
        let t_dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {e}")))?;
        Ok(t_dist.inverse_cdf(p))
    }

    /// Chi-square quantile with `df` degrees of freedom, for `p` in (0, 1)
    /// and `df` > 0
    pub fn chi_squared_quantile(p: f64, df: f64) -> Result<f64> {
        check_probability(p)?;
        let chi2 = ChiSquared::new(df).map_err(|e| {
            Error::Computation(format!("Failed to create chi-square distribution: {e}"))
        })?;
        Ok(chi2.inverse_cdf(p))
    }

    /// Beta quantile with shape parameters `a`, `b`, for `p` in (0, 1).
    ///
    /// Both shapes must be strictly positive; callers own the degenerate
    /// `a == 0` / `b == 0` boundary cases (they have closed-form answers
    /// of 0 and 1 and must not reach this function).
    pub fn beta_quantile(p: f64, a: f64, b: f64) -> Result<f64> {
        check_probability(p)?;
        let beta = Beta::new(a, b)
            .map_err(|e| Error::Computation(format!("Failed to create beta distribution: {e}")))?;
        Ok(beta.inverse_cdf(p))
    }

}
