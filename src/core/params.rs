//! Parameter records and their validation.

use super::family::DistributionFamily;
use crate::utils::ln_factorial;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use thiserror::Error;

/// A tagged parameter record, one variant per distribution family.
///
/// Bounds are enforced by [`Params::validate`], which every sampling and
/// density entry point calls before touching the numbers:
///
/// | Variant | Constraint |
/// |---|---|
/// | `Normal` | `std_dev > 0` |
/// | `Exponential` | `lambda > 0` |
/// | `Binomial` | `trials >= 1`, `p ∈ [0, 1]` |
/// | `Poisson` | `lambda > 0` |
/// | `Uniform` | `min < max` |
///
/// All real-valued fields must additionally be finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Params {
    Normal { mean: f64, std_dev: f64 },
    Exponential { lambda: f64 },
    Binomial { trials: u64, p: f64 },
    Poisson { lambda: f64 },
    Uniform { min: f64, max: f64 },
}

/// Errors raised when a parameter record or sampling request is out of range.
///
/// Raised before any computation begins; a failed validation never leaves
/// partial output behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("standard deviation must be positive, got {0}")]
    NonPositiveStdDev(f64),

    #[error("rate parameter lambda must be positive, got {0}")]
    NonPositiveLambda(f64),

    #[error("success probability must be in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("trial count must be at least 1")]
    ZeroTrials,

    #[error("uniform bounds must satisfy min < max, got min={min}, max={max}")]
    InvalidUniformBounds { min: f64, max: f64 },

    #[error("parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("sample size must be at least 1")]
    ZeroSampleSize,
}

impl Params {
    /// The family this parameter record belongs to.
    pub fn family(&self) -> DistributionFamily {
        match self {
            Params::Normal { .. } => DistributionFamily::Normal,
            Params::Exponential { .. } => DistributionFamily::Exponential,
            Params::Binomial { .. } => DistributionFamily::Binomial,
            Params::Poisson { .. } => DistributionFamily::Poisson,
            Params::Uniform { .. } => DistributionFamily::Uniform,
        }
    }

    /// Check every field against the family's bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Params::Normal { mean, std_dev } => {
                require_finite("mean", mean)?;
                require_finite("std_dev", std_dev)?;
                if std_dev <= 0.0 {
                    return Err(ValidationError::NonPositiveStdDev(std_dev));
                }
            }
            Params::Exponential { lambda } | Params::Poisson { lambda } => {
                require_finite("lambda", lambda)?;
                if lambda <= 0.0 {
                    return Err(ValidationError::NonPositiveLambda(lambda));
                }
            }
            Params::Binomial { trials, p } => {
                require_finite("p", p)?;
                if trials == 0 {
                    return Err(ValidationError::ZeroTrials);
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(ValidationError::ProbabilityOutOfRange(p));
                }
            }
            Params::Uniform { min, max } => {
                require_finite("min", min)?;
                require_finite("max", max)?;
                if min >= max {
                    return Err(ValidationError::InvalidUniformBounds { min, max });
                }
            }
        }
        Ok(())
    }

    /// Natural log of the density (mass for discrete families) at `x`.
    ///
    /// Points outside the family's support evaluate to `-inf`, as do
    /// non-integer arguments to the discrete families. The record is not
    /// re-validated here; callers that accept external parameters should
    /// run [`Params::validate`] first.
    pub fn log_density(&self, x: f64) -> f64 {
        match *self {
            Params::Normal { mean, std_dev } => {
                let var = std_dev * std_dev;
                let z = x - mean;
                -0.5 * (TAU * var).ln() - z * z / (2.0 * var)
            }
            Params::Exponential { lambda } => {
                if x < 0.0 {
                    f64::NEG_INFINITY
                } else {
                    lambda.ln() - lambda * x
                }
            }
            Params::Poisson { lambda } => match as_count(x) {
                Some(k) => k as f64 * lambda.ln() - lambda - ln_factorial(k),
                None => f64::NEG_INFINITY,
            },
            Params::Binomial { trials, p } => match as_count(x) {
                Some(k) if k <= trials => ln_binomial_pmf(trials, p, k),
                _ => f64::NEG_INFINITY,
            },
            Params::Uniform { min, max } => {
                if x >= min && x <= max {
                    -(max - min).ln()
                } else {
                    f64::NEG_INFINITY
                }
            }
        }
    }

    /// Density (mass for discrete families) at `x`, for curve overlays.
    pub fn pdf(&self, x: f64) -> f64 {
        self.log_density(x).exp()
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { name, value })
    }
}

/// Interpret `x` as a non-negative integer count, or reject it.
fn as_count(x: f64) -> Option<u64> {
    if x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 {
        Some(x as u64)
    } else {
        None
    }
}

/// ln C(n, k) + k ln p + (n − k) ln(1 − p), with the p = 0 and p = 1
/// boundaries handled as point masses at k = 0 and k = n.
fn ln_binomial_pmf(n: u64, p: f64, k: u64) -> f64 {
    if p == 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    if p == 1.0 {
        return if k == n { 0.0 } else { f64::NEG_INFINITY };
    }
    let ln_choose = ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k);
    ln_choose + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln()
}
