//! Log-likelihood evaluation under fitted parameters.

use crate::core::Params;

/// Log-likelihood of `sample` under `params`: `Σ ln f(xᵢ)`.
///
/// Degenerate parameter sets are reported as `-inf` rather than raised as
/// errors: a zero-variance normal fit and a zero-width uniform fit both
/// make the likelihood identically zero on any non-trivial sample.
///
/// The uniform case uses the closed form `-n · ln(max − min)`; every
/// other family sums the pointwise log density.
pub fn log_likelihood(params: &Params, sample: &[f64]) -> f64 {
    match *params {
        Params::Uniform { min, max } => {
            if min < max {
                -(sample.len() as f64) * (max - min).ln()
            } else {
                f64::NEG_INFINITY
            }
        }
        Params::Normal { std_dev, .. } if std_dev <= 0.0 => f64::NEG_INFINITY,
        _ => sample.iter().map(|&x| params.log_density(x)).sum(),
    }
}
