//! Closed-form parameter estimation: maximum likelihood and method of moments.
//!
//! Both estimators are pure functions of `(sample, family)` and return an
//! independent [`EstimationResult`](crate::core::EstimationResult) record;
//! fitting by one method never involves the other.
//!
//! For the normal, exponential, and poisson families the two methods
//! coincide (their sufficient statistics are the first and second sample
//! moments); they diverge for the uniform and binomial families.

mod likelihood;
mod mle;
mod mom;

pub use likelihood::log_likelihood;
pub use mle::{estimate_mle, estimate_mle_binomial};
pub use mom::estimate_mom;

use thiserror::Error;

/// Errors raised by the estimators.
#[derive(Debug, Error)]
pub enum EstimationError {
    /// MLE and MoM are undefined on an empty sample.
    #[error("cannot estimate parameters from an empty sample")]
    EmptySample,

    /// The binomial maximum-likelihood fit needs the trial count as an
    /// input; it is not estimable from the data alone under this design.
    #[error("binomial maximum-likelihood fit requires a known trial count; use estimate_mle_binomial")]
    TrialCountRequired,
}

/// Sample mean, `Σx / n`.
pub(crate) fn sample_mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Biased (n-denominator) variance, the second central sample moment.
///
/// This is the estimation-theoretic variance used by both closed-form
/// estimators; the unbiased n−1 form lives in
/// [`describe`](crate::describe) and the two are deliberately different.
pub(crate) fn biased_variance(sample: &[f64], mean: f64) -> f64 {
    sample.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / sample.len() as f64
}
