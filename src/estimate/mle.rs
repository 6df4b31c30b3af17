//! Maximum-likelihood estimation.

use super::likelihood::log_likelihood;
use super::{biased_variance, sample_mean, EstimationError};
use crate::core::{DistributionFamily, EstimationMethod, EstimationResult, Params};

/// Fit `family` to `sample` by maximum likelihood.
///
/// Closed forms per family:
/// - normal: `mean = Σx/n`, `std_dev = √(Σ(x−mean)²/n)` — the biased
///   n-denominator variance, per standard MLE theory
/// - exponential: `λ = 1/mean`
/// - poisson: `λ = mean`
/// - uniform: `min = sample min`, `max = sample max`
///
/// The result carries the data log-likelihood under the fitted
/// parameters, `-inf` when the fit is degenerate (all observations
/// equal, for the normal and uniform families).
///
/// The binomial family is not served here: its trial count is an input,
/// not an estimable quantity, so calling this with
/// [`DistributionFamily::Binomial`] returns
/// [`EstimationError::TrialCountRequired`]; use
/// [`estimate_mle_binomial`] instead.
pub fn estimate_mle(
    sample: &[f64],
    family: DistributionFamily,
) -> Result<EstimationResult, EstimationError> {
    if sample.is_empty() {
        return Err(EstimationError::EmptySample);
    }

    let result = match family {
        DistributionFamily::Normal => {
            let mean = sample_mean(sample);
            let var = biased_variance(sample, mean);
            let std_dev = var.sqrt();
            let ll = log_likelihood(&Params::Normal { mean, std_dev }, sample);
            EstimationResult::new(
                EstimationMethod::Mle,
                family,
                &[("mean", mean), ("std_dev", std_dev)],
                Some(ll),
            )
        }
        DistributionFamily::Exponential => {
            let lambda = 1.0 / sample_mean(sample);
            let ll = log_likelihood(&Params::Exponential { lambda }, sample);
            EstimationResult::new(EstimationMethod::Mle, family, &[("lambda", lambda)], Some(ll))
        }
        DistributionFamily::Poisson => {
            let lambda = sample_mean(sample);
            let ll = log_likelihood(&Params::Poisson { lambda }, sample);
            EstimationResult::new(EstimationMethod::Mle, family, &[("lambda", lambda)], Some(ll))
        }
        DistributionFamily::Uniform => {
            let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
            let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let ll = log_likelihood(&Params::Uniform { min, max }, sample);
            EstimationResult::new(
                EstimationMethod::Mle,
                family,
                &[("min", min), ("max", max)],
                Some(ll),
            )
        }
        DistributionFamily::Binomial => return Err(EstimationError::TrialCountRequired),
    };

    Ok(result)
}

/// Fit a binomial success probability by maximum likelihood for a known
/// trial count: `p = mean / trials`, clamped to `[0.01, 0.99]` so a fit
/// on boundary data stays usable as a sampling parameter.
///
/// The trial count is echoed back in the estimates under `"n"`. The
/// binomial log-likelihood is left undefined (`None`).
pub fn estimate_mle_binomial(
    sample: &[f64],
    trials: u64,
) -> Result<EstimationResult, EstimationError> {
    if sample.is_empty() {
        return Err(EstimationError::EmptySample);
    }

    let p = (sample_mean(sample) / trials as f64).clamp(0.01, 0.99);
    Ok(EstimationResult::new(
        EstimationMethod::Mle,
        DistributionFamily::Binomial,
        &[("n", trials as f64), ("p", p)],
        None,
    ))
}
