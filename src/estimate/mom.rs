//! Method-of-moments estimation.

use super::{biased_variance, sample_mean, EstimationError};
use crate::core::{DistributionFamily, EstimationMethod, EstimationResult};

/// Fit `family` to `sample` by matching theoretical moments to the first
/// and second empirical moments.
///
/// Closed forms per family (with `m₁` the sample mean and `v` the second
/// central moment `m₂ − m₁²`):
/// - normal: `mean = m₁`, `std_dev = √v` — identical to the MLE
/// - exponential: `λ = 1/m₁` — identical to the MLE
/// - poisson: `λ = m₁` — identical to the MLE
/// - uniform: `min = m₁ − √(3v)`, `max = m₁ + √(3v)` (a Uniform(a, b)
///   has variance `(b−a)²/12`)
/// - binomial: `p = 1 − v/m₁`, `n = m₁/p`; both parameters are solved
///   from the data, so no trial count is required. `n` is reported as the
///   real-valued moment solution, not rounded, and overdispersed data
///   (`v > m₁`) yields a negative `p` — a visible sign the binomial model
///   does not fit, deliberately left uncorrected.
///
/// Method-of-moments results never carry a log-likelihood.
pub fn estimate_mom(
    sample: &[f64],
    family: DistributionFamily,
) -> Result<EstimationResult, EstimationError> {
    if sample.is_empty() {
        return Err(EstimationError::EmptySample);
    }

    let mean = sample_mean(sample);
    let var = biased_variance(sample, mean);

    let pairs: Vec<(&str, f64)> = match family {
        DistributionFamily::Normal => vec![("mean", mean), ("std_dev", var.sqrt())],
        DistributionFamily::Exponential => vec![("lambda", 1.0 / mean)],
        DistributionFamily::Poisson => vec![("lambda", mean)],
        DistributionFamily::Uniform => {
            let half_width = (3.0 * var).sqrt();
            vec![("min", mean - half_width), ("max", mean + half_width)]
        }
        DistributionFamily::Binomial => {
            let p = 1.0 - var / mean;
            let n = mean / p;
            vec![("n", n), ("p", p)]
        }
    };

    Ok(EstimationResult::new(
        EstimationMethod::MethodOfMoments,
        family,
        &pairs,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_mom_worked_example() {
        // Sample 0..=9: m₁ = 4.5, v = 8.25, half-width √24.75
        let sample: Vec<f64> = (0..10).map(f64::from).collect();
        let fit = estimate_mom(&sample, DistributionFamily::Uniform).unwrap();
        let half_width = 24.75_f64.sqrt();
        assert_relative_eq!(fit.param("min").unwrap(), 4.5 - half_width, epsilon = 1e-12);
        assert_relative_eq!(fit.param("max").unwrap(), 4.5 + half_width, epsilon = 1e-12);
        assert_eq!(fit.log_likelihood, None);
    }

    #[test]
    fn test_binomial_mom_solves_both_parameters() {
        // Counts with m₁ = 4, v = 0.5: p = 1 − 0.5/4 = 0.875, n = 4/0.875
        let sample = [4.0, 4.0, 3.0, 5.0];
        let fit = estimate_mom(&sample, DistributionFamily::Binomial).unwrap();
        assert_relative_eq!(fit.param("p").unwrap(), 0.875, epsilon = 1e-12);
        assert_relative_eq!(fit.param("n").unwrap(), 4.0 / 0.875, epsilon = 1e-12);
    }

    #[test]
    fn test_binomial_mom_overdispersed_goes_negative() {
        // v > m₁ is incompatible with a binomial; the raw solution shows it.
        let sample = [0.0, 8.0, 0.0, 8.0];
        let fit = estimate_mom(&sample, DistributionFamily::Binomial).unwrap();
        assert!(fit.param("p").unwrap() < 0.0);
    }

    #[test]
    fn test_normal_mom_matches_moments() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let fit = estimate_mom(&sample, DistributionFamily::Normal).unwrap();
        assert_relative_eq!(fit.param("mean").unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(fit.param("std_dev").unwrap(), 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_empty_sample_errors() {
        assert!(matches!(
            estimate_mom(&[], DistributionFamily::Poisson),
            Err(EstimationError::EmptySample)
        ));
    }
}
