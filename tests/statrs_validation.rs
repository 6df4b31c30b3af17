//! Validation of the hand-derived density and log-likelihood formulas
//! against statrs reference implementations.

mod common;

use approx::assert_relative_eq;
use common::seeded_sample;
use distfit::estimate::log_likelihood;
use distfit::prelude::*;
use statrs::distribution::{
    Binomial, Continuous, Discrete, Exp, Normal, Poisson, Uniform,
};

#[test]
fn test_normal_log_likelihood_matches_statrs() {
    let params = Params::Normal { mean: 1.5, std_dev: 2.0 };
    let sample = seeded_sample(&params, 200, 101);

    let reference = Normal::new(1.5, 2.0).unwrap();
    let expected: f64 = sample.iter().map(|&x| reference.ln_pdf(x)).sum();
    assert_relative_eq!(log_likelihood(&params, &sample), expected, epsilon = 1e-9);
}

#[test]
fn test_exponential_log_likelihood_matches_statrs() {
    let params = Params::Exponential { lambda: 0.8 };
    let sample = seeded_sample(&params, 200, 103);

    let reference = Exp::new(0.8).unwrap();
    let expected: f64 = sample.iter().map(|&x| reference.ln_pdf(x)).sum();
    assert_relative_eq!(log_likelihood(&params, &sample), expected, epsilon = 1e-9);
}

#[test]
fn test_poisson_log_likelihood_matches_statrs() {
    let params = Params::Poisson { lambda: 4.2 };
    let sample = seeded_sample(&params, 200, 107);

    let reference = Poisson::new(4.2).unwrap();
    let expected: f64 = sample.iter().map(|&x| reference.ln_pmf(x as u64)).sum();
    assert_relative_eq!(log_likelihood(&params, &sample), expected, epsilon = 1e-9);
}

#[test]
fn test_binomial_mass_matches_statrs() {
    let params = Params::Binomial { trials: 20, p: 0.35 };
    let reference = Binomial::new(0.35, 20).unwrap();
    for k in 0..=20u64 {
        assert_relative_eq!(
            params.pdf(k as f64),
            reference.pmf(k),
            epsilon = 1e-10
        );
    }
}

#[test]
fn test_uniform_log_likelihood_matches_statrs() {
    let params = Params::Uniform { min: -2.0, max: 3.0 };
    let sample = seeded_sample(&params, 200, 109);

    let reference = Uniform::new(-2.0, 3.0).unwrap();
    let expected: f64 = sample.iter().map(|&x| reference.ln_pdf(x)).sum();
    assert_relative_eq!(log_likelihood(&params, &sample), expected, epsilon = 1e-9);
}

#[test]
fn test_normal_pdf_curve_matches_statrs() {
    let params = Params::Normal { mean: -0.5, std_dev: 1.7 };
    let reference = Normal::new(-0.5, 1.7).unwrap();
    let mut x = -6.0;
    while x <= 6.0 {
        assert_relative_eq!(params.pdf(x), reference.pdf(x), epsilon = 1e-12);
        x += 0.25;
    }
}
