//! Shared helpers for integration tests.

#![allow(dead_code)]

use distfit::prelude::*;

/// Draw a reproducible sample, panicking on invalid test parameters.
pub fn seeded_sample(params: &Params, n: usize, seed: u32) -> Vec<f64> {
    generate_seeded(params, n, seed).expect("test parameters should be valid")
}

/// Mean of a slice, for cross-checking estimator output.
pub fn mean_of(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}
