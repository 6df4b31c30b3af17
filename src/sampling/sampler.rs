//! Variate generation for the supported families.

use super::source::{Lcg, RngSource, UniformSource};
use crate::core::{Params, ValidationError};
use std::f64::consts::TAU;

/// Draw `sample_size` independent variates from the distribution described
/// by `params`, pulling all randomness from `source`.
///
/// Parameters and the sample size are validated before the first draw; a
/// failed validation returns immediately and never yields a partial sample.
///
/// Per-family algorithms:
/// - normal: Box–Muller transform (cosine branch; one variate per uniform
///   pair, the sine companion is discarded)
/// - exponential: inverse transform, `-ln(u) / λ`
/// - binomial: direct simulation, one uniform per trial
/// - poisson: Knuth's inverse-transform search over the cumulative mass
/// - uniform: affine rescale, `min + u·(max − min)`
pub fn generate<S: UniformSource>(
    params: &Params,
    sample_size: usize,
    source: &mut S,
) -> Result<Vec<f64>, ValidationError> {
    params.validate()?;
    if sample_size == 0 {
        return Err(ValidationError::ZeroSampleSize);
    }

    let mut sample = Vec::with_capacity(sample_size);
    for _ in 0..sample_size {
        let x = match *params {
            Params::Normal { mean, std_dev } => draw_normal(mean, std_dev, source),
            Params::Exponential { lambda } => draw_exponential(lambda, source),
            Params::Binomial { trials, p } => draw_binomial(trials, p, source),
            Params::Poisson { lambda } => draw_poisson(lambda, source),
            Params::Uniform { min, max } => draw_uniform(min, max, source),
        };
        sample.push(x);
    }
    Ok(sample)
}

/// [`generate`] with the seeded deterministic generator: identical
/// `(params, sample_size, seed)` always yields an identical sample.
pub fn generate_seeded(
    params: &Params,
    sample_size: usize,
    seed: u32,
) -> Result<Vec<f64>, ValidationError> {
    let mut lcg = Lcg::new(seed);
    generate(params, sample_size, &mut lcg)
}

/// [`generate`] with the thread-local non-deterministic generator.
pub fn generate_thread(params: &Params, sample_size: usize) -> Result<Vec<f64>, ValidationError> {
    let mut source = RngSource(rand::rng());
    generate(params, sample_size, &mut source)
}

/// A uniform draw clamped away from exactly 0, safe to pass to `ln`.
fn positive_uniform<S: UniformSource>(source: &mut S) -> f64 {
    let u = source.next_uniform();
    if u > 0.0 {
        u
    } else {
        f64::EPSILON
    }
}

/// Box–Muller: `z = √(-2 ln u₁) · cos(2π u₂)`.
fn draw_normal<S: UniformSource>(mean: f64, std_dev: f64, source: &mut S) -> f64 {
    let u1 = positive_uniform(source);
    let u2 = source.next_uniform();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    mean + std_dev * z
}

/// Inverse transform: `-ln(u) / λ`.
fn draw_exponential<S: UniformSource>(lambda: f64, source: &mut S) -> f64 {
    -positive_uniform(source).ln() / lambda
}

/// Count successes over `trials` independent Bernoulli(p) draws.
///
/// O(trials) per variate; trial counts in this library's use stay small
/// enough that the direct simulation is the clearest correct choice.
fn draw_binomial<S: UniformSource>(trials: u64, p: f64, source: &mut S) -> f64 {
    let mut successes = 0u64;
    for _ in 0..trials {
        if source.next_uniform() < p {
            successes += 1;
        }
    }
    successes as f64
}

/// Knuth's inverse transform: accumulate `P(X ≤ k)` term by term until it
/// passes a single uniform draw.
fn draw_poisson<S: UniformSource>(lambda: f64, source: &mut S) -> f64 {
    let mut prob = (-lambda).exp();
    let mut cumulative = prob;
    let u = source.next_uniform();
    let mut k = 0u64;
    while u > cumulative {
        k += 1;
        prob *= lambda / k as f64;
        cumulative += prob;
        // Rates large enough to underflow exp(-λ) cannot accumulate any
        // further mass; bail out instead of spinning.
        if prob == 0.0 {
            break;
        }
    }
    k as f64
}

fn draw_uniform<S: UniformSource>(min: f64, max: f64, source: &mut S) -> f64 {
    min + source.next_uniform() * (max - min)
}
