//! Uniform random sources feeding the sampler.
//!
//! The sampler draws all of its randomness through [`UniformSource`], so a
//! caller chooses between a non-deterministic generator (any [`rand::Rng`]
//! behind [`RngSource`], typically the thread RNG) and the seeded [`Lcg`]
//! for reproducible runs.

use rand::Rng;

/// A stream of uniform draws in `[0, 1)`.
pub trait UniformSource {
    /// Next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// Adapter exposing any `rand` generator as a uniform source.
#[derive(Debug)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Deterministic linear congruential generator for reproducible sampling.
///
/// Uses the Numerical Recipes constants: multiplier 1664525, increment
/// 1013904223, modulus 2³². A fixed seed yields an identical draw sequence
/// on every run, so seed + parameters + sample size fully determine a
/// generated sample. Statistical quality is modest but sufficient for
/// classroom-scale demonstrations; it is not a cryptographic generator.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl UniformSource for Lcg {
    fn next_uniform(&mut self) -> f64 {
        // Modulus 2^32 via wrapping arithmetic.
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        f64::from(self.state) / 4_294_967_296.0
    }
}
