//! Synthetic sample generation from the supported parametric families.

mod sampler;
mod source;

pub use sampler::{generate, generate_seeded, generate_thread};
pub use source::{Lcg, RngSource, UniformSource};
