//! Distribution sampling, parametric estimation, and descriptive statistics.
//!
//! This library provides the numeric core for exploratory data analysis:
//! synthetic sample generation from five parametric families, closed-form
//! maximum-likelihood and method-of-moments parameter estimation, and
//! summary statistics with explicit small-sample guards.
//!
//! # Example
//!
//! ```rust,ignore
//! use distfit::prelude::*;
//!
//! // Draw a reproducible sample from N(5, 2²)
//! let params = Params::Normal { mean: 5.0, std_dev: 2.0 };
//! let sample = generate_seeded(&params, 1000, 42)?;
//!
//! // Fit the family back by maximum likelihood
//! let fit = estimate_mle(&sample, DistributionFamily::Normal)?;
//! println!("mean = {}", fit.param("mean").unwrap());
//! println!("log-likelihood = {:?}", fit.log_likelihood);
//!
//! // Summarize the data
//! let summary = summarize(&sample)?;
//! println!("skewness = {}", summary.skewness);
//! ```
//!
//! # Design
//!
//! All operations are pure synchronous functions over in-memory slices:
//! no I/O, no shared state, no logging. Invalid inputs fail fast with a
//! typed error before any computation begins; degenerate but well-defined
//! outcomes (a zero-width uniform fit, a sample with no repeated values)
//! are reported as values (`-inf` log-likelihood, `None` mode), not errors.

pub mod core;
pub mod describe;
pub mod estimate;
pub mod sampling;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        DistributionFamily, EstimationMethod, EstimationResult, Params, ValidationError,
    };
    pub use crate::describe::{
        histogram, summarize, Histogram, InsufficientDataError, SummaryStatistics,
    };
    pub use crate::estimate::{estimate_mle, estimate_mle_binomial, estimate_mom, EstimationError};
    pub use crate::sampling::{
        generate, generate_seeded, generate_thread, Lcg, RngSource, UniformSource,
    };
}

pub use crate::core::{
    DistributionFamily, EstimationMethod, EstimationResult, Params, ValidationError,
};
pub use crate::describe::{summarize, InsufficientDataError, SummaryStatistics};
pub use crate::estimate::{estimate_mle, estimate_mle_binomial, estimate_mom, EstimationError};
pub use crate::sampling::{generate, generate_seeded, generate_thread, Lcg, RngSource, UniformSource};
