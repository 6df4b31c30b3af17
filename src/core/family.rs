//! Distribution family tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The parametric families supported by the sampler and the estimators.
///
/// The family tag determines the shape of the parameter record
/// ([`Params`](super::Params)) and which closed-form estimator formulas
/// apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionFamily {
    /// Gaussian, parameterized by mean and standard deviation.
    Normal,
    /// Exponential, parameterized by rate λ.
    Exponential,
    /// Binomial, parameterized by trial count n and success probability p.
    Binomial,
    /// Poisson, parameterized by rate λ.
    Poisson,
    /// Continuous uniform on [min, max).
    Uniform,
}

impl DistributionFamily {
    /// Parameter names for this family, in canonical order.
    ///
    /// Every [`EstimationResult`](super::EstimationResult) for the family
    /// carries exactly this key set in its `estimates` map.
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            DistributionFamily::Normal => &["mean", "std_dev"],
            DistributionFamily::Exponential => &["lambda"],
            DistributionFamily::Binomial => &["n", "p"],
            DistributionFamily::Poisson => &["lambda"],
            DistributionFamily::Uniform => &["min", "max"],
        }
    }

    /// Whether variates from this family are integer counts.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            DistributionFamily::Binomial | DistributionFamily::Poisson
        )
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistributionFamily::Normal => "normal",
            DistributionFamily::Exponential => "exponential",
            DistributionFamily::Binomial => "binomial",
            DistributionFamily::Poisson => "poisson",
            DistributionFamily::Uniform => "uniform",
        };
        f.write_str(name)
    }
}
