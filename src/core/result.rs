//! Estimation result records.

use super::family::DistributionFamily;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which estimator produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMethod {
    /// Maximum likelihood.
    Mle,
    /// Method of moments.
    MethodOfMoments,
}

/// A fitted parameter set for one `(sample, family, method)` triple.
///
/// Immutable once produced: refitting with a different family or sample
/// creates a new record. The `estimates` keys are exactly
/// [`DistributionFamily::param_names`] for `family`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// The estimator that produced this record.
    pub method: EstimationMethod,

    /// The family the parameters were fit for.
    pub family: DistributionFamily,

    /// Estimated parameter values, keyed by parameter name.
    pub estimates: BTreeMap<String, f64>,

    /// Log-likelihood of the sample under the fitted parameters.
    ///
    /// Populated by the maximum-likelihood estimator (where it may be
    /// `-inf` for a degenerate fit); `None` for method-of-moments results
    /// and for the binomial family, where it is left undefined.
    pub log_likelihood: Option<f64>,
}

impl EstimationResult {
    /// Build a result from `(name, value)` pairs.
    ///
    /// The pairs must cover the family's parameter names exactly; this is
    /// an internal invariant of the estimators, checked in debug builds.
    pub(crate) fn new(
        method: EstimationMethod,
        family: DistributionFamily,
        pairs: &[(&str, f64)],
        log_likelihood: Option<f64>,
    ) -> Self {
        debug_assert_eq!(
            pairs.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            family.param_names().to_vec(),
        );
        let estimates = pairs
            .iter()
            .map(|&(name, value)| (name.to_string(), value))
            .collect();
        Self {
            method,
            family,
            estimates,
            log_likelihood,
        }
    }

    /// Look up a single estimated parameter by name.
    pub fn param(&self, name: &str) -> Option<f64> {
        self.estimates.get(name).copied()
    }
}
