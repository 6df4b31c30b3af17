//! Core data model: distribution families, parameter records, estimation results.

mod family;
mod params;
mod result;

pub use family::DistributionFamily;
pub use params::{Params, ValidationError};
pub use result::{EstimationMethod, EstimationResult};
