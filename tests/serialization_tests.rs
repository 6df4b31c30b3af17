//! Serialization of the public records a UI layer consumes.

mod common;

use common::seeded_sample;
use distfit::prelude::*;

#[test]
fn test_params_json_shape() {
    let params = Params::Normal { mean: 2.0, std_dev: 0.5 };
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["family"], "normal");
    assert_eq!(json["mean"], 2.0);
    assert_eq!(json["std_dev"], 0.5);
}

#[test]
fn test_estimation_result_roundtrip() {
    let sample = seeded_sample(&Params::Poisson { lambda: 3.0 }, 100, 211);
    let fit = estimate_mle(&sample, DistributionFamily::Poisson).unwrap();

    let json = serde_json::to_string(&fit).unwrap();
    let back: EstimationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(fit, back);
}

#[test]
fn test_summary_roundtrip() {
    let sample = seeded_sample(&Params::Uniform { min: 0.0, max: 1.0 }, 100, 223);
    let summary = summarize(&sample).unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    let back: SummaryStatistics = serde_json::from_str(&json).unwrap();
    assert_eq!(summary, back);
}
