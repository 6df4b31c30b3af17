//! # Parameter Estimation
//!
//! Generates a sample with known parameters and recovers them by both
//! maximum likelihood and method of moments, showing where the two
//! estimators agree and where they diverge.
//!
//! Run with: `cargo run --example fit`

use distfit::prelude::*;

fn main() {
    println!("=== Parameter Estimation ===\n");

    moment_matched_families();
    uniform_divergence();
    binomial_with_known_trials();
}

/// Normal, exponential, and poisson: MLE and MoM coincide.
fn moment_matched_families() {
    println!("--- Moment-Matched Families (MLE = MoM) ---\n");

    let cases = [
        ("normal(3, 1.5)", Params::Normal { mean: 3.0, std_dev: 1.5 }),
        ("exponential(2)", Params::Exponential { lambda: 2.0 }),
        ("poisson(6)", Params::Poisson { lambda: 6.0 }),
    ];

    for (label, params) in &cases {
        let sample = generate_seeded(params, 5_000, 7).expect("valid parameters");
        let family = params.family();
        let mle = estimate_mle(&sample, family).expect("non-empty sample");
        let mom = estimate_mom(&sample, family).expect("non-empty sample");

        println!("{label}:");
        for name in family.param_names() {
            println!(
                "  {name:8} MLE = {:>9.4}   MoM = {:>9.4}",
                mle.param(name).unwrap(),
                mom.param(name).unwrap()
            );
        }
        println!("  log-likelihood = {:.2}\n", mle.log_likelihood.unwrap());
    }
}

/// Uniform: the MLE clings to the sample extrema, the MoM infers the
/// bounds from mean and variance.
fn uniform_divergence() {
    println!("--- Uniform: MLE vs MoM ---\n");

    let params = Params::Uniform { min: 2.0, max: 8.0 };
    let sample = generate_seeded(&params, 5_000, 7).expect("valid parameters");

    let mle = estimate_mle(&sample, DistributionFamily::Uniform).expect("non-empty sample");
    let mom = estimate_mom(&sample, DistributionFamily::Uniform).expect("non-empty sample");

    println!("true bounds: [2, 8]");
    println!(
        "MLE bounds:  [{:.4}, {:.4}]  (sample extrema, always inside the truth)",
        mle.param("min").unwrap(),
        mle.param("max").unwrap()
    );
    println!(
        "MoM bounds:  [{:.4}, {:.4}]  (mean ± √(3·var), can overshoot)\n",
        mom.param("min").unwrap(),
        mom.param("max").unwrap()
    );
}

/// Binomial: the MLE needs the trial count as an input; the MoM solves
/// for both parameters from the moments.
fn binomial_with_known_trials() {
    println!("--- Binomial ---\n");

    let params = Params::Binomial { trials: 10, p: 0.3 };
    let sample = generate_seeded(&params, 5_000, 7).expect("valid parameters");

    let mle = estimate_mle_binomial(&sample, 10).expect("non-empty sample");
    let mom = estimate_mom(&sample, DistributionFamily::Binomial).expect("non-empty sample");

    println!("true: n = 10, p = 0.3");
    println!(
        "MLE (n given): n = {:.0}, p = {:.4}",
        mle.param("n").unwrap(),
        mle.param("p").unwrap()
    );
    println!(
        "MoM:           n = {:.2}, p = {:.4}",
        mom.param("n").unwrap(),
        mom.param("p").unwrap()
    );
}
