//! Summary measures over an empirical sample.
//!
//! Every statistic has a minimum sample size below which its formula is
//! undefined (variance n≥2, skewness n≥3, kurtosis n≥4); those cases fail
//! with [`InsufficientDataError`] instead of silently emitting NaN.
//!
//! The variance here is the unbiased n−1 form. The maximum-likelihood
//! estimator in [`estimate`](crate::estimate) uses the biased n form;
//! the two denominators are different on purpose and must stay that way.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A sample too small for the requested statistic.
#[derive(Debug, Error)]
#[error("insufficient data for {statistic}: need at least {needed} observations, got {got}")]
pub struct InsufficientDataError {
    /// The statistic that was requested.
    pub statistic: &'static str,
    /// Minimum sample size for that statistic.
    pub needed: usize,
    /// Actual sample size.
    pub got: usize,
}

/// The full summary record produced by [`summarize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value (2-decimal grouping); `None` when no value
    /// repeats.
    pub mode: Option<f64>,
    /// Unbiased sample variance (n−1 denominator).
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// First quartile (25th percentile, linear interpolation).
    pub q1: f64,
    /// Third quartile (75th percentile, linear interpolation).
    pub q3: f64,
    pub iqr: f64,
    /// Adjusted Fisher–Pearson skewness.
    pub skewness: f64,
    /// Excess kurtosis (normal = 0).
    pub kurtosis: f64,
}

fn require(statistic: &'static str, needed: usize, sample: &[f64]) -> Result<(), InsufficientDataError> {
    if sample.len() < needed {
        Err(InsufficientDataError {
            statistic,
            needed,
            got: sample.len(),
        })
    } else {
        Ok(())
    }
}

/// Arithmetic mean.
pub fn mean(sample: &[f64]) -> Result<f64, InsufficientDataError> {
    require("mean", 1, sample)?;
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Median (50th percentile).
pub fn median(sample: &[f64]) -> Result<f64, InsufficientDataError> {
    percentile(sample, 50.0)
}

/// Percentile by the linear-interpolation method.
///
/// Sorts a copy of the sample and evaluates the fractional index
/// `(p/100)·(n−1)`, interpolating between the neighbouring order
/// statistics when the index is not integral.
///
/// # Panics
///
/// Panics if `p` is outside `[0, 100]`.
pub fn percentile(sample: &[f64], p: f64) -> Result<f64, InsufficientDataError> {
    assert!((0.0..=100.0).contains(&p), "percentile must be in [0, 100], got {p}");
    require("percentile", 1, sample)?;

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let idx = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        Ok(sorted[lo])
    } else {
        let frac = idx - lo as f64;
        Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
    }
}

/// Most frequent value, grouping observations rounded to 2 decimal places.
///
/// Returns `None` when the maximum frequency is 1 (no repeated value means
/// no defined mode); ties are broken toward the smallest value.
pub fn mode(sample: &[f64]) -> Result<Option<f64>, InsufficientDataError> {
    require("mode", 1, sample)?;

    let mut counts: std::collections::BTreeMap<i64, usize> = std::collections::BTreeMap::new();
    for &x in sample {
        let key = (x * 100.0).round() as i64;
        *counts.entry(key).or_insert(0) += 1;
    }

    let (&key, &count) = counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .expect("sample is non-empty");
    if count <= 1 {
        Ok(None)
    } else {
        Ok(Some(key as f64 / 100.0))
    }
}

/// Unbiased sample variance, `Σ(x−mean)² / (n−1)`.
pub fn sample_variance(sample: &[f64]) -> Result<f64, InsufficientDataError> {
    require("variance", 2, sample)?;
    let m = mean(sample)?;
    let ss: f64 = sample.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(ss / (sample.len() - 1) as f64)
}

/// Sample standard deviation, `√variance`.
pub fn std_dev(sample: &[f64]) -> Result<f64, InsufficientDataError> {
    Ok(sample_variance(sample)?.sqrt())
}

/// Adjusted Fisher–Pearson skewness:
/// `n/((n−1)(n−2)) · Σ((x−mean)/s)³`.
pub fn skewness(sample: &[f64]) -> Result<f64, InsufficientDataError> {
    require("skewness", 3, sample)?;
    let n = sample.len() as f64;
    let m = mean(sample)?;
    let s = std_dev(sample)?;
    let cubed: f64 = sample.iter().map(|&x| ((x - m) / s).powi(3)).sum();
    Ok(n / ((n - 1.0) * (n - 2.0)) * cubed)
}

/// Excess kurtosis:
/// `n(n+1)/((n−1)(n−2)(n−3)) · Σ((x−mean)/s)⁴ − 3(n−1)²/((n−2)(n−3))`.
pub fn excess_kurtosis(sample: &[f64]) -> Result<f64, InsufficientDataError> {
    require("kurtosis", 4, sample)?;
    let n = sample.len() as f64;
    let m = mean(sample)?;
    let s = std_dev(sample)?;
    let fourth: f64 = sample.iter().map(|&x| ((x - m) / s).powi(4)).sum();
    let lead = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let correction = 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
    Ok(lead * fourth - correction)
}

/// Compute the full summary record.
///
/// Includes kurtosis, so the sample must have at least 4 observations;
/// use the granular functions for smaller samples.
pub fn summarize(sample: &[f64]) -> Result<SummaryStatistics, InsufficientDataError> {
    require("summary", 4, sample)?;

    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = sample_variance(sample)?;
    let q1 = percentile(sample, 25.0)?;
    let q3 = percentile(sample, 75.0)?;

    Ok(SummaryStatistics {
        n: sample.len(),
        mean: mean(sample)?,
        median: median(sample)?,
        mode: mode(sample)?,
        variance,
        std_dev: variance.sqrt(),
        min,
        max,
        range: max - min,
        q1,
        q3,
        iqr: q3 - q1,
        skewness: skewness(sample)?,
        kurtosis: excess_kurtosis(sample)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_five_point_worked_example() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = summarize(&sample).unwrap();
        assert_relative_eq!(summary.mean, 3.0, epsilon = 1e-12);
        assert_relative_eq!(summary.median, 3.0, epsilon = 1e-12);
        assert_relative_eq!(summary.variance, 2.5, epsilon = 1e-12);
        assert_relative_eq!(summary.std_dev, 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.range, 4.0, epsilon = 1e-12);
        assert_relative_eq!(summary.q1, 2.0, epsilon = 1e-12);
        assert_relative_eq!(summary.q3, 4.0, epsilon = 1e-12);
        assert_relative_eq!(summary.iqr, 2.0, epsilon = 1e-12);
        assert_eq!(summary.mode, None);
    }

    #[test]
    fn test_percentile_interpolates() {
        let sample = [10.0, 20.0, 30.0, 40.0];
        // idx = 0.25 · 3 = 0.75 → 10 + 0.75·(20−10)
        assert_relative_eq!(percentile(&sample, 25.0).unwrap(), 17.5, epsilon = 1e-12);
        assert_relative_eq!(percentile(&sample, 0.0).unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(percentile(&sample, 100.0).unwrap(), 40.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "percentile must be in [0, 100]")]
    fn test_percentile_rejects_out_of_range() {
        let _ = percentile(&[1.0, 2.0], 101.0);
    }

    #[test]
    fn test_mode_grouping_and_absence() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]).unwrap(), Some(2.0));
        // Values matching after 2-decimal rounding count together
        assert_eq!(mode(&[1.001, 1.004, 7.0]).unwrap(), Some(1.0));
        // No repeats: no defined mode
        assert_eq!(mode(&[1.0, 2.0, 3.0]).unwrap(), None);
        // Tie broken toward the smaller value
        assert_eq!(mode(&[1.0, 1.0, 5.0, 5.0]).unwrap(), Some(1.0));
    }

    #[test]
    fn test_insufficient_data_guards() {
        let single = [5.0];
        assert!(sample_variance(&single).is_err());
        assert!(skewness(&single).is_err());
        assert!(excess_kurtosis(&single).is_err());
        assert!(summarize(&single).is_err());

        let err = sample_variance(&single).unwrap_err();
        assert_eq!(err.needed, 2);
        assert_eq!(err.got, 1);

        assert!(skewness(&[1.0, 2.0]).is_err());
        assert!(excess_kurtosis(&[1.0, 2.0, 3.0]).is_err());
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_skewness_symmetric_sample_is_zero() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(skewness(&sample).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_sign() {
        // Long right tail → positive skew
        let right = [1.0, 1.0, 1.0, 2.0, 10.0];
        assert!(skewness(&right).unwrap() > 0.0);
        let left = [-10.0, -2.0, -1.0, -1.0, -1.0];
        assert!(skewness(&left).unwrap() < 0.0);
    }

    #[test]
    fn test_excess_kurtosis_reference_value() {
        // For [1..5]: Σz⁴ = 2·(2/√2.5)⁴ + 2·(1/√2.5)⁴ = 5.44
        // lead = 5·6/(4·3·2) = 1.25, correction = 3·16/(3·2) = 8
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(excess_kurtosis(&sample).unwrap(), 1.25 * 5.44 - 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_median_even_length() {
        assert_relative_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5, epsilon = 1e-12);
    }
}
