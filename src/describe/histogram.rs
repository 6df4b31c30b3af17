//! Equal-width histogram binning for chart layers.

use super::stats::InsufficientDataError;
use serde::{Deserialize, Serialize};

/// One histogram bin: the half-open interval `[start, end)` and its count.
///
/// The final bin is closed on the right so the sample maximum is counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram over `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub bin_width: f64,
}

/// Bin the sample into `bins` equal-width intervals spanning its range.
///
/// A constant sample (zero range) puts every observation into a single
/// zero-width bin.
///
/// # Panics
///
/// Panics if `bins == 0`.
pub fn histogram(sample: &[f64], bins: usize) -> Result<Histogram, InsufficientDataError> {
    assert!(bins > 0, "histogram needs at least one bin");
    if sample.is_empty() {
        return Err(InsufficientDataError {
            statistic: "histogram",
            needed: 1,
            got: 0,
        });
    }

    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(Histogram {
            bins: vec![HistogramBin {
                start: min,
                end: max,
                count: sample.len(),
            }],
            bin_width: 0.0,
        });
    }

    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &x in sample {
        let idx = (((x - min) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * bin_width,
            end: min + (i + 1) as f64 * bin_width,
            count,
        })
        .collect();

    Ok(Histogram { bins, bin_width })
}
