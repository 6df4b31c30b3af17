//! Descriptive statistics with explicit small-sample guards.

mod histogram;
mod stats;

pub use histogram::{histogram, Histogram, HistogramBin};
pub use stats::{
    excess_kurtosis, mean, median, mode, percentile, sample_variance, skewness, std_dev,
    summarize, InsufficientDataError, SummaryStatistics,
};
