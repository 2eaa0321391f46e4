//! Forecast tally statistics.

pub mod stats;

pub use stats::{combine_average, combine_median, mean, median, SummaryStats};
