//! Mean and median over paired R/D series.
//!
//! Empty input yields zero rather than NaN so an empty section still renders.


/// Arithmetic mean. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median: middle element for odd counts, mean of the two middle elements
/// for even counts. Returns 0.0 for empty input.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Mean and median of the R and D series of one section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryStats {
    pub mean_rep: f64,
    pub mean_dem: f64,
    pub median_rep: f64,
    pub median_dem: f64,
}

impl SummaryStats {
    /// Summarize `(rep, dem)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (rep, dem): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Self {
            mean_rep: mean(&rep),
            mean_dem: mean(&dem),
            median_rep: median(&rep),
            median_dem: median(&dem),
        }
    }

    /// `(rep, dem)` of the mean row.
    pub fn average(&self) -> (f64, f64) {
        (self.mean_rep, self.mean_dem)
    }

    /// `(rep, dem)` of the median row.
    pub fn middle(&self) -> (f64, f64) {
        (self.median_rep, self.median_dem)
    }
}

/// Elementwise mean of the section averages.
pub fn combine_average(sections: &[SummaryStats]) -> (f64, f64) {
    let rep: Vec<f64> = sections.iter().map(|s| s.mean_rep).collect();
    let dem: Vec<f64> = sections.iter().map(|s| s.mean_dem).collect();
    (mean(&rep), mean(&dem))
}

/// Elementwise median of the section medians.
///
/// With exactly two sections this is the average of the two medians.
pub fn combine_median(sections: &[SummaryStats]) -> (f64, f64) {
    let rep: Vec<f64> = sections.iter().map(|s| s.median_rep).collect();
    let dem: Vec<f64> = sections.iter().map(|s| s.median_dem).collect();
    (median(&rep), median(&dem))
}
