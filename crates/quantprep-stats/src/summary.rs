use serde::Serialize;

use crate::{descriptive::DescriptiveStats, histogram::Histogram, percentiles::Percentiles};

/// Percentile points reported by default: quartiles plus the 5% tails.
pub const DEFAULT_PERCENTILE_POINTS: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

/// Combined summary of a sample.
///
/// This structure provides a complete overview of a sample by combining:
/// - descriptive statistics (mean, median, sample variance, shape measures)
/// - percentile values for quantile analysis
/// - an equal-width histogram for plotting
///
/// # Examples
///
/// ```
/// use quantprep_stats::summary::SampleSummary;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let summary = SampleSummary::new(values, &[25.0, 50.0, 75.0], 5).unwrap();
///
/// assert_eq!(summary.stats.mean, 5.5);
/// assert_eq!(summary.percentiles.get(50.0), Some(5.5));
/// assert_eq!(summary.histogram.total(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    pub stats: DescriptiveStats,
    pub percentiles: Percentiles,
    pub histogram: Histogram,
}

impl SampleSummary {
    /// Summarizes unsorted values.
    ///
    /// Returns `None` if the sample is empty.
    #[must_use]
    pub fn new<I>(values: I, percentile_points: &[f64], hist_num_bins: usize) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points, hist_num_bins)
    }

    /// Summarizes pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(
        sorted_values: &[f64],
        percentile_points: &[f64],
        hist_num_bins: usize,
    ) -> Option<Self> {
        let stats = DescriptiveStats::from_sorted(sorted_values)?;
        let percentiles = Percentiles::from_sorted(sorted_values, percentile_points);
        let histogram = Histogram::new(sorted_values.iter().copied(), hist_num_bins);

        Some(Self {
            stats,
            percentiles,
            histogram,
        })
    }
}
