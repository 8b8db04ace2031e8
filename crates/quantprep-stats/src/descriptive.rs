//! Descriptive statistics over a finite sample.
//!
//! Every function in this module is total: an empty or too-short sample
//! produces `0.0` instead of an error, so callers can evaluate them inside
//! render loops without guarding the input first.

use serde::Serialize;

use crate::histogram::Histogram;

/// Default number of bins used by [`mode`] when the caller has no preference.
pub const DEFAULT_MODE_BINS: usize = 30;

/// Arithmetic mean of `sample`.
///
/// Returns `0.0` for an empty sample.
///
/// # Examples
///
/// ```
/// # use quantprep_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Sample variance of `sample` with Bessel's correction (divides by `n - 1`).
///
/// Returns `0.0` for samples with fewer than two values.
///
/// # Examples
///
/// ```
/// # use quantprep_stats::descriptive::variance;
/// let v = variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((v - 4.571_428).abs() < 1e-5);
/// assert_eq!(variance(&[5.0]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn variance(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return 0.0;
    }
    let mean = mean(sample);
    let sum_sq = sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    sum_sq / (sample.len() - 1) as f64
}

/// Sample standard deviation, the square root of [`variance`].
#[must_use]
pub fn std_dev(sample: &[f64]) -> f64 {
    variance(sample).sqrt()
}

/// Median of `sample`.
///
/// The sample is copied and sorted; for an even number of values the two
/// middle values are averaged. Returns `0.0` for an empty sample.
///
/// # Examples
///
/// ```
/// # use quantprep_stats::descriptive::median;
/// assert_eq!(median(&[1.0, 5.0, 2.0, 8.0, 7.0]), 5.0);
/// assert_eq!(median(&[1.0, 6.0, 2.0, 8.0, 7.0, 4.0]), 5.0);
/// ```
#[must_use]
pub fn median(sample: &[f64]) -> f64 {
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_of_sorted(&sorted)
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Histogram-based mode for continuous data.
///
/// The range `[min, max]` is split into `bins` equal-width bins and the
/// midpoint of the most populated bin is returned. A constant sample returns
/// its value. Returns `0.0` for an empty sample or when `bins == 0`.
///
/// # Examples
///
/// ```
/// # use quantprep_stats::descriptive::mode;
/// let sample = [1.0, 2.0, 2.1, 2.2, 9.0];
/// let m = mode(&sample, 4);
/// assert!((1.0..=3.0).contains(&m));
/// ```
#[must_use]
pub fn mode(sample: &[f64], bins: usize) -> f64 {
    Histogram::new(sample.iter().copied(), bins)
        .mode_bin()
        .map_or(0.0, |bin| bin.midpoint())
}

/// Adjusted Fisher-Pearson skewness coefficient.
///
/// Returns `0.0` for fewer than three values or a sample without spread.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn skewness(sample: &[f64]) -> f64 {
    if sample.len() < 3 {
        return 0.0;
    }
    let s = std_dev(sample);
    if s == 0.0 {
        return 0.0;
    }
    let n = sample.len() as f64;
    let mean = mean(sample);
    let m3 = sample.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n;
    (m3 / s.powi(3)) * (n * n) / ((n - 1.0) * (n - 2.0))
}

/// Sample excess kurtosis.
///
/// Returns `0.0` for fewer than four values or a sample without spread.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn kurtosis(sample: &[f64]) -> f64 {
    if sample.len() < 4 {
        return 0.0;
    }
    let s = std_dev(sample);
    if s == 0.0 {
        return 0.0;
    }
    let n = sample.len() as f64;
    let mean = mean(sample);
    let m4 = sample.iter().map(|v| (v - mean).powi(4)).sum::<f64>() / n;
    let numerator = (n + 1.0) * (n - 1.0) * (m4 / s.powi(4) - 3.0 + 6.0 / (n + 1.0));
    let denominator = (n - 2.0) * (n - 3.0);
    numerator / denominator
}

/// Descriptive statistics summarizing a sample.
///
/// Dispersion measures use the sample (Bessel-corrected) estimators, matching
/// the free functions in this module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the sample.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median.
    pub median: f64,
    /// The sample variance.
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
    /// The adjusted Fisher-Pearson skewness.
    pub skewness: f64,
    /// The sample excess kurtosis.
    pub kurtosis: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use quantprep_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted by [`f64::total_cmp`].
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let variance = variance(sorted_values);

        Some(Self {
            count: sorted_values.len(),
            min,
            max,
            mean: mean(sorted_values),
            median: median_of_sorted(sorted_values),
            variance,
            std_dev: variance.sqrt(),
            skewness: skewness(sorted_values),
            kurtosis: kurtosis(sorted_values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPREAD: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[-1.0, 0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_variance_uses_bessel_correction() {
        assert!((variance(&SPREAD) - 4.5714).abs() < 1e-4);
        assert_eq!(variance(&[5.0]), 0.0);
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_std_dev() {
        assert!((std_dev(&SPREAD) - 2.138).abs() < 1e-3);
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[42.0]), 0.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[1.0, 5.0, 2.0, 8.0, 7.0]), 5.0);
        assert_eq!(median(&[1.0, 6.0, 2.0, 8.0, 7.0, 4.0]), 5.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let sample = [3.0, 1.0, 2.0];
        let _ = median(&sample);
        assert_eq!(sample, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_mode_picks_densest_bin() {
        let sample = [0.0, 4.9, 5.0, 5.1, 5.2, 10.0];
        let m = mode(&sample, 10);
        assert!((4.0..=6.0).contains(&m), "mode was {m}");
    }

    #[test]
    fn test_mode_degenerate_inputs() {
        assert_eq!(mode(&[], DEFAULT_MODE_BINS), 0.0);
        assert_eq!(mode(&[1.0, 2.0], 0), 0.0);
        assert_eq!(mode(&[7.5, 7.5, 7.5], DEFAULT_MODE_BINS), 7.5);
    }

    #[test]
    fn test_skewness_sign() {
        assert_eq!(skewness(&[1.0, 2.0]), 0.0);
        assert_eq!(skewness(&[3.0, 3.0, 3.0]), 0.0);
        assert!(skewness(&[1.0, 1.0, 1.0, 2.0, 10.0]) > 0.0);
        assert!(skewness(&[-10.0, -2.0, -1.0, -1.0, -1.0]) < 0.0);
        assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).abs() < 1e-12);
    }

    #[test]
    fn test_kurtosis() {
        assert_eq!(kurtosis(&[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(kurtosis(&[2.0, 2.0, 2.0, 2.0]), 0.0);
        // Uniform-like samples are platykurtic.
        let flat = (0..100).map(f64::from).collect::<Vec<_>>();
        assert!(kurtosis(&flat) < 0.0);
        // A single far outlier makes the sample leptokurtic.
        let mut peaked = vec![0.0; 50];
        peaked.push(100.0);
        assert!(kurtosis(&peaked) > 0.0);
    }

    #[test]
    fn test_descriptive_stats() {
        let stats = DescriptiveStats::new(SPREAD).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 4.5);
        assert!((stats.variance - 4.5714).abs() < 1e-4);
        assert!((stats.std_dev - 2.138).abs() < 1e-3);
    }

    #[test]
    fn test_descriptive_stats_empty() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn test_pure_functions_are_repeatable() {
        assert_eq!(variance(&SPREAD).to_bits(), variance(&SPREAD).to_bits());
        assert_eq!(median(&SPREAD).to_bits(), median(&SPREAD).to_bits());
    }
}
