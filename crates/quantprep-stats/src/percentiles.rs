use serde::Serialize;

/// A requested percentile and the sample value at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentilePoint {
    pub percentile: f64,
    pub value: f64,
}

/// Percentiles of a sample, linearly interpolated between closest ranks.
///
/// # Examples
///
/// ```
/// use quantprep_stats::percentiles::Percentiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(5.5));
/// assert_eq!(percentiles.get(25.0), Some(3.25));
/// assert_eq!(percentiles.interquartile_range(), Some(4.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Percentiles {
    points: Vec<PercentilePoint>,
}

impl Percentiles {
    /// Percentiles of a sample that is already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );
        let points = percentile_points
            .iter()
            .map(|&percentile| PercentilePoint {
                percentile,
                value: compute_percentile(sorted_values, percentile),
            })
            .collect();
        Self { points }
    }

    /// Percentiles of an unsorted sample. The caller's slice is left as is.
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Value at `percentile`, or `None` if it was not requested.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|point| (point.percentile - percentile).abs() < f64::EPSILON)
            .map(|point| point.value)
    }

    /// `P75 - P25`, when both quartiles were requested.
    #[must_use]
    pub fn interquartile_range(&self) -> Option<f64> {
        Some(self.get(75.0)? - self.get(25.0)?)
    }

    #[must_use]
    pub fn points(&self) -> &[PercentilePoint] {
        &self.points
    }
}

/// Percentile `percentile` (0 to 100) of sorted data.
///
/// The value sits at fractional rank `percentile / 100 * (n - 1)` and is
/// interpolated linearly between the two closest ranks, so P50 equals the
/// median. Percentiles outside `[0, 100]` are clamped. Returns `f64::NAN`
/// for empty input.
///
/// # Examples
///
/// ```
/// use quantprep_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 0.0), 1.0);
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(&last) = sorted_values.last() else {
        return f64::NAN;
    };
    let rank = percentile.clamp(0.0, 100.0) / 100.0 * (sorted_values.len() - 1) as f64;
    let below = rank.floor() as usize;
    let Some(&above) = sorted_values.get(below + 1) else {
        return last;
    };
    let lower = sorted_values[below];
    lower + (above - lower) * rank.fract()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptive::median;

    #[test]
    fn test_empty_values() {
        assert!(compute_percentile(&[], 50.0).is_nan());
        let percentiles = Percentiles::new(&[], &[50.0]);
        assert!(percentiles.get(50.0).unwrap().is_nan());
    }

    #[test]
    fn test_extremes_are_min_and_max() {
        let values = [-3.0, 0.5, 2.0, 7.0];
        assert_eq!(compute_percentile(&values, 0.0), -3.0);
        assert_eq!(compute_percentile(&values, 100.0), 7.0);
        assert_eq!(compute_percentile(&values, -10.0), -3.0);
        assert_eq!(compute_percentile(&values, 250.0), 7.0);
    }

    #[test]
    fn test_median_agrees_on_even_and_odd_lengths() {
        let even = [1.0, 2.0, 4.0, 6.0, 7.0, 8.0];
        assert_eq!(compute_percentile(&even, 50.0), 5.0);
        assert_eq!(compute_percentile(&even, 50.0), median(&even));

        let odd = [1.0, 2.0, 5.0, 7.0, 8.0];
        assert_eq!(compute_percentile(&odd, 50.0), median(&odd));
    }

    #[test]
    fn test_single_value() {
        for p in [0.0, 37.5, 50.0, 100.0] {
            assert_eq!(compute_percentile(&[4.2], p), 4.2);
        }
    }

    #[test]
    fn test_interpolates_between_ranks() {
        // rank 0.9 * 4 = 3.6 lies between 40 and 50.
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert!((compute_percentile(&values, 90.0) - 46.0).abs() < 1e-12);
    }

    #[test]
    fn test_lookup_and_order() {
        let percentiles = Percentiles::new(&[3.0, 1.0, 2.0], &[50.0, 0.0]);
        assert_eq!(percentiles.get(90.0), None);
        assert_eq!(percentiles.interquartile_range(), None);
        let points: Vec<_> = percentiles
            .points()
            .iter()
            .map(|p| (p.percentile, p.value))
            .collect();
        assert_eq!(points, vec![(50.0, 2.0), (0.0, 1.0)]);
    }
}
