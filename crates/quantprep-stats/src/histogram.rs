use std::ops::Range;

use serde::Serialize;

/// An equal-width histogram of a sample.
///
/// The sample range `[min, max]` is divided into `num_bins` bins of the same
/// width. The maximum value is counted in the last bin, so every finite value
/// of the sample lands in exactly one bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// The bins in ascending order of their ranges.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl HistogramBin {
    /// Width of the bin.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.range.end - self.range.start
    }

    /// Center of the bin.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.range.start + (self.range.end - self.range.start) / 2.0
    }
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// Non-finite values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quantprep_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(values, 5);
    /// assert_eq!(histogram.bins.len(), 5);
    /// assert_eq!(histogram.total(), 10);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from pre-sorted finite values.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        // A sample without spread gets one unit-width bin centred on the value.
        if max - min <= 0.0 {
            return Self {
                bins: vec![HistogramBin {
                    range: (min - 0.5)..(min + 0.5),
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let width = (max - min) / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|idx| {
                // Recompute each boundary from `min` to avoid accumulated error.
                let start = min + idx as f64 * width;
                let end = if idx == num_bins - 1 {
                    max.next_up()
                } else {
                    min + (idx + 1) as f64 * width
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            let idx = (((val - min) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted by the histogram.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// The first bin with the highest count, or `None` for an empty histogram.
    #[must_use]
    pub fn mode_bin(&self) -> Option<&HistogramBin> {
        self.bins
            .iter()
            .fold(None, |best: Option<&HistogramBin>, bin| match best {
                Some(b) if b.count >= bin.count => Some(b),
                _ => Some(bin),
            })
    }

    /// Density of each bin, `count / (total * width)`, in bin order.
    ///
    /// The densities integrate to one, which lets callers overlay a PDF on the
    /// histogram.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn densities(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.bins.len()];
        }
        self.bins
            .iter()
            .map(|bin| bin.count as f64 / (total as f64 * bin.width()))
            .collect()
    }
}
