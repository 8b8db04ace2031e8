//! `(x, density)` series for plotting a distribution.

use serde::Serialize;

use crate::distribution::{ChartDomain, Distribution};

/// Densities above this value are capped when a series is clamped for display.
pub const DEFAULT_DENSITY_CEILING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub density: f64,
}

impl Distribution {
    /// Samples the density over [`Distribution::chart_domain`].
    ///
    /// Continuous distributions are evaluated at `points + 1` evenly spaced
    /// positions including both ends of the domain (the F distribution skips
    /// `x = 0`). Discrete distributions get one point per outcome of the
    /// support and ignore `points`.
    ///
    /// The densities are not clamped; see [`clamp_series`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quantprep_dist::Distribution;
    ///
    /// let dist = Distribution::Uniform { min: 0.0, max: 2.0 };
    /// let series = dist.series(4);
    /// assert_eq!(series.len(), 5);
    /// assert_eq!(series[2].x, 1.0);
    /// assert_eq!(series[2].density, 0.5);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn series(&self, points: usize) -> Vec<SeriesPoint> {
        let series: Vec<_> = match self.chart_domain() {
            ChartDomain::Continuous { start, end } => {
                let steps = points.max(1);
                let step = (end - start) / steps as f64;
                (0..=steps)
                    .map(|i| start + step * i as f64)
                    .filter(|x| !(matches!(self, Self::F { .. }) && *x == 0.0))
                    .map(|x| SeriesPoint {
                        x,
                        density: self.density(x),
                    })
                    .collect()
            }
            ChartDomain::Discrete { start, end } => (start..=end)
                .map(|k| SeriesPoint {
                    x: k as f64,
                    density: self.mass(k),
                })
                .collect(),
        };
        log::debug!("built {} point series for {self}", series.len());
        series
    }
}

/// Caps densities for display.
///
/// Every density that is above `ceiling` or not finite (a singularity such as
/// the Beta density at 0 with `alpha < 1`) is replaced by `ceiling`.
///
/// # Examples
///
/// ```
/// use quantprep_dist::series::{SeriesPoint, clamp_series};
///
/// let mut series = vec![
///     SeriesPoint { x: 0.0, density: f64::INFINITY },
///     SeriesPoint { x: 0.5, density: 0.7 },
/// ];
/// clamp_series(&mut series, 5.0);
/// assert_eq!(series[0].density, 5.0);
/// assert_eq!(series[1].density, 0.7);
/// ```
pub fn clamp_series(series: &mut [SeriesPoint], ceiling: f64) {
    for point in series {
        if !point.density.is_finite() || point.density > ceiling {
            point.density = ceiling;
        }
    }
}

/// Running sum of the densities, the CDF of a discrete series.
#[must_use]
pub fn cumulative_series(series: &[SeriesPoint]) -> Vec<SeriesPoint> {
    series
        .iter()
        .scan(0.0, |total, point| {
            *total += point.density;
            Some(SeriesPoint {
                x: point.x,
                density: *total,
            })
        })
        .collect()
}
