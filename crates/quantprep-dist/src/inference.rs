//! Confidence intervals and z-tests for a mean with known standard deviation.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::normal::{inverse_standard_normal_cdf, standard_normal_cdf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfidenceIntervalError {
    #[display("All inputs must be valid numbers.")]
    InvalidNumber,
    #[display("Sample size must be positive and standard deviation cannot be negative.")]
    InvalidSpread,
    #[display("Confidence level must be strictly between 0 and 1.")]
    InvalidLevel,
    #[display("Confidence level must be at least 50%.")]
    LevelTooLow,
}

/// Lowest level [`ConfidenceLevel::from_str`] accepts. Below it a typo such
/// as `"1"` for 100% would quietly give a 1% interval.
pub const MIN_PARSED_LEVEL: f64 = 0.5;

/// Confidence level of a two-sided interval.
///
/// # Examples
///
/// ```
/// use quantprep_dist::inference::ConfidenceLevel;
///
/// assert_eq!("95".parse::<ConfidenceLevel>(), Ok(ConfidenceLevel::NinetyFive));
/// assert!((ConfidenceLevel::NinetyFive.z_score() - 1.96).abs() < 1e-3);
/// assert!((ConfidenceLevel::NinetyNine.z_score() - 2.576).abs() < 1e-3);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ConfidenceLevel {
    Ninety,
    #[default]
    NinetyFive,
    NinetyNine,
    /// Any level strictly between 0 and 1.
    Other(f64),
}

impl ConfidenceLevel {
    /// The level as a fraction, e.g. `0.95`.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Ninety => 0.90,
            Self::NinetyFive => 0.95,
            Self::NinetyNine => 0.99,
            Self::Other(level) => level,
        }
    }

    /// Two-sided critical value `z` with `P(|Z| <= z) = level`.
    ///
    /// `NaN` if the level is not strictly between 0 and 1.
    #[must_use]
    pub fn z_score(self) -> f64 {
        inverse_standard_normal_cdf(1.0 - (1.0 - self.value()) / 2.0)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value() * 100.0)
    }
}

impl FromStr for ConfidenceLevel {
    type Err = ConfidenceIntervalError;

    /// Accepts a percentage (`"95"`, `"95%"`, `"97.5"`) or a fraction (`"0.95"`).
    ///
    /// Levels below [`MIN_PARSED_LEVEL`] are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, percent) = match s.strip_suffix('%') {
            Some(number) => (number, true),
            None => (s, false),
        };
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| ConfidenceIntervalError::InvalidNumber)?;
        let level = if percent || value >= 1.0 {
            value / 100.0
        } else {
            value
        };
        let level = match level {
            0.90 => Self::Ninety,
            0.95 => Self::NinetyFive,
            0.99 => Self::NinetyNine,
            other => Self::Other(other),
        };
        if level.z_score().is_nan() {
            return Err(ConfidenceIntervalError::InvalidLevel);
        }
        if level.value() < MIN_PARSED_LEVEL {
            return Err(ConfidenceIntervalError::LevelTooLow);
        }
        Ok(level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub margin: f64,
    pub z: f64,
}

impl ConfidenceInterval {
    /// The interval with all fields rounded to `decimals` decimal places.
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        let factor = 10_f64.powi(decimals);
        let round = |v: f64| (v * factor).round() / factor;
        Self {
            lower: round(self.lower),
            upper: round(self.upper),
            margin: round(self.margin),
            z: round(self.z),
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

fn check_inputs(
    values: &[f64],
    std_dev: f64,
    sample_size: i64,
) -> Result<(), ConfidenceIntervalError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ConfidenceIntervalError::InvalidNumber);
    }
    if sample_size <= 0 || std_dev < 0.0 {
        return Err(ConfidenceIntervalError::InvalidSpread);
    }
    Ok(())
}

/// Confidence interval `mean ± z · std_dev / √sample_size` for a population
/// mean.
///
/// # Examples
///
/// ```
/// use quantprep_dist::inference::{ConfidenceLevel, confidence_interval};
///
/// let ci = confidence_interval(50.0, 5.0, 100, ConfidenceLevel::NinetyFive).unwrap();
/// assert_eq!(ci.rounded(3).lower, 49.02);
/// assert_eq!(ci.rounded(3).upper, 50.98);
///
/// let err = confidence_interval(50.0, 5.0, 0, ConfidenceLevel::NinetyFive).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Sample size must be positive and standard deviation cannot be negative."
/// );
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn confidence_interval(
    mean: f64,
    std_dev: f64,
    sample_size: i64,
    level: ConfidenceLevel,
) -> Result<ConfidenceInterval, ConfidenceIntervalError> {
    check_inputs(&[mean, std_dev], std_dev, sample_size)?;
    let z = level.z_score();
    if z.is_nan() {
        return Err(ConfidenceIntervalError::InvalidLevel);
    }
    let margin = z * (std_dev / (sample_size as f64).sqrt());
    let interval = ConfidenceInterval {
        lower: mean - margin,
        upper: mean + margin,
        margin,
        z,
    };
    log::debug!(
        "{level} interval for mean={mean}, std_dev={std_dev}, n={sample_size}: {interval:?}"
    );
    Ok(interval)
}

/// [`confidence_interval`] around the mean of `sample`, using its sample
/// standard deviation.
pub fn sample_confidence_interval(
    sample: &[f64],
    level: ConfidenceLevel,
) -> Result<ConfidenceInterval, ConfidenceIntervalError> {
    let n = i64::try_from(sample.len()).map_err(|_| ConfidenceIntervalError::InvalidSpread)?;
    confidence_interval(
        quantprep_stats::descriptive::mean(sample),
        quantprep_stats::descriptive::std_dev(sample),
        n,
        level,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZTest {
    pub statistic: f64,
    /// Two-tailed p-value.
    pub p_value: f64,
}

impl ZTest {
    /// Whether the null hypothesis is rejected at significance `alpha`.
    #[must_use]
    pub fn rejects_at(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Two-tailed one-sample z-test of `H0: μ = population_mean`.
///
/// Unlike [`confidence_interval`], a zero standard deviation is an
/// [`ConfidenceIntervalError::InvalidSpread`] error since the statistic is
/// undefined.
///
/// # Examples
///
/// ```
/// use quantprep_dist::inference::one_sample_z_test;
///
/// let test = one_sample_z_test(103.0, 100.0, 15.0, 100).unwrap();
/// assert!((test.statistic - 2.0).abs() < 1e-12);
/// assert!((test.p_value - 0.0455).abs() < 1e-3);
/// assert!(test.rejects_at(0.05));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn one_sample_z_test(
    sample_mean: f64,
    population_mean: f64,
    std_dev: f64,
    sample_size: i64,
) -> Result<ZTest, ConfidenceIntervalError> {
    check_inputs(&[sample_mean, population_mean, std_dev], std_dev, sample_size)?;
    if std_dev == 0.0 {
        return Err(ConfidenceIntervalError::InvalidSpread);
    }
    let statistic = (sample_mean - population_mean) / (std_dev / (sample_size as f64).sqrt());
    let p_value = 2.0 * standard_normal_cdf(-statistic.abs());
    Ok(ZTest { statistic, p_value })
}
