//! The catalogue of named distributions.
//!
//! [`Distribution`] ties a distribution's parameters to its density, its
//! closed-form moments, and the domain a chart of it should cover. The density
//! functions in [`crate::continuous`] and [`crate::discrete`] accept any input;
//! the constructors here are for front ends that have to reject bad parameters
//! with a message.

use std::{f64::consts::PI, fmt, str::FromStr};

use serde::Serialize;

use crate::{continuous, discrete, normal, special::gamma};

/// Upper bound on the number of outcomes a discrete chart covers.
pub const MAX_DISCRETE_SUPPORT: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParameterError {
    #[display("{name} must be a finite number")]
    NotFinite { name: &'static str },
    #[display("{name} must be positive")]
    NotPositive { name: &'static str },
    #[display("{name} must be between 0 and 1")]
    NotProbability { name: &'static str },
    #[display("min ({min}) must be less than max ({max})")]
    EmptyRange { min: f64, max: f64 },
    #[display("{name} ({value}) cannot exceed {limit_name} ({limit})")]
    ExceedsLimit {
        name: &'static str,
        value: u64,
        limit_name: &'static str,
        limit: u64,
    },
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseDistributionError {
    #[display("unknown distribution '{name}' (expected one of: {})", Distribution::NAMES.join(", "))]
    UnknownName { name: String },
    #[display("{name} takes {expected} parameter(s), got {found}")]
    WrongArity {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[display("invalid number '{value}'")]
    InvalidNumber { value: String },
    #[display("{_0}")]
    Parameter(ParameterError),
}

impl From<ParameterError> for ParseDistributionError {
    fn from(err: ParameterError) -> Self {
        Self::Parameter(err)
    }
}

/// A named probability distribution together with its parameters.
///
/// Discrete counts (trials, population sizes) are unsigned integers; all other
/// parameters are `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Distribution {
    Normal { mean: f64, std_dev: f64 },
    /// `mu` and `sigma` belong to the underlying normal distribution.
    LogNormal { mu: f64, sigma: f64 },
    Uniform { min: f64, max: f64 },
    Exponential { rate: f64 },
    Gamma { shape: f64, rate: f64 },
    Beta { alpha: f64, beta: f64 },
    ChiSquared { df: f64 },
    StudentsT { df: f64 },
    F { d1: f64, d2: f64 },
    Cauchy { location: f64, scale: f64 },
    Laplace { location: f64, scale: f64 },
    Logistic { location: f64, scale: f64 },
    Weibull { shape: f64, scale: f64 },
    Bernoulli { p: f64 },
    Binomial { trials: u64, p: f64 },
    Poisson { lambda: f64 },
    /// Number of trials until the first success.
    Geometric { p: f64 },
    /// Number of trials until the `successes`-th success.
    NegativeBinomial { successes: u64, p: f64 },
    Hypergeometric {
        population: u64,
        successes: u64,
        draws: u64,
    },
    /// Equally likely outcomes `1..=outcomes`.
    DiscreteUniform { outcomes: u64 },
}

/// The x-range (continuous) or support (discrete) a chart of a distribution covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartDomain {
    Continuous { start: f64, end: f64 },
    Discrete { start: u64, end: u64 },
}

fn finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { name })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive { name })
    }
}

fn positive_count(name: &'static str, value: u64) -> Result<(), ParameterError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive { name })
    }
}

fn probability(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if discrete::is_probability(value) {
        Ok(())
    } else {
        Err(ParameterError::NotProbability { name })
    }
}

fn at_most(
    name: &'static str,
    value: u64,
    limit_name: &'static str,
    limit: u64,
) -> Result<(), ParameterError> {
    if value <= limit {
        Ok(())
    } else {
        Err(ParameterError::ExceedsLimit {
            name,
            value,
            limit_name,
            limit,
        })
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    (value.ceil() as u64).min(MAX_DISCRETE_SUPPORT)
}

impl Distribution {
    /// Names accepted by [`Distribution::from_str`], in catalogue order.
    pub const NAMES: &'static [&'static str] = &[
        "normal",
        "log-normal",
        "uniform",
        "exponential",
        "gamma",
        "beta",
        "chi-squared",
        "t",
        "f",
        "cauchy",
        "laplace",
        "logistic",
        "weibull",
        "bernoulli",
        "binomial",
        "poisson",
        "geometric",
        "negative-binomial",
        "hypergeometric",
        "discrete-uniform",
    ];

    pub fn new_normal(mean: f64, std_dev: f64) -> Result<Self, ParameterError> {
        Self::Normal { mean, std_dev }.validated()
    }

    pub fn new_log_normal(mu: f64, sigma: f64) -> Result<Self, ParameterError> {
        Self::LogNormal { mu, sigma }.validated()
    }

    pub fn new_uniform(min: f64, max: f64) -> Result<Self, ParameterError> {
        Self::Uniform { min, max }.validated()
    }

    pub fn new_exponential(rate: f64) -> Result<Self, ParameterError> {
        Self::Exponential { rate }.validated()
    }

    pub fn new_gamma(shape: f64, rate: f64) -> Result<Self, ParameterError> {
        Self::Gamma { shape, rate }.validated()
    }

    pub fn new_beta(alpha: f64, beta: f64) -> Result<Self, ParameterError> {
        Self::Beta { alpha, beta }.validated()
    }

    pub fn new_chi_squared(df: f64) -> Result<Self, ParameterError> {
        Self::ChiSquared { df }.validated()
    }

    pub fn new_students_t(df: f64) -> Result<Self, ParameterError> {
        Self::StudentsT { df }.validated()
    }

    pub fn new_f(d1: f64, d2: f64) -> Result<Self, ParameterError> {
        Self::F { d1, d2 }.validated()
    }

    pub fn new_cauchy(location: f64, scale: f64) -> Result<Self, ParameterError> {
        Self::Cauchy { location, scale }.validated()
    }

    pub fn new_laplace(location: f64, scale: f64) -> Result<Self, ParameterError> {
        Self::Laplace { location, scale }.validated()
    }

    pub fn new_logistic(location: f64, scale: f64) -> Result<Self, ParameterError> {
        Self::Logistic { location, scale }.validated()
    }

    pub fn new_weibull(shape: f64, scale: f64) -> Result<Self, ParameterError> {
        Self::Weibull { shape, scale }.validated()
    }

    pub fn new_bernoulli(p: f64) -> Result<Self, ParameterError> {
        Self::Bernoulli { p }.validated()
    }

    pub fn new_binomial(trials: u64, p: f64) -> Result<Self, ParameterError> {
        Self::Binomial { trials, p }.validated()
    }

    pub fn new_poisson(lambda: f64) -> Result<Self, ParameterError> {
        Self::Poisson { lambda }.validated()
    }

    pub fn new_geometric(p: f64) -> Result<Self, ParameterError> {
        Self::Geometric { p }.validated()
    }

    pub fn new_negative_binomial(successes: u64, p: f64) -> Result<Self, ParameterError> {
        Self::NegativeBinomial { successes, p }.validated()
    }

    pub fn new_hypergeometric(
        population: u64,
        successes: u64,
        draws: u64,
    ) -> Result<Self, ParameterError> {
        Self::Hypergeometric {
            population,
            successes,
            draws,
        }
        .validated()
    }

    pub fn new_discrete_uniform(outcomes: u64) -> Result<Self, ParameterError> {
        Self::DiscreteUniform { outcomes }.validated()
    }

    fn validated(self) -> Result<Self, ParameterError> {
        self.validate()?;
        Ok(self)
    }

    /// Checks that every parameter lies in its domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use quantprep_dist::{Distribution, ParameterError};
    ///
    /// let dist = Distribution::Normal { mean: 0.0, std_dev: -1.0 };
    /// assert_eq!(
    ///     dist.validate(),
    ///     Err(ParameterError::NotPositive { name: "std_dev" })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            Self::Normal { mean, std_dev } => {
                finite("mean", mean)?;
                positive("std_dev", std_dev)
            }
            Self::LogNormal { mu, sigma } => {
                finite("mu", mu)?;
                positive("sigma", sigma)
            }
            Self::Uniform { min, max } => {
                finite("min", min)?;
                finite("max", max)?;
                if min < max {
                    Ok(())
                } else {
                    Err(ParameterError::EmptyRange { min, max })
                }
            }
            Self::Exponential { rate } => positive("rate", rate),
            Self::Gamma { shape, rate } => {
                positive("shape", shape)?;
                positive("rate", rate)
            }
            Self::Beta { alpha, beta } => {
                positive("alpha", alpha)?;
                positive("beta", beta)
            }
            Self::ChiSquared { df } | Self::StudentsT { df } => positive("df", df),
            Self::F { d1, d2 } => {
                positive("d1", d1)?;
                positive("d2", d2)
            }
            Self::Cauchy { location, scale }
            | Self::Laplace { location, scale }
            | Self::Logistic { location, scale } => {
                finite("location", location)?;
                positive("scale", scale)
            }
            Self::Weibull { shape, scale } => {
                positive("shape", shape)?;
                positive("scale", scale)
            }
            Self::Bernoulli { p } | Self::Binomial { p, .. } => probability("p", p),
            Self::Poisson { lambda } => positive("lambda", lambda),
            Self::Geometric { p } => {
                probability("p", p)?;
                positive("p", p)
            }
            Self::NegativeBinomial { successes, p } => {
                positive_count("successes", successes)?;
                probability("p", p)?;
                positive("p", p)
            }
            Self::Hypergeometric {
                population,
                successes,
                draws,
            } => {
                positive_count("population", population)?;
                at_most("successes", successes, "population", population)?;
                at_most("draws", draws, "population", population)
            }
            Self::DiscreteUniform { outcomes } => positive_count("outcomes", outcomes),
        }
    }

    /// Canonical name, as accepted by [`Distribution::from_str`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "normal",
            Self::LogNormal { .. } => "log-normal",
            Self::Uniform { .. } => "uniform",
            Self::Exponential { .. } => "exponential",
            Self::Gamma { .. } => "gamma",
            Self::Beta { .. } => "beta",
            Self::ChiSquared { .. } => "chi-squared",
            Self::StudentsT { .. } => "t",
            Self::F { .. } => "f",
            Self::Cauchy { .. } => "cauchy",
            Self::Laplace { .. } => "laplace",
            Self::Logistic { .. } => "logistic",
            Self::Weibull { .. } => "weibull",
            Self::Bernoulli { .. } => "bernoulli",
            Self::Binomial { .. } => "binomial",
            Self::Poisson { .. } => "poisson",
            Self::Geometric { .. } => "geometric",
            Self::NegativeBinomial { .. } => "negative-binomial",
            Self::Hypergeometric { .. } => "hypergeometric",
            Self::DiscreteUniform { .. } => "discrete-uniform",
        }
    }

    #[must_use]
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::Bernoulli { .. }
                | Self::Binomial { .. }
                | Self::Poisson { .. }
                | Self::Geometric { .. }
                | Self::NegativeBinomial { .. }
                | Self::Hypergeometric { .. }
                | Self::DiscreteUniform { .. }
        )
    }

    /// The PDF at `x`, or for discrete distributions the PMF.
    ///
    /// A discrete distribution only has mass at non-negative integers; any
    /// other `x` gives `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quantprep_dist::Distribution;
    ///
    /// let coin = Distribution::Binomial { trials: 2, p: 0.5 };
    /// assert_eq!(coin.density(1.0), 0.5);
    /// assert_eq!(coin.density(0.5), 0.0);
    /// ```
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        if self.is_discrete() {
            if !(x.is_finite() && x >= 0.0 && x.fract() == 0.0) {
                return 0.0;
            }
            return self.mass(x as u64);
        }
        match *self {
            Self::Normal { mean, std_dev } => normal::normal_pdf(x, mean, std_dev),
            Self::LogNormal { mu, sigma } => continuous::log_normal_pdf(x, mu, sigma),
            Self::Uniform { min, max } => continuous::uniform_pdf(x, min, max),
            Self::Exponential { rate } => continuous::exponential_pdf(x, rate),
            Self::Gamma { shape, rate } => continuous::gamma_pdf(x, shape, rate),
            Self::Beta { alpha, beta } => continuous::beta_pdf(x, alpha, beta),
            Self::ChiSquared { df } => continuous::chi_squared_pdf(x, df),
            Self::StudentsT { df } => continuous::students_t_pdf(x, df),
            Self::F { d1, d2 } => continuous::f_pdf(x, d1, d2),
            Self::Cauchy { location, scale } => continuous::cauchy_pdf(x, location, scale),
            Self::Laplace { location, scale } => continuous::laplace_pdf(x, location, scale),
            Self::Logistic { location, scale } => continuous::logistic_pdf(x, location, scale),
            Self::Weibull { shape, scale } => continuous::weibull_pdf(x, shape, scale),
            _ => 0.0,
        }
    }

    /// PMF at the integer outcome `k`; `0.0` for continuous distributions.
    #[must_use]
    pub fn mass(&self, k: u64) -> f64 {
        match *self {
            Self::Bernoulli { p } => discrete::bernoulli_pmf(p, k),
            Self::Binomial { trials, p } => discrete::binomial_pmf(trials, p, k),
            Self::Poisson { lambda } => discrete::poisson_pmf(lambda, k),
            Self::Geometric { p } => discrete::geometric_pmf(p, k),
            Self::NegativeBinomial { successes, p } => {
                discrete::negative_binomial_pmf(successes, p, k)
            }
            Self::Hypergeometric {
                population,
                successes,
                draws,
            } => discrete::hypergeometric_pmf(population, successes, draws, k),
            Self::DiscreteUniform { outcomes } => discrete::discrete_uniform_pmf(outcomes, k),
            _ => 0.0,
        }
    }

    /// Expected value.
    ///
    /// `NaN` where the mean does not exist (Cauchy, t with `df <= 1`, F with
    /// `d2 <= 2`).
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } => mean,
            Self::LogNormal { mu, sigma } => (mu + sigma * sigma / 2.0).exp(),
            Self::Uniform { min, max } => (min + max) / 2.0,
            Self::Exponential { rate } => 1.0 / rate,
            Self::Gamma { shape, rate } => shape / rate,
            Self::Beta { alpha, beta } => alpha / (alpha + beta),
            Self::ChiSquared { df } => df,
            Self::StudentsT { df } => {
                if df > 1.0 {
                    0.0
                } else {
                    f64::NAN
                }
            }
            Self::F { d2, .. } => {
                if d2 > 2.0 {
                    d2 / (d2 - 2.0)
                } else {
                    f64::NAN
                }
            }
            Self::Cauchy { .. } => f64::NAN,
            Self::Laplace { location, .. } | Self::Logistic { location, .. } => location,
            Self::Weibull { shape, scale } => scale * gamma(1.0 + 1.0 / shape),
            Self::Bernoulli { p } => p,
            Self::Binomial { trials, p } => trials as f64 * p,
            Self::Poisson { lambda } => lambda,
            Self::Geometric { p } => 1.0 / p,
            Self::NegativeBinomial { successes, p } => successes as f64 / p,
            Self::Hypergeometric {
                population,
                successes,
                draws,
            } => draws as f64 * successes as f64 / population as f64,
            Self::DiscreteUniform { outcomes } => (outcomes as f64 + 1.0) / 2.0,
        }
    }

    /// Variance.
    ///
    /// `f64::INFINITY` where the variance does not exist (Cauchy, t with
    /// `df <= 2`, F with `d2 <= 4`).
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn variance(&self) -> f64 {
        match *self {
            Self::Normal { std_dev, .. } => std_dev * std_dev,
            Self::LogNormal { mu, sigma } => {
                let s2 = sigma * sigma;
                s2.exp_m1() * (2.0 * mu + s2).exp()
            }
            Self::Uniform { min, max } => (max - min).powi(2) / 12.0,
            Self::Exponential { rate } => 1.0 / (rate * rate),
            Self::Gamma { shape, rate } => shape / (rate * rate),
            Self::Beta { alpha, beta } => {
                let sum = alpha + beta;
                alpha * beta / (sum * sum * (sum + 1.0))
            }
            Self::ChiSquared { df } => 2.0 * df,
            Self::StudentsT { df } => {
                if df > 2.0 {
                    df / (df - 2.0)
                } else {
                    f64::INFINITY
                }
            }
            Self::F { d1, d2 } => {
                if d2 > 4.0 {
                    2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0).powi(2) * (d2 - 4.0))
                } else {
                    f64::INFINITY
                }
            }
            Self::Cauchy { .. } => f64::INFINITY,
            Self::Laplace { scale, .. } => 2.0 * scale * scale,
            Self::Logistic { scale, .. } => PI * PI * scale * scale / 3.0,
            Self::Weibull { shape, scale } => {
                let g1 = gamma(1.0 + 1.0 / shape);
                let g2 = gamma(1.0 + 2.0 / shape);
                scale * scale * (g2 - g1 * g1)
            }
            Self::Bernoulli { p } => p * (1.0 - p),
            Self::Binomial { trials, p } => trials as f64 * p * (1.0 - p),
            Self::Poisson { lambda } => lambda,
            Self::Geometric { p } => (1.0 - p) / (p * p),
            Self::NegativeBinomial { successes, p } => successes as f64 * (1.0 - p) / (p * p),
            Self::Hypergeometric {
                population,
                successes,
                draws,
            } => {
                if population < 2 {
                    return 0.0;
                }
                let (big_n, big_k, n) = (population as f64, successes as f64, draws as f64);
                n * (big_k / big_n) * ((big_n - big_k) / big_n) * ((big_n - n) / (big_n - 1.0))
            }
            Self::DiscreteUniform { outcomes } => {
                let n = outcomes as f64;
                (n * n - 1.0) / 12.0
            }
        }
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// The range a chart of this distribution covers.
    ///
    /// Continuous domains are chosen so that the bulk of the mass is visible
    /// (for example `mean ± 4σ` for the normal distribution). Discrete
    /// supports are capped at [`MAX_DISCRETE_SUPPORT`] outcomes.
    ///
    /// # Examples
    ///
    /// ```
    /// use quantprep_dist::{ChartDomain, Distribution};
    ///
    /// let dist = Distribution::Normal { mean: 10.0, std_dev: 2.0 };
    /// assert_eq!(dist.chart_domain(), ChartDomain::Continuous { start: 2.0, end: 18.0 });
    ///
    /// let dist = Distribution::Binomial { trials: 10, p: 0.3 };
    /// assert_eq!(dist.chart_domain(), ChartDomain::Discrete { start: 0, end: 10 });
    /// ```
    #[must_use]
    pub fn chart_domain(&self) -> ChartDomain {
        let span = |start: f64, end: f64| ChartDomain::Continuous { start, end };
        let support = |start: u64, end: u64| ChartDomain::Discrete {
            start: start.min(MAX_DISCRETE_SUPPORT),
            end: end.min(start.saturating_add(MAX_DISCRETE_SUPPORT)),
        };
        let centred =
            |location: f64, width: f64| span(location - width / 2.0, location + width / 2.0);

        match *self {
            Self::Normal { mean, std_dev } => span(mean - 4.0 * std_dev, mean + 4.0 * std_dev),
            Self::LogNormal { mu, sigma } => span(0.0, (mu + 3.0 * sigma).exp()),
            Self::Uniform { min, max } => span(min, max),
            // Up to the point where 1% of the mass remains.
            Self::Exponential { rate } => span(0.0, -(0.01_f64.ln()) / rate),
            Self::Gamma { shape, rate } => span(0.0, shape / rate + 4.0 * shape.sqrt() / rate),
            Self::Beta { .. } => span(0.0, 1.0),
            Self::ChiSquared { df } => span(0.0, f64::max(10.0, df + 4.0 * (2.0 * df).sqrt())),
            Self::StudentsT { .. } => span(-4.0, 4.0),
            Self::F { .. } => {
                let mean = self.mean();
                let mean = if mean.is_finite() { mean } else { 1.0 };
                span(0.0, f64::max(5.0, 3.0 * mean))
            }
            Self::Cauchy { location, scale } | Self::Laplace { location, scale } => {
                centred(location, f64::max(20.0, 15.0 * scale))
            }
            Self::Logistic { location, scale } => centred(location, f64::max(20.0, 18.0 * scale)),
            Self::Weibull { shape, scale } => {
                span(0.0, scale * if shape < 1.0 { 4.0 } else { 2.5 })
            }
            Self::Bernoulli { .. } => support(0, 1),
            Self::Binomial { trials, .. } => support(0, trials),
            Self::Poisson { lambda } => {
                support(0, ceil_count(f64::max(20.0, lambda + 4.0 * lambda.sqrt())))
            }
            Self::Geometric { p } => support(1, ceil_count(f64::max(15.0, 3.0 / p))),
            Self::NegativeBinomial { successes, .. } => {
                let end = ceil_count(f64::max(20.0, self.mean() + 3.0 * self.std_dev()));
                support(successes, end.max(successes))
            }
            Self::Hypergeometric {
                population,
                successes,
                draws,
            } => support(
                draws.saturating_sub(population.saturating_sub(successes)),
                draws.min(successes),
            ),
            Self::DiscreteUniform { outcomes } => support(1, outcomes.max(1)),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name())?;
        match *self {
            Self::Normal { mean: a, std_dev: b }
            | Self::LogNormal { mu: a, sigma: b }
            | Self::Uniform { min: a, max: b }
            | Self::Gamma { shape: a, rate: b }
            | Self::Beta { alpha: a, beta: b }
            | Self::F { d1: a, d2: b }
            | Self::Cauchy { location: a, scale: b }
            | Self::Laplace { location: a, scale: b }
            | Self::Logistic { location: a, scale: b }
            | Self::Weibull { shape: a, scale: b } => write!(f, "{a},{b}"),
            Self::Exponential { rate: a }
            | Self::ChiSquared { df: a }
            | Self::StudentsT { df: a }
            | Self::Bernoulli { p: a }
            | Self::Poisson { lambda: a }
            | Self::Geometric { p: a } => write!(f, "{a}"),
            Self::Binomial { trials: n, p } | Self::NegativeBinomial { successes: n, p } => {
                write!(f, "{n},{p}")
            }
            Self::Hypergeometric {
                population,
                successes,
                draws,
            } => write!(f, "{population},{successes},{draws}"),
            Self::DiscreteUniform { outcomes } => write!(f, "{outcomes}"),
        }
    }
}

/// Comma separated parameters of a `name:p1,p2,...` string.
struct Params<'a> {
    values: Vec<&'a str>,
}

impl<'a> Params<'a> {
    fn new(
        name: &'static str,
        raw: &'a str,
        expected: usize,
    ) -> Result<Self, ParseDistributionError> {
        let values: Vec<&str> = if raw.trim().is_empty() {
            vec![]
        } else {
            raw.split(',').map(str::trim).collect()
        };
        if values.len() != expected {
            return Err(ParseDistributionError::WrongArity {
                name,
                expected,
                found: values.len(),
            });
        }
        Ok(Self { values })
    }

    fn float(&self, index: usize) -> Result<f64, ParseDistributionError> {
        let value = self.values[index];
        value
            .parse()
            .map_err(|_| ParseDistributionError::InvalidNumber {
                value: value.to_owned(),
            })
    }

    fn count(&self, index: usize) -> Result<u64, ParseDistributionError> {
        let value = self.values[index];
        value
            .parse()
            .map_err(|_| ParseDistributionError::InvalidNumber {
                value: value.to_owned(),
            })
    }
}

impl FromStr for Distribution {
    type Err = ParseDistributionError;

    /// Parses `name:p1,p2,...`, for example `normal:0,1` or `binomial:10,0.5`.
    ///
    /// The result is validated, so a successfully parsed distribution always
    /// has parameters in their domain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = s.split_once(':').unwrap_or((s, ""));
        let lower = name.trim().to_ascii_lowercase();
        let Some(&name) = Self::NAMES.iter().find(|n| **n == lower) else {
            return Err(ParseDistributionError::UnknownName {
                name: name.trim().to_owned(),
            });
        };
        let params = |expected| Params::new(name, raw, expected);

        let dist = match name {
            "normal" => {
                let p = params(2)?;
                Self::Normal {
                    mean: p.float(0)?,
                    std_dev: p.float(1)?,
                }
            }
            "log-normal" => {
                let p = params(2)?;
                Self::LogNormal {
                    mu: p.float(0)?,
                    sigma: p.float(1)?,
                }
            }
            "uniform" => {
                let p = params(2)?;
                Self::Uniform {
                    min: p.float(0)?,
                    max: p.float(1)?,
                }
            }
            "exponential" => Self::Exponential {
                rate: params(1)?.float(0)?,
            },
            "gamma" => {
                let p = params(2)?;
                Self::Gamma {
                    shape: p.float(0)?,
                    rate: p.float(1)?,
                }
            }
            "beta" => {
                let p = params(2)?;
                Self::Beta {
                    alpha: p.float(0)?,
                    beta: p.float(1)?,
                }
            }
            "chi-squared" => Self::ChiSquared {
                df: params(1)?.float(0)?,
            },
            "t" => Self::StudentsT {
                df: params(1)?.float(0)?,
            },
            "f" => {
                let p = params(2)?;
                Self::F {
                    d1: p.float(0)?,
                    d2: p.float(1)?,
                }
            }
            "cauchy" => {
                let p = params(2)?;
                Self::Cauchy {
                    location: p.float(0)?,
                    scale: p.float(1)?,
                }
            }
            "laplace" => {
                let p = params(2)?;
                Self::Laplace {
                    location: p.float(0)?,
                    scale: p.float(1)?,
                }
            }
            "logistic" => {
                let p = params(2)?;
                Self::Logistic {
                    location: p.float(0)?,
                    scale: p.float(1)?,
                }
            }
            "weibull" => {
                let p = params(2)?;
                Self::Weibull {
                    shape: p.float(0)?,
                    scale: p.float(1)?,
                }
            }
            "bernoulli" => Self::Bernoulli {
                p: params(1)?.float(0)?,
            },
            "binomial" => {
                let p = params(2)?;
                Self::Binomial {
                    trials: p.count(0)?,
                    p: p.float(1)?,
                }
            }
            "poisson" => Self::Poisson {
                lambda: params(1)?.float(0)?,
            },
            "geometric" => Self::Geometric {
                p: params(1)?.float(0)?,
            },
            "negative-binomial" => {
                let p = params(2)?;
                Self::NegativeBinomial {
                    successes: p.count(0)?,
                    p: p.float(1)?,
                }
            }
            "hypergeometric" => {
                let p = params(3)?;
                Self::Hypergeometric {
                    population: p.count(0)?,
                    successes: p.count(1)?,
                    draws: p.count(2)?,
                }
            }
            _ => Self::DiscreteUniform {
                outcomes: params(1)?.count(0)?,
            },
        };
        Ok(dist.validated()?)
    }
}
