//! Probability distributions for the QuantPrep learning tools.
//!
//! - [`special`]: Gamma, Beta and log-space binomial coefficients
//! - [`normal`]: standard normal PDF, CDF and quantile function
//! - [`discrete`], [`continuous`]: densities of the named distributions
//! - [`distribution`]: the [`Distribution`] catalogue with moments and chart domains
//! - [`series`]: `(x, density)` series for plotting
//! - [`sampling`]: random sample generators and the central limit theorem demo
//! - [`inference`]: confidence intervals and z-tests
//!
//! The density functions never fail. Parameters outside their domain give a
//! density of zero, and the quantile function gives `NaN` outside `(0, 1)`.
//!
//! # Examples
//!
//! ```
//! use quantprep_dist::{Distribution, normal};
//!
//! assert!((normal::standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
//!
//! let dist: Distribution = "binomial:10,0.5".parse().unwrap();
//! assert_eq!(dist.mean(), 5.0);
//! assert_eq!(dist.series(200).len(), 11);
//! ```

pub use self::distribution::{ChartDomain, Distribution, ParameterError, ParseDistributionError};

pub mod continuous;
pub mod discrete;
pub mod distribution;
pub mod inference;
pub mod normal;
pub mod sampling;
pub mod series;
pub mod special;
