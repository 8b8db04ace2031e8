//! Sample statistics for the QuantPrep learning tools.
//!
//! This crate summarizes finite samples of `f64` values:
//!
//! - **Descriptive statistics**: mean, sample variance, standard deviation, median,
//!   histogram-based mode, skewness, and excess kurtosis
//! - **Percentiles**: percentiles interpolated between closest ranks
//! - **Histograms**: equal-width binning for plotting sampling distributions
//! - **Summaries**: all of the above in one serializable value
//!
//! All free functions are total. An empty or too-short sample yields `0.0`
//! instead of an error, so the functions can be called from any render loop.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`summary`]: Combined statistics, percentiles, and histogram
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use quantprep_stats::descriptive::{mean, median, variance};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&values), 5.0);
//! assert_eq!(median(&values), 4.5);
//! assert!((variance(&values) - 4.5714).abs() < 1e-4);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use quantprep_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(values, 5);
//! assert_eq!(histogram.bins.len(), 5);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod percentiles;
pub mod summary;
