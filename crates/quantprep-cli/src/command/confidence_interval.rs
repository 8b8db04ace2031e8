use std::path::PathBuf;

use anyhow::Context as _;
use quantprep_dist::inference::{
    self, ConfidenceInterval, ConfidenceLevel, ZTest, one_sample_z_test,
};
use serde::Serialize;

use crate::util::{self, Output};

const DEFAULT_DECIMALS: i32 = 3;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ConfidenceIntervalArg {
    /// Sample mean
    #[arg(long, allow_negative_numbers = true, required_unless_present_any = ["values", "input"])]
    mean: Option<f64>,
    /// Population standard deviation
    #[arg(long, allow_negative_numbers = true, required_unless_present_any = ["values", "input"])]
    std_dev: Option<f64>,
    /// Sample size
    #[arg(long, allow_negative_numbers = true, required_unless_present_any = ["values", "input"])]
    sample_size: Option<i64>,
    /// Sample values, comma separated, instead of mean, standard deviation and size
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["mean", "std_dev", "sample_size"]
    )]
    values: Vec<f64>,
    /// JSON file holding an array of sample values
    #[arg(long, conflicts_with_all = ["mean", "std_dev", "sample_size"])]
    input: Option<PathBuf>,
    /// Confidence level: 90, 95, 99 or any other percentage or fraction
    #[arg(long, default_value = "95")]
    level: ConfidenceLevel,
    /// Decimal places in the reported interval
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    decimals: i32,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ConfidenceIntervalReport {
    level: f64,
    #[serde(flatten)]
    interval: ConfidenceInterval,
}

fn compute_interval(arg: &ConfidenceIntervalArg) -> anyhow::Result<ConfidenceInterval> {
    let interval = if let (Some(mean), Some(std_dev), Some(sample_size)) =
        (arg.mean, arg.std_dev, arg.sample_size)
    {
        inference::confidence_interval(mean, std_dev, sample_size, arg.level)?
    } else {
        let sample = util::collect_sample(&arg.values, arg.input.as_deref())?;
        inference::sample_confidence_interval(&sample, arg.level)?
    };
    Ok(interval.rounded(arg.decimals))
}

pub(crate) fn run(arg: &ConfidenceIntervalArg) -> anyhow::Result<()> {
    let interval = compute_interval(arg).context("Failed to compute confidence interval")?;
    let report = ConfidenceIntervalReport {
        level: arg.level.value(),
        interval,
    };
    Output::save_json(&report, arg.output.as_deref())
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ZTestArg {
    /// Observed sample mean
    #[arg(long, allow_negative_numbers = true)]
    sample_mean: f64,
    /// Population mean under the null hypothesis
    #[arg(long, allow_negative_numbers = true)]
    population_mean: f64,
    /// Population standard deviation
    #[arg(long, allow_negative_numbers = true)]
    std_dev: f64,
    /// Sample size
    #[arg(long, allow_negative_numbers = true)]
    sample_size: i64,
    /// Significance level
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ZTestReport {
    #[serde(flatten)]
    test: ZTest,
    alpha: f64,
    reject_null: bool,
}

pub(crate) fn run_z_test(arg: &ZTestArg) -> anyhow::Result<()> {
    let test = one_sample_z_test(
        arg.sample_mean,
        arg.population_mean,
        arg.std_dev,
        arg.sample_size,
    )
    .context("Failed to run z-test")?;
    let report = ZTestReport {
        test,
        alpha: arg.alpha,
        reject_null: test.rejects_at(arg.alpha),
    };
    Output::save_json(&report, arg.output.as_deref())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[clap(flatten)]
        arg: ConfidenceIntervalArg,
    }

    fn parse(args: &[&str]) -> Result<ConfidenceIntervalArg, clap::Error> {
        Cli::try_parse_from(std::iter::once("confidence-interval").chain(args.iter().copied()))
            .map(|cli| cli.arg)
    }

    #[test]
    fn test_default_calculator_values() {
        let arg = parse(&["--mean", "100", "--std-dev", "15", "--sample-size", "30"]).unwrap();
        assert_eq!(arg.level, ConfidenceLevel::NinetyFive);
        let interval = compute_interval(&arg).unwrap();
        assert_eq!((interval.lower, interval.upper), (94.632, 105.368));
    }

    #[test]
    fn test_second_scenario() {
        let arg = parse(&["--mean", "50", "--std-dev", "5", "--sample-size", "100"]).unwrap();
        let interval = compute_interval(&arg).unwrap();
        assert_eq!((interval.lower, interval.upper), (49.02, 50.98));
    }

    #[test]
    fn test_zero_sample_size_reports_error() {
        let arg = parse(&["--mean", "100", "--std-dev", "15", "--sample-size", "0"]).unwrap();
        let err = compute_interval(&arg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sample size must be positive and standard deviation cannot be negative."
        );
    }

    #[test]
    fn test_interval_from_values() {
        let arg = parse(&["--values", "4,5,6", "--level", "99"]).unwrap();
        let interval = compute_interval(&arg).unwrap();
        assert!(interval.contains(5.0));
    }

    #[test]
    fn test_argument_errors() {
        assert!(parse(&["--mean", "100"]).is_err());
        assert!(parse(&["--values", "1,2", "--mean", "3"]).is_err());
        assert!(parse(&["--values", "1,2", "--level", "100"]).is_err());
        assert!(parse(&["--values", "1,2", "--level", "1"]).is_err());
    }
}
