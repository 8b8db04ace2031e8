use clap::{Parser, Subcommand};

use self::{
    clt::CltArg,
    confidence_interval::{ConfidenceIntervalArg, ZTestArg},
    density::DensityArg,
    describe::DescribeArg,
    matrix::MatrixArg,
    sample::SampleArg,
    series::SeriesArg,
    z_score::ZScoreArg,
};

mod clt;
mod confidence_interval;
mod density;
mod describe;
mod matrix;
mod sample;
mod series;
mod z_score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize a sample: descriptive statistics, percentiles, histogram and mode
    Describe(#[clap(flatten)] DescribeArg),
    /// Evaluate the PDF or PMF of a distribution at a point
    Density(#[clap(flatten)] DensityArg),
    /// Sample a distribution's density over its chart domain
    Series(#[clap(flatten)] SeriesArg),
    /// Draw random values from a distribution
    Sample(#[clap(flatten)] SampleArg),
    /// Confidence interval for a mean with known standard deviation
    ConfidenceInterval(#[clap(flatten)] ConfidenceIntervalArg),
    /// Two-tailed one-sample z-test
    ZTest(#[clap(flatten)] ZTestArg),
    /// Standard normal quantile for a probability
    ZScore(#[clap(flatten)] ZScoreArg),
    /// Sampling distribution of the mean (central limit theorem demo)
    Clt(#[clap(flatten)] CltArg),
    /// Determinant, inverse, eigen decomposition and SVD of a 2x2 matrix
    Matrix(#[clap(flatten)] MatrixArg),
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose);
    log::debug!("running {:?}", args.mode);
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Density(arg) => density::run(&arg)?,
        Mode::Series(arg) => series::run(&arg)?,
        Mode::Sample(arg) => sample::run(&arg)?,
        Mode::ConfidenceInterval(arg) => confidence_interval::run(&arg)?,
        Mode::ZTest(arg) => confidence_interval::run_z_test(&arg)?,
        Mode::ZScore(arg) => z_score::run(&arg)?,
        Mode::Clt(arg) => clt::run(&arg)?,
        Mode::Matrix(arg) => matrix::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory as _;
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let args = CommandArgs::try_parse_from(["quantprep", "-v", "density", "normal:0,1", "-1.5"])
            .unwrap();
        assert!(args.verbose);
        assert!(matches!(args.mode, Mode::Density(_)));

        let args = CommandArgs::try_parse_from([
            "quantprep",
            "confidence-interval",
            "--mean",
            "100",
            "--std-dev",
            "15",
            "--sample-size",
            "30",
        ])
        .unwrap();
        assert!(matches!(args.mode, Mode::ConfidenceInterval(_)));

        let args = CommandArgs::try_parse_from(["quantprep", "matrix", "0,-1,1,0"]).unwrap();
        assert!(matches!(args.mode, Mode::Matrix(_)));

        assert!(CommandArgs::try_parse_from(["quantprep", "density", "zipf:2", "1"]).is_err());
    }
}
