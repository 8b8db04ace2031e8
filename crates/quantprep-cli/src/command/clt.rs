use std::path::PathBuf;

use anyhow::Context as _;
use quantprep_dist::{
    Distribution, normal,
    sampling::{self, Population},
    series::SeriesPoint,
};
use quantprep_stats::{
    descriptive::DEFAULT_MODE_BINS,
    summary::{DEFAULT_PERCENTILE_POINTS, SampleSummary},
};
use rand::Rng;
use serde::Serialize;

use crate::util::{self, Output};

const DEFAULT_SAMPLE_SIZE: i64 = 30;
const DEFAULT_NUM_SAMPLES: i64 = 1000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CltArg {
    /// Population to sample from: normal, uniform, log-normal or exponential
    #[arg(long, default_value = "exponential:1")]
    population: Distribution,
    /// Number of draws averaged into each sample mean
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE, allow_negative_numbers = true)]
    sample_size: i64,
    /// Number of sample means to collect
    #[arg(long, default_value_t = DEFAULT_NUM_SAMPLES, allow_negative_numbers = true)]
    num_samples: i64,
    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_MODE_BINS)]
    bins: usize,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CltReport {
    population: Distribution,
    population_mean: f64,
    population_std_dev: f64,
    /// Standard deviation the sample means should have, `σ / √n`
    standard_error: f64,
    summary: SampleSummary,
    /// Normal density with the predicted mean and standard error, at each bin midpoint
    normal_overlay: Vec<SeriesPoint>,
    /// Histogram densities on the same scale as `normal_overlay`
    histogram_densities: Vec<f64>,
}

#[expect(clippy::cast_precision_loss)]
fn simulate<R>(rng: &mut R, arg: &CltArg) -> anyhow::Result<CltReport>
where
    R: Rng + ?Sized,
{
    let population = Population::try_from(arg.population)?;
    let means = sampling::sample_means(rng, &population, arg.sample_size, arg.num_samples);
    let summary = SampleSummary::new(means, &DEFAULT_PERCENTILE_POINTS, arg.bins)
        .with_context(|| {
            format!(
                "No sample means for sample size {} and {} samples of {}",
                arg.sample_size, arg.num_samples, arg.population
            )
        })?;

    let dist = Distribution::from(population);
    let population_mean = dist.mean();
    let population_std_dev = dist.std_dev();
    let standard_error = population_std_dev / (arg.sample_size as f64).sqrt();
    let normal_overlay = summary
        .histogram
        .bins
        .iter()
        .map(|bin| {
            let x = bin.midpoint();
            SeriesPoint {
                x,
                density: normal::normal_pdf(x, population_mean, standard_error),
            }
        })
        .collect();
    let histogram_densities = summary.histogram.densities();

    Ok(CltReport {
        population: dist,
        population_mean,
        population_std_dev,
        standard_error,
        summary,
        normal_overlay,
        histogram_densities,
    })
}

pub(crate) fn run(arg: &CltArg) -> anyhow::Result<()> {
    let mut rng = util::seeded_rng(arg.seed);
    let report = simulate(&mut rng, arg)?;
    log::info!(
        "mean of {} sample means: {} (population mean {})",
        report.summary.stats.count,
        report.summary.stats.mean,
        report.population_mean
    );
    Output::save_json(&report, arg.output.as_deref())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[clap(flatten)]
        arg: CltArg,
    }

    fn parse(args: &[&str]) -> CltArg {
        Cli::try_parse_from(std::iter::once("clt").chain(args.iter().copied()))
            .unwrap()
            .arg
    }

    #[test]
    fn test_sample_means_concentrate_around_population_mean() {
        let arg = parse(&["--seed", "3"]);
        let report = simulate(&mut util::seeded_rng(arg.seed), &arg).unwrap();
        assert_eq!(report.summary.stats.count, 1000);
        assert_eq!(report.population_mean, 1.0);
        assert!((report.standard_error - 1.0 / 30.0_f64.sqrt()).abs() < 1e-12);
        assert!((report.summary.stats.mean - 1.0).abs() < 0.03);
        assert!((report.summary.stats.std_dev - report.standard_error).abs() < 0.02);
        assert_eq!(report.normal_overlay.len(), DEFAULT_MODE_BINS);
        assert_eq!(report.histogram_densities.len(), DEFAULT_MODE_BINS);
    }

    #[test]
    fn test_same_seed_same_report() {
        let arg = parse(&["--population", "uniform:0,1", "--num-samples", "50", "--seed", "9"]);
        let a = simulate(&mut util::seeded_rng(arg.seed), &arg).unwrap();
        let b = simulate(&mut util::seeded_rng(arg.seed), &arg).unwrap();
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_invalid_requests() {
        let mut rng = util::seeded_rng(Some(0));
        assert!(simulate(&mut rng, &parse(&["--population", "poisson:2"])).is_err());
        assert!(simulate(&mut rng, &parse(&["--sample-size", "0"])).is_err());
        assert!(simulate(&mut rng, &parse(&["--num-samples", "-5"])).is_err());
    }
}
