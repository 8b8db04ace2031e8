use std::path::PathBuf;

use quantprep_dist::{
    Distribution,
    sampling::{self, Population},
};
use quantprep_stats::descriptive::DescriptiveStats;
use rand::Rng;
use serde::Serialize;

use crate::util::{self, Output};

const DEFAULT_COUNT: i64 = 100;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SampleArg {
    /// Distribution to draw from: normal, log-normal, uniform, exponential, poisson or beta,
    /// e.g. `normal:100,15`
    distribution: Distribution,
    /// Number of values to draw
    #[arg(long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    count: i64,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SampleReport {
    distribution: Distribution,
    stats: Option<DescriptiveStats>,
    values: Vec<f64>,
}

#[expect(clippy::cast_precision_loss)]
fn draw<R>(rng: &mut R, dist: Distribution, count: i64) -> anyhow::Result<Vec<f64>>
where
    R: Rng + ?Sized,
{
    let values = match dist {
        Distribution::Poisson { lambda } => sampling::generate_poisson_data(rng, lambda, count)
            .into_iter()
            .map(|k| k as f64)
            .collect(),
        Distribution::Beta { alpha, beta } => sampling::generate_beta_data(rng, alpha, beta, count),
        other => Population::try_from(other)?.generate(rng, count),
    };
    Ok(values)
}

pub(crate) fn run(arg: &SampleArg) -> anyhow::Result<()> {
    let mut rng = util::seeded_rng(arg.seed);
    let values = draw(&mut rng, arg.distribution, arg.count)?;
    log::info!("drew {} values from {}", values.len(), arg.distribution);
    let report = SampleReport {
        distribution: arg.distribution,
        stats: DescriptiveStats::new(values.iter().copied()),
        values,
    };
    Output::save_json(&report, arg.output.as_deref())
}
