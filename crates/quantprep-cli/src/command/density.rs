use std::path::PathBuf;

use quantprep_dist::Distribution;
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DensityArg {
    /// Distribution as `name:param,...`, e.g. `normal:0,1` or `binomial:10,0.5`
    distribution: Distribution,
    /// Point at which to evaluate the density
    #[arg(allow_negative_numbers = true)]
    x: f64,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DensityReport {
    distribution: String,
    discrete: bool,
    x: f64,
    density: f64,
}

pub(crate) fn run(arg: &DensityArg) -> anyhow::Result<()> {
    let dist = arg.distribution;
    let report = DensityReport {
        distribution: dist.to_string(),
        discrete: dist.is_discrete(),
        x: arg.x,
        density: dist.density(arg.x),
    };
    Output::save_json(&report, arg.output.as_deref())
}
