use std::path::PathBuf;

use quantprep_stats::{
    descriptive::{self, DEFAULT_MODE_BINS},
    summary::{DEFAULT_PERCENTILE_POINTS, SampleSummary},
};
use serde::Serialize;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// Sample values, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<f64>,
    /// JSON file holding an array of sample values
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_MODE_BINS)]
    bins: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DescribeReport {
    #[serde(flatten)]
    summary: SampleSummary,
    mode: f64,
}

fn describe(sample: &[f64], bins: usize) -> anyhow::Result<DescribeReport> {
    let summary = SampleSummary::new(sample.iter().copied(), &DEFAULT_PERCENTILE_POINTS, bins)
        .ok_or_else(|| anyhow::anyhow!("Cannot describe an empty sample"))?;
    Ok(DescribeReport {
        summary,
        mode: descriptive::mode(sample, bins),
    })
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let sample = util::collect_sample(&arg.values, arg.input.as_deref())?;
    log::info!("describing {} values", sample.len());
    let report = describe(&sample, arg.bins)?;
    Output::save_json(&report, arg.output.as_deref())
}
