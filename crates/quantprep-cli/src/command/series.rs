use std::path::PathBuf;

use quantprep_dist::{
    ChartDomain, Distribution,
    series::{self, DEFAULT_DENSITY_CEILING, SeriesPoint},
};
use serde::Serialize;

use crate::util::Output;

const DEFAULT_POINTS: usize = 200;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SeriesArg {
    /// Distribution as `name:param,...`, e.g. `gamma:2,1`
    distribution: Distribution,
    /// Number of intervals the chart domain of a continuous distribution is split into
    #[arg(long, default_value_t = DEFAULT_POINTS)]
    points: usize,
    /// Densities above this value (and infinite densities) are capped
    #[arg(long, default_value_t = DEFAULT_DENSITY_CEILING)]
    ceiling: f64,
    /// Report the raw densities without capping
    #[arg(long)]
    no_clamp: bool,
    /// Also report the running total of a discrete distribution's mass
    #[arg(long)]
    cumulative: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SeriesReport {
    distribution: Distribution,
    mean: f64,
    variance: f64,
    domain: ChartDomain,
    series: Vec<SeriesPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cumulative: Option<Vec<SeriesPoint>>,
}

fn build_report(arg: &SeriesArg) -> anyhow::Result<SeriesReport> {
    let dist = arg.distribution;
    anyhow::ensure!(
        !arg.cumulative || dist.is_discrete(),
        "--cumulative is only available for discrete distributions, not {}",
        dist.name()
    );
    let mut points = dist.series(arg.points);
    let cumulative = arg.cumulative.then(|| series::cumulative_series(&points));
    if !arg.no_clamp {
        series::clamp_series(&mut points, arg.ceiling);
    }
    Ok(SeriesReport {
        distribution: dist,
        mean: dist.mean(),
        variance: dist.variance(),
        domain: dist.chart_domain(),
        series: points,
        cumulative,
    })
}

pub(crate) fn run(arg: &SeriesArg) -> anyhow::Result<()> {
    let report = build_report(arg)?;
    log::info!("{} points for {}", report.series.len(), arg.distribution);
    Output::save_json(&report, arg.output.as_deref())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[clap(flatten)]
        arg: SeriesArg,
    }

    fn parse(args: &[&str]) -> SeriesArg {
        Cli::try_parse_from(std::iter::once("series").chain(args.iter().copied()))
            .unwrap()
            .arg
    }

    #[test]
    fn test_defaults() {
        let arg = parse(&["normal:0,1"]);
        assert_eq!(arg.points, DEFAULT_POINTS);
        assert_eq!(arg.ceiling, DEFAULT_DENSITY_CEILING);
        let report = build_report(&arg).unwrap();
        assert_eq!(report.series.len(), DEFAULT_POINTS + 1);
        assert_eq!(report.variance, 1.0);
    }

    #[test]
    fn test_clamping() {
        let report = build_report(&parse(&["beta:0.5,0.5", "--points", "10"])).unwrap();
        assert_eq!(report.series[0].density, DEFAULT_DENSITY_CEILING);

        let report =
            build_report(&parse(&["beta:0.5,0.5", "--points", "10", "--no-clamp"])).unwrap();
        assert_eq!(report.series[0].density, f64::INFINITY);
    }

    #[test]
    fn test_cumulative() {
        let report = build_report(&parse(&["binomial:4,0.5", "--cumulative"])).unwrap();
        let cumulative = report.cumulative.unwrap();
        assert_eq!(cumulative.len(), 5);
        assert!((cumulative[4].density - 1.0).abs() < 1e-12);

        assert!(build_report(&parse(&["normal:0,1", "--cumulative"])).is_err());
    }
}
