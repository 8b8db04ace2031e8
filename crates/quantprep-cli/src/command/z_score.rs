use std::path::PathBuf;

use quantprep_dist::normal;
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ZScoreArg {
    /// Cumulative probability, strictly between 0 and 1
    #[arg(allow_negative_numbers = true)]
    p: f64,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ZScoreReport {
    p: f64,
    z: f64,
    density: f64,
}

fn z_score(p: f64) -> anyhow::Result<ZScoreReport> {
    let z = normal::inverse_standard_normal_cdf(p);
    anyhow::ensure!(!z.is_nan(), "Probability must be strictly between 0 and 1, got {p}");
    Ok(ZScoreReport {
        p,
        z,
        density: normal::standard_normal_pdf(z),
    })
}

pub(crate) fn run(arg: &ZScoreArg) -> anyhow::Result<()> {
    let report = z_score(arg.p)?;
    Output::save_json(&report, arg.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_score() {
        let report = z_score(0.975).unwrap();
        assert!((report.z - 1.96).abs() < 1e-3);
        assert!(z_score(0.0).is_err());
        assert!(z_score(1.0).is_err());
    }
}
