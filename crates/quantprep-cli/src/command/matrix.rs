use std::path::PathBuf;

use quantprep_linalg::{
    Mat2, Vec2,
    decompose::{self, Eigen, Svd},
};
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MatrixArg {
    /// Matrix entries in row order, `a,b,c,d` for [[a, b], [c, d]]
    #[arg(allow_hyphen_values = true)]
    matrix: Mat2,
    /// Solve `matrix * v = b` for this right-hand side `x,y`
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true, value_parser = parse_vector)]
    solve: Option<Vec2>,
    /// Apply the matrix to this vector `x,y`
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true, value_parser = parse_vector)]
    apply: Option<Vec2>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_vector(s: &str) -> Result<Vec2, String> {
    let entries = s
        .split(',')
        .map(|raw| raw.trim().parse::<f64>().map_err(|e| format!("'{raw}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match entries.as_slice() {
        &[x, y] => Ok(Vec2::new(x, y)),
        _ => Err(format!("expected 2 entries x,y, found {}", entries.len())),
    }
}

#[derive(Debug, Serialize)]
struct MatrixReport {
    matrix: Mat2,
    determinant: f64,
    trace: f64,
    transpose: Mat2,
    inverse: Option<Mat2>,
    eigen: Eigen,
    svd: Svd,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Vec2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<SystemReport>,
}

#[derive(Debug, Serialize)]
struct SystemReport {
    rhs: Vec2,
    /// `None` when the matrix is singular.
    solution: Option<Vec2>,
}

fn analyze(arg: &MatrixArg) -> MatrixReport {
    let m = arg.matrix;
    let system = arg.solve.map(|rhs| {
        let solution = decompose::solve(m, rhs);
        if solution.is_none() {
            log::warn!("matrix {m} is singular; the system has no unique solution");
        }
        SystemReport { rhs, solution }
    });
    MatrixReport {
        matrix: m,
        determinant: m.determinant(),
        trace: m.trace(),
        transpose: m.transpose(),
        inverse: m.inverse(),
        eigen: decompose::eigen(m),
        svd: decompose::svd(m),
        image: arg.apply.map(|v| m * v),
        system,
    }
}

pub(crate) fn run(arg: &MatrixArg) -> anyhow::Result<()> {
    let report = analyze(arg);
    Output::save_json(&report, arg.output.as_deref())
}
