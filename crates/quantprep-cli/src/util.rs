use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

/// Destination of a command's JSON report
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Write `value` as pretty JSON to `path`, or to stdout when no path is given
    pub fn save_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match path {
            Some(path) => Output::create(path)?,
            None => Output::Stdout(io::stdout().lock()),
        };
        output.write_json(value)
    }

    fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .and_then(|()| writeln!(&mut *self).map_err(serde_json::Error::io))
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        log::debug!("wrote report to {}", self.display_path());
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Read a sample, a JSON array of numbers, from a file
pub fn read_sample_file<P>(path: P) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open sample file: {}", path.display()))?;
    serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse sample JSON file: {}", path.display()))
}

/// Collect a sample from `--values` and, if given, an `--input` file
pub fn collect_sample(values: &[f64], input: Option<&Path>) -> anyhow::Result<Vec<f64>> {
    let mut sample = values.to_vec();
    if let Some(path) = input {
        sample.extend(read_sample_file(path)?);
    }
    anyhow::ensure!(
        !sample.is_empty(),
        "No sample values given; use --values or --input"
    );
    Ok(sample)
}

/// Random number generator, reproducible when a seed is given
pub fn seeded_rng(seed: Option<u64>) -> Pcg64Mcg {
    match seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = seeded_rng(Some(7)).random();
        let b: u64 = seeded_rng(Some(7)).random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_collect_sample_requires_values() {
        assert!(collect_sample(&[], None).is_err());
        assert_eq!(collect_sample(&[1.0, 2.0], None).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_read_sample_file() {
        let path =
            std::env::temp_dir().join(format!("quantprep-sample-{}.json", std::process::id()));
        std::fs::write(&path, "[1.5, 2.5, 3.0]").unwrap();
        let sample = collect_sample(&[0.5], Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(sample, vec![0.5, 1.5, 2.5, 3.0]);

        let missing = std::env::temp_dir().join("quantprep-missing-sample.json");
        let err = read_sample_file(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open sample file"));
    }
}
