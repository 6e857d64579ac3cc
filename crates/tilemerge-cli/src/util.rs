use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::model::tuned_weights::TunedWeights;

/// Destination of a JSON report: stdout, or a file given with `--output`.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Output::File {
                    writer: BufWriter::new(file),
                    path,
                }
            }
            None => Output::Stdout(io::stdout().lock()),
        };
        output.write_json(value)
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to finish output to {}", self.display_path()))
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

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read tuned weights from a JSON file written by `tune`
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_weights_file<P>(path: P) -> anyhow::Result<TunedWeights>
where
    P: AsRef<Path>,
{
    read_json_file("weights", path)
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use chrono::Utc;
    use tilemerge_solver::move_scorer::ScoreWeights;

    use super::*;

    #[test]
    fn test_saved_weights_read_back() {
        let path = env::temp_dir().join(format!("tilemerge-weights-{}.json", std::process::id()));
        let model = TunedWeights {
            name: "roundtrip".to_owned(),
            trained_at: Utc::now(),
            mean_score: 1234.5,
            weights: ScoreWeights {
                empty_space: 5,
                merge: 175,
            },
        };
        Output::save_json(&model, Some(path.clone())).unwrap();
        let loaded = read_weights_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_missing_file_names_its_kind() {
        let err = read_weights_file("/nonexistent/tilemerge/weights.json").unwrap_err();
        assert!(err.to_string().contains("weights file"), "{err}");
    }
}
