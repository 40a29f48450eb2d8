use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use pitchscout_analysis::{clean, context::ScoutContext, dataset::RawTable};

use crate::schema::config::ScoutConfig;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
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
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    /// Flushes buffered output.
    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
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

pub fn read_config_file<P>(path: P) -> anyhow::Result<ScoutConfig>
where
    P: AsRef<Path>,
{
    read_json_file("config", path)
}

/// Load a season CSV and build the percentile views over it
///
/// # Errors
///
/// Returns error if the file cannot be read, a required column is missing,
/// no player survives cleaning, or a view cannot be built
pub fn load_context<P>(path: P, config: &ScoutConfig) -> anyhow::Result<ScoutContext>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    tracing::info!(path = %path.display(), "loading season data");
    let raw = RawTable::from_csv_path(path)
        .with_context(|| format!("Failed to load season data: {}", path.display()))?;

    let cleaned = clean::clean(&raw, &config.clean_config())
        .with_context(|| format!("Failed to clean season data: {}", path.display()))?;
    tracing::info!(
        raw = raw.len(),
        cleaned = cleaned.len(),
        "season data cleaned"
    );

    let context =
        ScoutContext::new(cleaned, config.score).context("Failed to build percentile views")?;
    Ok(context)
}

pub fn find_player(context: &ScoutContext, club: &str, player: &str) -> anyhow::Result<usize> {
    context
        .find_player(club, player)
        .ok_or_else(|| anyhow::anyhow!("Player {player} of {club} not found"))
}
