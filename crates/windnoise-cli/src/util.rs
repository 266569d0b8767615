//! Report destinations and JSON file loading

use std::{
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// Where a text or JSON report is written.
///
/// Displays as the report file path, or `stdout`.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Opens `path` as a report file, or standard output when no path is given.
    pub fn new(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::create(path),
            None => Ok(Self::Stdout(io::stdout().lock())),
        }
    }

    /// Creates (or truncates) a report file.
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        log::debug!("Writing report to {}", path.display());
        Ok(Self::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    /// Serializes `report` as pretty-printed JSON followed by a newline.
    pub fn write_json<T>(&mut self, report: T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &report)
            .with_context(|| format!("Failed to write JSON report to {self}"))?;
        writeln!(self).with_context(|| format!("Failed to write JSON report to {self}"))?;
        self.finish()
    }

    /// Writes the text report produced by `render`.
    pub fn write_text<F>(&mut self, render: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        render(self).with_context(|| format!("Failed to write text report to {self}"))?;
        self.finish()
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush report to {self}"))?;
        if let Self::File { path, .. } = self {
            log::info!("Report written to {}", path.display());
        }
        Ok(())
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout(_) => f.write_str("stdout"),
            Self::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(writer) => writer.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}

/// Loads a JSON input file such as a scenario.
///
/// `kind` names the file in error messages.
pub fn load_json_file<T>(kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid {kind} file: {}", path.display()))
}
