use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    mem,
    path::Path,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Column holding wind speeds in the Storrs climate records.
pub const DEFAULT_COLUMN: &str = "WindSpeed_mps";

/// Cell contents treated as a missing value, compared ASCII case-insensitively.
const MISSING_MARKERS: [&str; 14] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NaN", "NULL",
];

/// What to do with missing cells in the wind-speed column.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Drop missing cells and summarize the remaining samples
    #[default]
    Skip,
    /// Fail on the first missing cell
    Reject,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("failed to read dataset")]
    Io(io::Error),
    #[display("dataset has no header row")]
    MissingHeader,
    #[display("column '{column}' not found in header")]
    MissingColumn { column: String },
    #[display("line {line}: quoted field is never closed")]
    UnterminatedQuote { line: usize },
    #[display("line {line}: row has no cell for the wind-speed column")]
    ShortRow { line: usize },
    #[display("line {line}: missing wind speed")]
    MissingValue { line: usize },
    #[display("line {line}: '{text}' is not a number")]
    InvalidValue { line: usize, text: String },
    #[display("line {line}: wind speed must be finite and non-negative, got {value}")]
    OutOfRange { line: usize, value: f64 },
}

/// Wind speed samples extracted from a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindSpeedColumn {
    /// Samples in file order, in m/s.
    pub values: Vec<f64>,
    /// Number of missing cells dropped under [`MissingPolicy::Skip`].
    pub skipped: usize,
}

/// Reads the wind-speed column from a CSV file.
pub fn load_wind_speeds<P>(
    path: P,
    column: &str,
    policy: MissingPolicy,
) -> anyhow::Result<WindSpeedColumn>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let speeds = parse_wind_speeds(reader, column, policy)
        .with_context(|| format!("Failed to parse dataset file: {}", path.display()))?;
    Ok(speeds)
}

/// Parses the wind-speed column out of CSV text.
///
/// Fields may be double-quoted; quoted fields can hold commas, line breaks
/// and `""` escapes. The first non-blank record is the header. Line numbers in
/// errors are 1-based, count every physical line, and point at the line a
/// record starts on.
pub fn parse_wind_speeds<R>(
    reader: R,
    column: &str,
    policy: MissingPolicy,
) -> Result<WindSpeedColumn, DatasetError>
where
    R: BufRead,
{
    let mut records = Records::new(reader);

    let (_, header) = records.next().ok_or(DatasetError::MissingHeader)??;
    let column_idx = header
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}'))
        .position(|name| name == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            column: column.to_owned(),
        })?;

    let mut speeds = WindSpeedColumn::default();
    for record in records {
        let (line, cells) = record?;
        let cell = cells
            .get(column_idx)
            .ok_or(DatasetError::ShortRow { line })?;

        if is_missing(cell) {
            match policy {
                MissingPolicy::Skip => {
                    speeds.skipped += 1;
                    continue;
                }
                MissingPolicy::Reject => return Err(DatasetError::MissingValue { line }),
            }
        }

        let value = cell
            .parse::<f64>()
            .map_err(|_| DatasetError::InvalidValue {
                line,
                text: cell.clone(),
            })?;
        if !value.is_finite() || value < 0.0 {
            return Err(DatasetError::OutOfRange { line, value });
        }
        speeds.values.push(value);
    }

    Ok(speeds)
}

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS
        .iter()
        .any(|marker| marker.eq_ignore_ascii_case(cell))
}

/// CSV records as `(starting line, cells)`, skipping blank lines between records.
struct Records<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R> Records<R>
where
    R: BufRead,
{
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Option<Result<String, DatasetError>> {
        let text = self.lines.next()?;
        self.line += 1;
        Some(text.map_err(DatasetError::Io))
    }
}

impl<R> Iterator for Records<R>
where
    R: BufRead,
{
    type Item = Result<(usize, Vec<String>), DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = loop {
            match self.next_line()? {
                Ok(text) if text.trim().is_empty() => {}
                other => break other,
            }
        };
        let start = self.line;
        Some(loop {
            let record = match text {
                Ok(record) => record,
                Err(err) => break Err(err),
            };
            if let Some(cells) = split_record(&record) {
                break Ok((start, cells));
            }
            // The record continues past a line break inside quotes
            text = match self.next_line() {
                Some(Ok(more)) => Ok(format!("{record}\n{more}")),
                Some(Err(err)) => Err(err),
                None => Err(DatasetError::UnterminatedQuote { line: start }),
            };
        })
    }
}

/// Splits one CSV record into trimmed cells.
///
/// Returns `None` if a quoted field is still open at the end of `record`.
fn split_record(record: &str) -> Option<Vec<String>> {
    let mut cells = vec![];
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(mem::take(&mut cell).trim().to_owned()),
            _ => cell.push(c),
        }
    }
    if in_quotes {
        return None;
    }
    cells.push(cell.trim().to_owned());
    Some(cells)
}
