use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::filter::LogFilter;
use crate::parser::parse_record;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Cannot find input file '{}'", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counters and kept lines from one pass over the input
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Lines with four fields and a recognized level
    pub valid_scanned: usize,
    /// Formatted records that passed the filter, in input order
    pub lines: Vec<String>,
}

impl ScanOutcome {
    pub fn lines_written(&self) -> usize {
        self.lines.len()
    }
}

/// The three numbers reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub valid_scanned: usize,
    pub lines_written: usize,
    pub output_path: PathBuf,
}

impl FilterSummary {
    /// Summary for a run that found nothing to scan
    pub fn empty(output_path: impl Into<PathBuf>) -> Self {
        Self {
            valid_scanned: 0,
            lines_written: 0,
            output_path: output_path.into(),
        }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Valid lines scanned: {}", self.valid_scanned)?;
        writeln!(f, "Lines written: {}", self.lines_written)?;
        write!(f, "Output file: {}", self.output_path.display())
    }
}

/// Scan every line of `reader`, keeping the records accepted by `filter`.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Lines are decoded lossily,
/// so invalid UTF-8 turns into replacement characters instead of aborting
/// the scan.
pub fn scan_lines<R: BufRead>(mut reader: R, filter: &LogFilter) -> io::Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let chunk = String::from_utf8_lossy(&buf);
        for line in split_line_breaks(&chunk) {
            line_number += 1;
            let record = match parse_record(line, line_number) {
                Ok(record) => record,
                Err(reason) => {
                    debug!(line = line_number, %reason, "Skipping line");
                    continue;
                }
            };

            outcome.valid_scanned += 1;
            if filter.matches(&record) {
                outcome.lines.push(record.to_string());
            }
        }
    }

    Ok(outcome)
}

/// Break a `\n`-terminated chunk on any old-style `\r` line endings inside it
fn split_line_breaks(chunk: &str) -> impl Iterator<Item = &str> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Write one record per line, creating parent directories as needed.
///
/// An empty slice produces an empty file.
pub fn write_output(path: &Path, lines: &[String]) -> Result<(), PipelineError> {
    let write_err = |source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(path, content).map_err(write_err)
}

/// Filter `input` into `output` and report what happened
pub fn filter_log_file(
    input: &Path,
    output: &Path,
    filter: &LogFilter,
) -> Result<FilterSummary, PipelineError> {
    let file = File::open(input).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PipelineError::InputNotFound {
            path: input.to_path_buf(),
        },
        _ => PipelineError::Read {
            path: input.to_path_buf(),
            source,
        },
    })?;

    let outcome =
        scan_lines(BufReader::new(file), filter).map_err(|source| PipelineError::Read {
            path: input.to_path_buf(),
            source,
        })?;

    write_output(output, &outcome.lines)?;

    let summary = FilterSummary {
        valid_scanned: outcome.valid_scanned,
        lines_written: outcome.lines_written(),
        output_path: output.to_path_buf(),
    };
    info!(
        valid = summary.valid_scanned,
        written = summary.lines_written,
        output = %output.display(),
        "Filtering finished"
    );

    Ok(summary)
}
