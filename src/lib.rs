pub mod cli;
pub mod config;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod pipeline;

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::{debug, info, warn};

pub use cli::{Cli, ColorMode, cli_parse};
pub use config::{DEFAULT_OUT, FilterConfig, LOG_FILE, load_config};
pub use filter::{FilterError, LogFilter, matches_filters};
pub use parser::{
    ALLOWED_LEVELS, LogFields, LogLevel, LogRecord, ParseError, is_valid_level, parse_line,
    parse_record,
};
pub use pipeline::{FilterSummary, PipelineError, filter_log_file, scan_lines, write_output};

/// How a run ended, short of an unexpected I/O failure
#[derive(Debug)]
pub enum RunOutcome {
    /// The input was scanned and the output file written
    Completed(FilterSummary),
    /// The input file does not exist; nothing was written
    MissingInput(FilterSummary),
    /// `--level` named something other than INFO, WARN or ERROR
    InvalidFilter(FilterError),
}

/// Resolve options from `cli` and filter `input`.
///
/// Missing input and a bad `--level` are reported through [`RunOutcome`]
/// instead of as errors; only config and file I/O failures surface as `Err`.
pub fn execute(cli: &Cli, input: &Path) -> anyhow::Result<RunOutcome> {
    let config = load_config(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(path) = &cli.config {
        info!(path = %path.display(), "Loaded config");
    }

    let options = config.resolve(
        cli.level.as_deref(),
        cli.service.as_deref(),
        cli.out.as_deref(),
    );

    let filter =
        match LogFilter::from_options(options.level.as_deref(), options.service.as_deref()) {
            Ok(filter) => filter,
            Err(err) => return Ok(RunOutcome::InvalidFilter(err)),
        };
    if filter.is_empty() {
        debug!("No filters given, keeping every valid line");
    }
    info!(
        level = ?filter.level(),
        service = ?filter.service(),
        out = %options.out.display(),
        "Resolved filter"
    );

    match filter_log_file(input, &options.out, &filter) {
        Ok(summary) => Ok(RunOutcome::Completed(summary)),
        Err(PipelineError::InputNotFound { path }) => {
            warn!(path = %path.display(), "Input file not found, nothing to filter");
            Ok(RunOutcome::MissingInput(FilterSummary::empty(options.out)))
        }
        Err(err) => Err(err.into()),
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    cli.color.apply();
    logging::init(cli.verbose, cli.quiet);

    match execute(&cli, Path::new(LOG_FILE))? {
        RunOutcome::Completed(summary) | RunOutcome::MissingInput(summary) => {
            println!("{summary}");
        }
        RunOutcome::InvalidFilter(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
        }
    }

    Ok(())
}
