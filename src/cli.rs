mod color;

use clap::Parser;
pub use color::ColorMode;
use std::path::PathBuf;

/// Filter logs.txt by level and/or service and write the matching lines to a file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Level to keep (INFO, WARN, ERROR). Case-insensitive.
    #[arg(short, long)]
    pub level: Option<String>,

    /// Service to keep (e.g. auth, api, db). Case-sensitive, exact match.
    #[arg(short, long)]
    pub service: Option<String>,

    /// Output file (default: filtered_logs.txt)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// TOML file with default values for --level, --service and --out
    #[arg(short, long, env = "LOG_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// When to colour diagnostics
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
