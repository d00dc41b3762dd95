// tubescout-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_KEYWORD, DEFAULT_MAX_RESULTS, DEFAULT_REGION_CODE, DEFAULT_TIMEOUT_SECS};
use tubescout_core::ExportFormat;
use tubescout_core::config::{API_KEY_ENV_VAR, MAX_RESULTS_LIMIT};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Tubescout: keyword video analytics exporter",
    long_about = "Searches YouTube for a keyword, enriches each result with channel \
                  data and engagement metrics, and saves the table as a spreadsheet."
)]
pub struct Cli {
    /// Search keyword
    #[arg(value_name = "KEYWORD", default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Number of search results to enrich (1-50)
    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_RESULTS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_RESULTS_LIMIT as i64)
    )]
    pub max_results: u32,

    /// Output file (defaults to youtube_analytics_<KEYWORD>.xlsx)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (defaults to the output file's extension)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Region the view-count ranking is restricted to
    #[arg(long, value_name = "CODE", default_value = DEFAULT_REGION_CODE)]
    pub region: String,

    /// YouTube Data API key
    #[arg(long, value_name = "KEY", env = API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Xlsx,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xlsx => ExportFormat::Xlsx,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}
