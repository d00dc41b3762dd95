//! Implementation of the search-and-export run.
//!
//! Builds the core configuration from the parsed arguments, checks that the
//! output location is usable before spending any API quota, then hands off to
//! tubescout-core for the search, enrichment, and export.

use std::path::Path;
use std::time::Duration;

use log::debug;
use tubescout_core::config::{CoreConfig, CoreConfigBuilder};
use tubescout_core::progress_reporting;
use tubescout_core::{CoreError, ExportOutcome, YouTubeClient, collect_records, export_records};

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};

/// Creates and validates the CoreConfig for a run.
pub fn create_core_config(args: &Cli) -> CliResult<CoreConfig> {
    let mut builder = CoreConfigBuilder::new()
        .keyword(args.keyword.trim())
        .max_results(args.max_results)
        .region_code(args.region.to_ascii_uppercase())
        .request_timeout(Duration::from_secs(args.timeout));

    if let Some(api_key) = &args.api_key {
        builder = builder.api_key(api_key.trim());
    }
    if let Some(output) = &args.output {
        builder = builder.output_path(output);
    }
    if let Some(format) = args.format {
        builder = builder.export_format(format.into());
    }

    let config = builder.build();
    config.validate()?;
    Ok(config)
}

/// Fails early when the output file's directory does not exist.
fn check_output_location(path: &Path) -> CliResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(CoreError::Config(format!(
                "output directory '{}' does not exist",
                parent.display()
            )))
            .cli_with_context(|| format!("Cannot write {}", path.display()))
        }
        _ => Ok(()),
    }
}

/// Runs one search → enrich → export pass and reports the outcome.
pub fn run_search(args: &Cli) -> CliResult<ExportOutcome> {
    let config = create_core_config(args)?;
    check_output_location(&config.output_path)?;

    let format = config.resolved_format();
    progress_reporting::section("Tubescout");
    progress_reporting::status("Keyword", &config.keyword);
    progress_reporting::status("Max results", &config.max_results.to_string());
    progress_reporting::status("Region", &config.region_code);
    progress_reporting::status("Output", &format!("{} ({format})", config.output_path.display()));
    debug!("Request timeout: {:?}", config.request_timeout);

    let client = YouTubeClient::from_config(&config)?;
    let records = collect_records(&client, &config)?;

    let outcome = export_records(&records, &config.output_path, format)
        .cli_with_context(|| format!("Exporting to {}", config.output_path.display()))?;

    match &outcome {
        ExportOutcome::Saved { .. } => progress_reporting::success(&outcome.to_string()),
        ExportOutcome::NoData => progress_reporting::warning(&outcome.to_string()),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tubescout_core::ExportFormat;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tubescout").chain(args.iter().copied()))
    }

    #[test]
    fn test_config_from_args() {
        let cli = parse(&["lofi beats", "--api-key", " k ", "-n", "5", "--region", "gb"]);
        let config = create_core_config(&cli).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.keyword, "lofi beats");
        assert_eq!(config.max_results, 5);
        assert_eq!(config.region_code, "GB");
        assert_eq!(config.output_path, PathBuf::from("youtube_analytics_lofi beats.xlsx"));
    }

    #[test]
    fn test_format_flag_overrides_extension() {
        let cli = parse(&["x", "--api-key", "k", "-o", "out.xlsx", "--format", "csv"]);
        let config = create_core_config(&cli).unwrap();
        assert_eq!(config.resolved_format(), ExportFormat::Csv);
    }

    #[test]
    fn test_missing_output_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xlsx");
        let err = check_output_location(&path).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(check_output_location(&dir.path().join("out.xlsx")).is_ok());
        assert!(check_output_location(Path::new("out.xlsx")).is_ok());
    }
}
