// tubescout-cli/src/main.rs
//
// Entry point for the `tubescout` binary.
//
// Responsibilities:
// - Loading a .env file so YOUTUBE_API_KEY can live next to the project.
// - Parsing arguments and setting up logging.
// - Registering the terminal reporter with the core library.
// - Running the search and mapping failures to exit code 1.

use clap::Parser;
use std::process;

use tubescout_cli::terminal::{self, TerminalReporter};
use tubescout_cli::{Cli, logging, run_search};
use tubescout_core::progress_reporting;

fn main() {
    // A missing .env file is normal.
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let color = terminal::stdout_supports_color();
    progress_reporting::set_progress_reporter(Box::new(TerminalReporter::new(color)));

    if let Err(e) = run_search(&cli) {
        let stderr_color = supports_color::on(supports_color::Stream::Stderr).is_some();
        eprintln!("{}", terminal::format_error(&e.to_string(), stderr_color));
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tubescout_cli::FormatArg;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["tubescout"]);
        assert_eq!(cli.keyword, "structure");
        assert_eq!(cli.max_results, 15);
        assert_eq!(cli.region, "US");
        assert_eq!(cli.timeout, 30);
        assert!(cli.output.is_none());
        assert!(cli.format.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::parse_from([
            "tubescout",
            "rust",
            "--max-results",
            "50",
            "--output",
            "out/report.csv",
            "--format",
            "csv",
            "--region",
            "DE",
            "--api-key",
            "abc",
            "--timeout",
            "5",
            "-v",
        ]);
        assert_eq!(cli.keyword, "rust");
        assert_eq!(cli.max_results, 50);
        assert_eq!(cli.output, Some(PathBuf::from("out/report.csv")));
        assert_eq!(cli.format, Some(FormatArg::Csv));
        assert_eq!(cli.region, "DE");
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.timeout, 5);
        assert!(cli.verbose);
    }

    #[test]
    fn test_max_results_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["tubescout", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["tubescout", "-n", "51"]).is_err());
    }
}
