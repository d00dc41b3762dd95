// ============================================================================
// tubescout-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// User-facing progress goes through the terminal reporter, so the default
// log level only lets warnings and errors through. --verbose raises it to
// debug. RUST_LOG, when set, takes precedence over both.

use log::LevelFilter;
use std::io::Write;

/// Returns the level used when RUST_LOG is not set.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize the logger for tubescout.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .parse_default_env();

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Warn);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
