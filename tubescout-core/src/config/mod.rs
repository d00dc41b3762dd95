//! Configuration structures and constants for the tubescout-core library.
//!
//! This module holds the parameters of a single run: what to search for, how
//! many results to pull, which region to rank in, and where the table goes.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::export::ExportFormat;

pub use builder::CoreConfigBuilder;

// Default constants

/// Keyword used when none is given on the command line.
pub const DEFAULT_KEYWORD: &str = "structure";

/// Number of search results requested by default.
pub const DEFAULT_MAX_RESULTS: u32 = 15;

/// Largest page the search endpoint will return.
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Region the search ranking is restricted to.
pub const DEFAULT_REGION_CODE: &str = "US";

/// Per-request timeout for provider calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV_VAR: &str = "YOUTUBE_API_KEY";

/// Default output path for a keyword: `youtube_analytics_{keyword}.xlsx`.
#[must_use]
pub fn default_output_path(keyword: &str) -> PathBuf {
    PathBuf::from(format!("youtube_analytics_{keyword}.xlsx"))
}

/// Main configuration structure for the tubescout-core library.
///
/// Created by the consumer of the library (e.g., tubescout-cli) and passed to
/// [`crate::collect_records`] and [`crate::export::export_records`].
///
/// # Examples
///
/// ```rust
/// use tubescout_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .api_key("secret")
///     .keyword("rust")
///     .max_results(10)
///     .build();
/// assert_eq!(config.output_path.to_str(), Some("youtube_analytics_rust.xlsx"));
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Provider API credential
    pub api_key: String,

    /// Search query
    pub keyword: String,

    /// Number of search results to request (1-50)
    pub max_results: u32,

    /// ISO 3166-1 alpha-2 region the ranking is restricted to
    pub region_code: String,

    /// Where the table is written
    pub output_path: PathBuf,

    /// Table format; `None` infers it from `output_path`
    pub export_format: Option<ExportFormat>,

    /// HTTP request timeout
    pub request_timeout: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            keyword: DEFAULT_KEYWORD.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            region_code: DEFAULT_REGION_CODE.to_string(),
            output_path: default_output_path(DEFAULT_KEYWORD),
            export_format: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CoreConfig {
    /// Checks the configuration before any network call is made.
    pub fn validate(&self) -> CoreResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(CoreError::MissingApiKey(API_KEY_ENV_VAR));
        }
        if self.keyword.trim().is_empty() {
            return Err(CoreError::Config("keyword must not be empty".to_string()));
        }
        if !(1..=MAX_RESULTS_LIMIT).contains(&self.max_results) {
            return Err(CoreError::Config(format!(
                "max_results must be between 1 and {MAX_RESULTS_LIMIT}, got {}",
                self.max_results
            )));
        }
        if self.region_code.len() != 2 || !self.region_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::Config(format!(
                "region code must be two ASCII letters, got '{}'",
                self.region_code
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(CoreError::Config("request timeout must be non-zero".to_string()));
        }
        Ok(())
    }

    /// The export format, explicit or inferred from the output path.
    #[must_use]
    pub fn resolved_format(&self) -> ExportFormat {
        self.export_format
            .unwrap_or_else(|| ExportFormat::from_path(&self.output_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CoreConfig {
        CoreConfig {
            api_key: "key".to_string(),
            ..CoreConfig::default()
        }
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let config = CoreConfig::default();
        assert_eq!(config.keyword, "structure");
        assert_eq!(config.max_results, 15);
        assert_eq!(config.region_code, "US");
        assert_eq!(config.output_path, PathBuf::from("youtube_analytics_structure.xlsx"));
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = CoreConfig::default();
        assert!(matches!(config.validate(), Err(CoreError::MissingApiKey(_))));
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_max_results_range() {
        let mut config = valid();
        config.max_results = 0;
        assert!(config.validate().is_err());
        config.max_results = 51;
        assert!(config.validate().is_err());
        config.max_results = 50;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_region_code() {
        let mut config = valid();
        config.region_code = "USA".to_string();
        assert!(config.validate().is_err());
        config.region_code = "gb".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolved_format() {
        let mut config = valid();
        assert_eq!(config.resolved_format(), ExportFormat::Xlsx);
        config.output_path = PathBuf::from("out.CSV");
        assert_eq!(config.resolved_format(), ExportFormat::Csv);
        config.export_format = Some(ExportFormat::Xlsx);
        assert_eq!(config.resolved_format(), ExportFormat::Xlsx);
    }
}
