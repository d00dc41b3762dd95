// ============================================================================
// tubescout-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Unset fields fall back to the module
// defaults; the output path follows the keyword unless set explicitly.

use std::path::PathBuf;
use std::time::Duration;

use super::{CoreConfig, default_output_path};
use crate::export::ExportFormat;

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    api_key: Option<String>,
    keyword: String,
    max_results: u32,
    region_code: String,
    output_path: Option<PathBuf>,
    export_format: Option<ExportFormat>,
    request_timeout: Duration,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            api_key: None,
            keyword: super::DEFAULT_KEYWORD.to_string(),
            max_results: super::DEFAULT_MAX_RESULTS,
            region_code: super::DEFAULT_REGION_CODE.to_string(),
            output_path: None,
            export_format: None,
            request_timeout: Duration::from_secs(super::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the provider API credential.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the search keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Sets the number of search results to request.
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the region code used to rank search results.
    pub fn region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = region_code.into();
        self
    }

    /// Sets the output path, overriding the keyword-derived default.
    pub fn output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Forces the export format instead of inferring it from the path.
    pub fn export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = Some(format);
        self
    }

    /// Sets the per-request HTTP timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the CoreConfig. Call [`CoreConfig::validate`] before use.
    pub fn build(self) -> CoreConfig {
        let output_path = self
            .output_path
            .unwrap_or_else(|| default_output_path(&self.keyword));

        CoreConfig {
            api_key: self.api_key.unwrap_or_default(),
            keyword: self.keyword,
            max_results: self.max_results,
            region_code: self.region_code,
            output_path,
            export_format: self.export_format,
            request_timeout: self.request_timeout,
        }
    }
}
