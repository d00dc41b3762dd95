// ============================================================================
// tubescout-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the core library
//
// Derived-metric failures never reach this type; they resolve to their
// documented defaults inside the metrics module. Everything here aborts a run.
//
// KEY COMPONENTS:
// - CoreError: All fatal error conditions
// - CoreResult: Result alias used across the crate

use thiserror::Error;

/// Fatal errors raised while searching, enriching, or exporting.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Missing API credential: set {0} or pass --api-key")]
    MissingApiKey(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode provider response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Malformed ISO 8601 duration '{0}'")]
    InvalidDuration(String),

    #[error("Spreadsheet write failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for tubescout-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
