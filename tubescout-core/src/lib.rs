//! Core library for keyword video analytics.
//!
//! Searches a video-hosting provider for a keyword, enriches every match with
//! channel data and derived metrics (engagement rate, views per day,
//! readable duration, category label, hashtags), and exports the records as a
//! spreadsheet.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use tubescout_core::config::CoreConfigBuilder;
//! use tubescout_core::{YouTubeClient, collect_records, export_records};
//!
//! let config = CoreConfigBuilder::new()
//!     .api_key("my-api-key")
//!     .keyword("structure")
//!     .build();
//! config.validate().unwrap();
//!
//! let client = YouTubeClient::from_config(&config).unwrap();
//! let records = collect_records(&client, &config).unwrap();
//! let outcome = export_records(&records, &config.output_path, config.resolved_format()).unwrap();
//! println!("{outcome}");
//! ```

pub mod config;
pub mod duration;
pub mod enrichment;
pub mod error;
pub mod export;
pub mod metrics;
pub mod processing;
pub mod progress_reporting;
pub mod provider;
pub mod record;

// Re-exports for public API
pub use config::CoreConfig;
pub use enrichment::Enricher;
pub use error::{CoreError, CoreResult};
pub use export::{ExportFormat, ExportOutcome, export_records};
pub use processing::collect_records;
pub use provider::{VideoProvider, YouTubeClient};
pub use record::{SubscriberCount, VideoRecord};
