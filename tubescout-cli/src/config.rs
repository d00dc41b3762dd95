// tubescout-cli/src/config.rs
//
// Default values for the command-line arguments. These mirror the core
// library defaults so `tubescout` with no arguments reproduces a plain run.

use tubescout_core::config as core_config;

pub const DEFAULT_KEYWORD: &str = core_config::DEFAULT_KEYWORD;
pub const DEFAULT_MAX_RESULTS: u32 = core_config::DEFAULT_MAX_RESULTS;
pub const DEFAULT_REGION_CODE: &str = core_config::DEFAULT_REGION_CODE;
pub const DEFAULT_TIMEOUT_SECS: u64 = core_config::DEFAULT_TIMEOUT_SECS;
