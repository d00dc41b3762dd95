//! Command implementations for the CLI.

/// Search, enrich, and export: the tool's only command.
pub mod search;
