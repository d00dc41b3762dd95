// ============================================================================
// tubescout-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Renders core progress events on the terminal: section headers, processing
// steps, key/value status lines, and an indicatif bar over the enrichment
// loop. Colors are applied only when stdout supports them.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tubescout_core::progress_reporting::{OutputLevel, ProgressReporter};

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const PROCESSING_SYMBOL: &str = "»";
    pub const WARNING_SYMBOL: &str = "!";
    pub const ERROR_SYMBOL: &str = "✗";

    pub const SECTION_PREFIX: &str = "===== ";
    pub const SECTION_SUFFIX: &str = " =====";

    pub const STATUS_INDENT: &str = "  ";

    pub const PROGRESS_TEMPLATE: &str = "{prefix} [{bar:30}] {pos}/{len} {wide_msg}";
    pub const PROGRESS_CHARS: &str = "#>.";
}

/// Whether stdout should get ANSI colors.
#[must_use]
pub fn stdout_supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Formats one output line, colored or plain.
#[must_use]
pub fn format_line(level: OutputLevel, text: &str, color: bool) -> String {
    use styling::*;

    match (level, color) {
        (OutputLevel::Section, true) => format!("{SECTION_PREFIX}{text}{SECTION_SUFFIX}").bold().to_string(),
        (OutputLevel::Section, false) => format!("{SECTION_PREFIX}{text}{SECTION_SUFFIX}"),
        (OutputLevel::Processing, true) => format!("{} {text}", PROCESSING_SYMBOL.cyan()),
        (OutputLevel::Processing, false) => format!("{PROCESSING_SYMBOL} {text}"),
        (OutputLevel::Success, true) => format!("{} {}", SUCCESS_SYMBOL.green().bold(), text.green()),
        (OutputLevel::Success, false) => format!("{SUCCESS_SYMBOL} {text}"),
        (OutputLevel::Warning, true) => format!("{} {}", WARNING_SYMBOL.yellow().bold(), text.yellow()),
        (OutputLevel::Warning, false) => format!("{WARNING_SYMBOL} {text}"),
    }
}

/// Formats a `label: value` status line.
#[must_use]
pub fn format_status(label: &str, value: &str, color: bool) -> String {
    if color {
        format!("{}{}: {}", styling::STATUS_INDENT, label.bright_cyan(), value.bold())
    } else {
        format!("{}{label}: {value}", styling::STATUS_INDENT)
    }
}

/// Formats a fatal error for stderr.
#[must_use]
pub fn format_error(message: &str, color: bool) -> String {
    if color {
        format!("{} {}", styling::ERROR_SYMBOL.red().bold(), format!("Error: {message}").red().bold())
    } else {
        format!("{} Error: {message}", styling::ERROR_SYMBOL)
    }
}

/// Progress reporter that writes to the terminal.
pub struct TerminalReporter {
    color: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            bar: Mutex::new(None),
        }
    }

    fn print(&self, line: &str) {
        match self.bar.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(bar) => bar.suspend(|| println!("{line}")),
                None => println!("{line}"),
            },
            Err(_) => println!("{line}"),
        }
    }

    fn new_bar(total: usize) -> ProgressBar {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template(styling::PROGRESS_TEMPLATE) {
            bar.set_style(style.progress_chars(styling::PROGRESS_CHARS));
        }
        bar.set_prefix("Enriching");
        bar
    }
}

impl ProgressReporter for TerminalReporter {
    fn output(&self, level: OutputLevel, text: &str) {
        self.print(&format_line(level, text, self.color));
    }

    fn output_status(&self, label: &str, value: &str) {
        self.print(&format_status(label, value, self.color));
    }

    fn progress(&self, current: usize, total: usize, item: &str) {
        if let Ok(mut guard) = self.bar.lock() {
            let bar = guard.get_or_insert_with(|| Self::new_bar(total));
            bar.set_position(current as u64);
            bar.set_message(item.to_string());
        }
    }

    fn clear_progress(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(bar) = guard.take() {
                bar.finish_and_clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        assert_eq!(format_line(OutputLevel::Section, "Search", false), "===== Search =====");
        assert_eq!(format_line(OutputLevel::Processing, "Searching", false), "» Searching");
        assert_eq!(format_line(OutputLevel::Success, "Saved", false), "✓ Saved");
        assert_eq!(format_line(OutputLevel::Warning, "No data to save.", false), "! No data to save.");
    }

    #[test]
    fn test_plain_status_and_error() {
        assert_eq!(format_status("Matches", "15", false), "  Matches: 15");
        assert_eq!(format_error("boom", false), "✗ Error: boom");
    }

    #[test]
    fn test_colored_lines_keep_text() {
        let line = format_line(OutputLevel::Success, "Saved 3 results", true);
        assert!(line.contains("Saved 3 results"));
        assert!(line.contains('\u{1b}'));
    }
}
