//! Progress reporting API
//!
//! Lets the core library report what it is doing without depending on any
//! terminal formatting. The CLI registers a reporter at startup; without one,
//! every call here is a no-op.

use std::sync::Mutex;

/// Represents different levels of output for structured reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLevel {
    /// Major workflow phases
    Section,
    /// Processing steps
    Processing,
    /// Success messages
    Success,
    /// Warning messages
    Warning,
}

/// Trait for rendering core progress in a front end.
pub trait ProgressReporter: Send + Sync {
    /// Output a message at a specific level
    fn output(&self, level: OutputLevel, text: &str);

    /// Output a key-value status pair
    fn output_status(&self, label: &str, value: &str);

    /// Report `current` of `total` items done, with the item just finished
    fn progress(&self, current: usize, total: usize, item: &str);

    /// Clear any active progress display
    fn clear_progress(&self);
}

/// Global progress reporter instance
static PROGRESS_REPORTER: std::sync::LazyLock<Mutex<Option<Box<dyn ProgressReporter>>>> =
    std::sync::LazyLock::new(|| Mutex::new(None));

/// Set the global progress reporter
pub fn set_progress_reporter(reporter: Box<dyn ProgressReporter>) {
    if let Ok(mut r) = PROGRESS_REPORTER.lock() {
        *r = Some(reporter);
    }
}

/// Execute a function with the progress reporter if available
#[inline]
pub fn with_reporter<F>(f: F)
where
    F: FnOnce(&dyn ProgressReporter),
{
    if let Ok(guard) = PROGRESS_REPORTER.lock() {
        if let Some(reporter) = guard.as_ref() {
            f(reporter.as_ref());
        }
    }
}

/// Output a section header
pub fn section(title: &str) {
    with_reporter(|r| r.output(OutputLevel::Section, title));
}

/// Output a processing step
pub fn processing(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Processing, message));
}

/// Output a status line
pub fn status(label: &str, value: &str) {
    with_reporter(|r| r.output_status(label, value));
}

/// Output a success message
pub fn success(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Success, message));
}

/// Output a warning message
pub fn warning(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Warning, message));
}

/// Advance the progress display
pub fn progress(current: usize, total: usize, item: &str) {
    with_reporter(|r| r.progress(current, total, item));
}

/// Clear the progress display
pub fn clear_progress() {
    with_reporter(|r| r.clear_progress());
}
