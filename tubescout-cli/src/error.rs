// ============================================================================
// tubescout-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING
//
// The CLI reuses the core error type. Failures raised in CLI code get a short
// description of what was being attempted prepended to them.

use tubescout_core::{CoreError, CoreResult};

use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for adding context to errors in the CLI.
pub trait CliErrorContext<T> {
    /// Prefix the error with the context returned by `f`.
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {core_error}", f()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_prefixes_message() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.cli_with_context(|| "Checking output directory").unwrap_err();
        assert_eq!(err.to_string(), "Checking output directory: IO error: gone");
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u8, CoreError> = Ok(7);
        assert_eq!(result.cli_with_context(|| "unused").unwrap(), 7);
    }
}
