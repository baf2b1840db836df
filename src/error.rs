//! Global error handling for projdoc
//!
//! A single error type covers configuration, traversal and output failures.
//! Per-file read failures never surface here: the collector logs and skips
//! them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for projdoc operations
#[derive(Error, Debug)]
pub enum ProjDocError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Rules file parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Repository URL could not be understood
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),

    /// Root of the traversal could not be read
    #[error("Cannot read project root {path}: {source}")]
    RootUnreadable {
        /// Root that failed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Writer errors
    #[error("Writer error: {0}")]
    Writer(String),
}

/// Specialized Result type for projdoc operations
pub type Result<T> = std::result::Result<T, ProjDocError>;

/// Creates a ProjDocError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ProjDocError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Wrap the error as a writer error prefixed with `context`
    fn writer_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn writer_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| ProjDocError::Writer(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: u32) -> Result<u32> {
        ensure!(value < 10, Config, "value {} out of range", value);
        Ok(value)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check(3).unwrap(), 3);
        let err = check(42).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: value 42 out of range");
    }

    #[test]
    fn test_writer_context() {
        let failed: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = failed.writer_context(|| "writing out.md").unwrap_err();
        assert_eq!(err.to_string(), "Writer error: writing out.md: denied");
    }
}
