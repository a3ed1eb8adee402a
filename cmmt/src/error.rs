//! Error handling module for the cmmt CLI.
//!
//! Lexical problems are diagnostics, not errors; they only surface here once
//! a command has finished and needs a failing exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the cmmt CLI application.
#[derive(Error, Debug)]
pub enum CmmtError {
    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadSource {
        /// The file that was requested
        path: PathBuf,
        /// The underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Scanning finished but reported errors.
    #[error("{file}: {errors} lexical error(s)")]
    Lexical {
        /// Display name of the scanned file
        file: String,
        /// Number of error-level diagnostics
        errors: usize,
    },

    /// At least one file in a `check` run failed.
    #[error("{failed} of {total} file(s) failed the check")]
    CheckFailed {
        /// Files with errors or read failures
        failed: usize,
        /// Files requested
        total: usize,
    },

    /// The worker pool for parallel checking could not be started.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CmmtError.
pub type Result<T> = std::result::Result<T, CmmtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CmmtError::Config("escape set must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: escape set must not be empty"
        );
    }

    #[test]
    fn test_read_source_display() {
        let err = CmmtError::ReadSource {
            path: PathBuf::from("missing.cmm"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read missing.cmm: not found");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_lexical_error_display() {
        let err = CmmtError::Lexical {
            file: "prog.cmm".to_string(),
            errors: 3,
        };
        assert_eq!(err.to_string(), "prog.cmm: 3 lexical error(s)");
    }

    #[test]
    fn test_check_failed_display() {
        let err = CmmtError::CheckFailed { failed: 1, total: 4 };
        assert_eq!(err.to_string(), "1 of 4 file(s) failed the check");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CmmtError = io_err.into();
        assert!(matches!(err, CmmtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CmmtError = json_err.into();
        assert!(matches!(err, CmmtError::Json(_)));
    }
}
