//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure to a stable
//! process exit code.

use std::fmt;

use hotel::{Error as LibError, ErrorCategory};

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),

    /// A room or reservation lookup came back empty.
    NotFound(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Booking conflict or illegal status transition
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid arguments or input
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    /// - 8: Room or reservation not found
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Library(err) => match err {
                LibError::Io(_) => 5,
                LibError::Configuration(_) => 7,
                _ => match err.category() {
                    ErrorCategory::Conflict | ErrorCategory::InvalidTransition => 1,
                    ErrorCategory::InvalidInput => 4,
                    ErrorCategory::NotFound => 8,
                    ErrorCategory::Internal => 6,
                },
            },
            Self::Timeout => 2,
            Self::NoDataDirectory => 3,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Config(_) => 7,
            Self::NotFound(_) => 8,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library(e) => write!(f, "{e}"),
            Self::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Timeout => write!(f, "Timeout waiting for database lock"),
            Self::NoDataDirectory => write!(
                f,
                "Data directory not found (run `hotel init` or enable auto-init)"
            ),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::NotFound(what) => write!(f, "Not found: {what}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_lock_timeout() {
            Self::Timeout
        } else if matches!(e, LibError::DataDirectoryNotFound { .. }) {
            Self::NoDataDirectory
        } else {
            Self::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        Self::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
