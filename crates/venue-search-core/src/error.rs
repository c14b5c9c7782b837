//! Error types and exit codes for venue-search
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown venue, malformed catalog)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown venue, malformed catalog (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during venue-search operations
#[derive(Error, Debug)]
pub enum VenueError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("venue not found: {id}")]
    VenueNotFound { id: String },

    #[error("invalid catalog {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl VenueError {
    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        VenueError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a catalog file that could not be understood
    pub fn invalid_catalog(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        VenueError::InvalidCatalog {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            VenueError::UnknownFormat(_)
            | VenueError::UsageError(_)
            | VenueError::InvalidValue { .. } => ExitCode::Usage,

            VenueError::VenueNotFound { .. } | VenueError::InvalidCatalog { .. } => ExitCode::Data,

            VenueError::Io(_) | VenueError::Json(_) | VenueError::Toml(_) | VenueError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            VenueError::UnknownFormat(_) => "unknown_format",
            VenueError::UsageError(_) => "usage_error",
            VenueError::InvalidValue { .. } => "invalid_value",
            VenueError::VenueNotFound { .. } => "venue_not_found",
            VenueError::InvalidCatalog { .. } => "invalid_catalog",
            VenueError::Io(_) => "io_error",
            VenueError::Json(_) => "json_error",
            VenueError::Toml(_) => "toml_error",
            VenueError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for venue-search operations
pub type Result<T> = std::result::Result<T, VenueError>;
