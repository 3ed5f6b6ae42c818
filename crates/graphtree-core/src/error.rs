//! Error types and exit codes for graphtree
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown labels)
//! - 3: Data error (invalid configuration)

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
    /// Data error - unreadable or inconsistent configuration (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphtree operations
#[derive(Error, Debug)]
pub enum GraphTreeError {
    // Usage errors (exit code 2)
    #[error("invalid node label: {label} (known labels: {known})")]
    InvalidLabel { label: String, known: String },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("duplicate node label: {label}")]
    DuplicateLabel { label: String },

    #[error("invalid configuration in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphTreeError {
    /// Create an error for a label that is not part of the known label set
    pub fn invalid_label<'a>(
        label: impl std::fmt::Display,
        known: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        GraphTreeError::InvalidLabel {
            label: label.to_string(),
            known: known
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create an error for a configuration file that could not be turned into a graph or tree
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphTreeError::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphTreeError::InvalidLabel { .. }
            | GraphTreeError::UnknownFormat(_)
            | GraphTreeError::UsageError(_) => ExitCode::Usage,

            GraphTreeError::DuplicateLabel { .. }
            | GraphTreeError::InvalidConfig { .. }
            | GraphTreeError::Toml(_) => ExitCode::Data,

            GraphTreeError::Io(_) | GraphTreeError::Json(_) | GraphTreeError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphTreeError::InvalidLabel { .. } => "invalid_label",
            GraphTreeError::UnknownFormat(_) => "unknown_format",
            GraphTreeError::UsageError(_) => "usage_error",
            GraphTreeError::DuplicateLabel { .. } => "duplicate_label",
            GraphTreeError::InvalidConfig { .. } => "invalid_config",
            GraphTreeError::Io(_) => "io_error",
            GraphTreeError::Toml(_) => "toml_error",
            GraphTreeError::Json(_) => "json_error",
            GraphTreeError::Other(_) => "other",
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

/// Result type alias for graphtree operations
pub type Result<T> = std::result::Result<T, GraphTreeError>;
