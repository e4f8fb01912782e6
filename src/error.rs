//! Error types for todo-board
//!
//! Store operations never fail; errors only come from the edges
//! (config, seed data, replay scripts, terminal setup).
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, bad config or seed data)
//! - 4: Operation failed (IO, serialization, terminal)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the todo CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for todo-board operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Seed file not found: {0}")]
    SeedNotFound(PathBuf),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("Invalid replay script at line {line}: {message}")]
    InvalidReplay { line: usize, message: String },

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidConfig(_)
            | Error::InvalidArgument(_)
            | Error::SeedNotFound(_)
            | Error::InvalidSeed(_)
            | Error::InvalidReplay { .. } => exit_codes::USER_ERROR,

            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::Terminal(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for JSON error output
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::SeedNotFound(path) => Some(serde_json::json!({
                "path": path.to_string_lossy(),
            })),
            Error::InvalidReplay { line, .. } => Some(serde_json::json!({ "line": line })),
            _ => None,
        }
    }
}

/// Result type alias for todo-board operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: err.details(),
        }
    }
}
