//! Error types and exit codes for ritual
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, node ids outside the graph)
//! - 3: Data error (malformed graph text, inconsistent paths)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Reminder appended to every graph text parse failure
pub const EXPECTED_INPUT_FORMAT: &str = "expected format: \"n m\" then m lines of \"u v d c\"";

/// Exit codes for the ritual CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or searching them
#[derive(Error, Debug)]
pub enum RitualError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    #[error("{context} {node} is out of range (graph has {node_count} nodes)")]
    OutOfRange {
        context: String,
        node: NodeId,
        node_count: usize,
    },

    // Data errors (exit code 3)
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("invalid graph input: {reason}; {}", EXPECTED_INPUT_FORMAT)]
    InvalidInput { reason: String },

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

impl RitualError {
    /// Create an error for an invalid value
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        RitualError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node id outside `[0, node_count)`
    pub fn out_of_range(context: &str, node: NodeId, node_count: usize) -> Self {
        RitualError::OutOfRange {
            context: context.to_string(),
            node,
            node_count,
        }
    }

    /// Create an error for malformed graph text
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        RitualError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RitualError::UnknownFormat(_)
            | RitualError::UsageError(_)
            | RitualError::InvalidArgument { .. }
            | RitualError::OutOfRange { .. } => ExitCode::Usage,

            RitualError::EdgeNotFound { .. } | RitualError::InvalidInput { .. } => ExitCode::Data,

            RitualError::Io(_)
            | RitualError::Json(_)
            | RitualError::Toml(_)
            | RitualError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RitualError::UnknownFormat(_) => "unknown_format",
            RitualError::UsageError(_) => "usage_error",
            RitualError::InvalidArgument { .. } => "invalid_argument",
            RitualError::OutOfRange { .. } => "out_of_range",
            RitualError::EdgeNotFound { .. } => "edge_not_found",
            RitualError::InvalidInput { .. } => "invalid_input",
            RitualError::Io(_) => "io_error",
            RitualError::Json(_) => "json_error",
            RitualError::Toml(_) => "toml_error",
            RitualError::Other(_) => "other",
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

/// Result type alias for ritual operations
pub type Result<T> = std::result::Result<T, RitualError>;
