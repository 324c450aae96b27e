//! Error types and exit codes for ladder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (no ladder, unreachable target, IO)
//! - 2: Usage error (bad flags/args, out-of-range vertex)
//! - 3: Data error (target missing from dictionary, malformed graph file)

mod macros;

use thiserror::Error;

/// Exit codes for the ladder binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - dictionary or graph does not fit the request (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ladder operations
#[derive(Error, Debug)]
pub enum LadderError {
    // Search outcomes
    #[error("begin and end are both {word}, no ladder to build")]
    DegenerateInput { word: String },

    #[error("{begin} and {end} are not valid dictionary words: {end} is not in the dictionary")]
    InvalidTarget { begin: String, end: String },

    #[error("{begin} and {end} are not similar length words: lengths differ by more than one")]
    IncompatibleLength { begin: String, end: String },

    #[error("{begin} and {end} are not connected words: no ladder exists")]
    NoPathExists { begin: String, end: String },

    #[error("invalid ladder at word {index}: {reason}")]
    InvalidLadder { index: usize, reason: String },

    // Input data
    #[error("invalid graph at line {line}: {reason}")]
    GraphFormat { line: usize, reason: String },

    // Usage errors
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl LadderError {
    /// Create an error for a begin word equal to the end word
    pub fn degenerate(word: &str) -> Self {
        LadderError::DegenerateInput {
            word: word.to_string(),
        }
    }

    /// Create an error for an end word missing from the dictionary
    pub fn invalid_target(begin: &str, end: &str) -> Self {
        LadderError::InvalidTarget {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    /// Create an error for words whose lengths differ by more than one
    pub fn incompatible_length(begin: &str, end: &str) -> Self {
        LadderError::IncompatibleLength {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    /// Create an error for an exhausted search frontier
    pub fn no_path(begin: &str, end: &str) -> Self {
        LadderError::NoPathExists {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    /// Create an error for a word sequence that breaks a ladder invariant
    pub fn invalid_ladder(index: usize, reason: impl std::fmt::Display) -> Self {
        LadderError::InvalidLadder {
            index,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a malformed graph description
    pub fn graph_format(line: usize, reason: impl std::fmt::Display) -> Self {
        LadderError::GraphFormat {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LadderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        LadderError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LadderError::InvalidValue { .. } | LadderError::UsageError(_) => ExitCode::Usage,

            LadderError::InvalidTarget { .. }
            | LadderError::IncompatibleLength { .. }
            | LadderError::GraphFormat { .. } => ExitCode::Data,

            LadderError::DegenerateInput { .. }
            | LadderError::NoPathExists { .. }
            | LadderError::InvalidLadder { .. }
            | LadderError::Json(_)
            | LadderError::Toml(_)
            | LadderError::FailedOperationWithTarget { .. }
            | LadderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Whether this error means "the search ran and found nothing",
    /// as opposed to a problem with the inputs or environment.
    pub fn is_no_ladder(&self) -> bool {
        matches!(
            self,
            LadderError::DegenerateInput { .. } | LadderError::NoPathExists { .. }
        )
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            LadderError::DegenerateInput { .. } => "degenerate_input",
            LadderError::InvalidTarget { .. } => "invalid_target",
            LadderError::IncompatibleLength { .. } => "incompatible_length",
            LadderError::NoPathExists { .. } => "no_path_exists",
            LadderError::InvalidLadder { .. } => "invalid_ladder",
            LadderError::GraphFormat { .. } => "graph_format",
            LadderError::InvalidValue { .. } => "invalid_value",
            LadderError::UsageError(_) => "usage_error",
            LadderError::Json(_) => "json_error",
            LadderError::Toml(_) => "toml_error",
            LadderError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            LadderError::Other(_) => "other",
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

/// Result type alias for ladder operations
pub type Result<T> = std::result::Result<T, LadderError>;
