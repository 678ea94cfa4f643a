//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success (including searches that find no path)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/configuration error (malformed grid, unknown city, length mismatch, etc.)

mod macros;

use thiserror::Error;

/// Exit codes for the waypath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/configuration error - request can never be searched meaningfully (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while preparing or running a search.
///
/// An unreachable goal is never an error; it is reported through
/// [`crate::graph::PathResult::NotFound`].
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Domain configuration errors (exit code 3)
    #[error("word length mismatch: {start:?} has {start_len} letters, {target:?} has {target_len}")]
    LengthMismatch {
        start: String,
        target: String,
        start_len: usize,
        target_len: usize,
    },

    #[error("dictionary mixes word lengths: expected {expected}, found {word:?} with {found}")]
    MixedWordLengths {
        expected: usize,
        word: String,
        found: usize,
    },

    #[error("dictionary holds {dictionary_len}-letter words but {word:?} has {word_len}")]
    DictionaryLengthMismatch {
        word: String,
        word_len: usize,
        dictionary_len: usize,
    },

    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell {cell} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        cell: String,
        rows: usize,
        cols: usize,
    },

    #[error("unknown {context}: {value}")]
    UnknownState { context: String, value: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a start or goal that is not part of the domain
    pub fn unknown_state(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::UnknownState {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed configuration file or value
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        WaypathError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WaypathError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_)
            | WaypathError::UsageError(_)
            | WaypathError::InvalidValue { .. } => ExitCode::Usage,

            WaypathError::LengthMismatch { .. }
            | WaypathError::MixedWordLengths { .. }
            | WaypathError::DictionaryLengthMismatch { .. }
            | WaypathError::EmptyGrid { .. }
            | WaypathError::RaggedGrid { .. }
            | WaypathError::OutOfBounds { .. }
            | WaypathError::UnknownState { .. }
            | WaypathError::InvalidConfig { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::FailedOperation { .. }
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::LengthMismatch { .. } => "length_mismatch",
            WaypathError::MixedWordLengths { .. } => "mixed_word_lengths",
            WaypathError::DictionaryLengthMismatch { .. } => "dictionary_length_mismatch",
            WaypathError::EmptyGrid { .. } => "empty_grid",
            WaypathError::RaggedGrid { .. } => "ragged_grid",
            WaypathError::OutOfBounds { .. } => "out_of_bounds",
            WaypathError::UnknownState { .. } => "unknown_state",
            WaypathError::InvalidConfig { .. } => "invalid_config",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::FailedOperation { .. } => "failed_operation",
            WaypathError::Other(_) => "other",
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

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_map_to_data_exit_code() {
        let err = WaypathError::LengthMismatch {
            start: "hit".to_string(),
            target: "cogs".to_string(),
            start_len: 3,
            target_len: 4,
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(WaypathError::EmptyGrid { rows: 0, cols: 3 }.exit_code(), ExitCode::Data);
        assert_eq!(
            WaypathError::unknown_state("city", "Kano").exit_code(),
            ExitCode::Data
        );
    }

    #[test]
    fn test_usage_errors_map_to_usage_exit_code() {
        assert_eq!(
            WaypathError::UnknownFormat("xml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaypathError::invalid_value("cell", "1;2").exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WaypathError::unknown_state("city", "Kano");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_state");
        assert_eq!(json["error"]["message"], "unknown city: Kano");
    }

    #[test]
    fn test_io_error_is_generic_failure() {
        let err: WaypathError = std::io::Error::other("disk gone").into();
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(err.exit_code()), 1);
    }
}
