//! Error types for the codenamer-rs library.
//!
//! Rule evaluation and script mining never fail across their boundary; these
//! errors cover the surrounding plumbing: configuration, file access, the
//! external C# helper and report serialization.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Main result type for codenamer operations.
pub type Result<T> = std::result::Result<T, CodenamerError>;

/// Error type for all codenamer operations.
#[derive(Error, Debug)]
pub enum CodenamerError {
    /// I/O related errors (file reads, process spawning)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Parsing and language processing errors
    #[error("Parse error in {language}: {message}")]
    Parse {
        /// Input being parsed
        language: String,
        /// Error description
        message: String,
        /// Line number (if available)
        line: Option<usize>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being processed
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// The external fact producer exited unsuccessfully
    #[error("External parser failed: {message}")]
    ExternalParser {
        /// Error description (usually the helper's stderr)
        message: String,
        /// Exit code, if the process exited normally
        exit_code: Option<i32>,
    },

    /// An operation exceeded its time budget
    #[error("Timed out after {}s: {operation}", .limit.as_secs())]
    Timeout {
        /// Operation that timed out
        operation: String,
        /// Configured limit
        limit: Duration,
    },

    /// Resource exhaustion errors
    #[error("Resource exhaustion: {message}")]
    ResourceExhaustion {
        /// Error description
        message: String,
        /// Type of resource exhausted
        resource_type: String,
        /// Maximum allowed usage
        limit: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl CodenamerError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new external parser failure
    pub fn external_parser(message: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::ExternalParser {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a new timeout error
    pub fn timeout(operation: impl Into<String>, limit: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            limit,
        }
    }

    /// Create a new resource exhaustion error
    pub fn resource_exhaustion(
        message: impl Into<String>,
        resource_type: impl Into<String>,
        limit: impl Into<String>,
    ) -> Self {
        Self::ResourceExhaustion {
            message: message.into(),
            resource_type: resource_type.into(),
            limit: Some(limit.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<io::Error> for CodenamerError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for CodenamerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for CodenamerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
