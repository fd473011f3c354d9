//! Observability error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObservabilityError {
    /// Unrecognized log level name.
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Unrecognized log format name.
    #[error("Unknown log format: {0} (expected 'human' or 'json')")]
    UnknownFormat(String),

    /// Filter directive could not be parsed.
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter { directive: String, message: String },

    /// A global subscriber was already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
