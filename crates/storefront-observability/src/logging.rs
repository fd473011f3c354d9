//! Subscriber configuration and installation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::ObservabilityError;

/// Minimum level of events to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ObservabilityError::UnknownLevel(s.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for terminals).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(ObservabilityError::UnknownFormat(s.to_string())),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default minimum level, used when `RUST_LOG` is unset.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Lower the level to at least `debug`.
    pub fn verbose(mut self) -> Self {
        self.level = self.level.min(LogLevel::Debug);
        self
    }

    /// Build the event filter. `RUST_LOG`, when set and non-empty, takes
    /// precedence over the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(directive) if !directive.trim().is_empty() => parse_filter(&directive),
            _ => parse_filter(self.level.as_directive()),
        }
    }
}

/// Parse a filter directive such as `info` or `storefront_catalog=debug,warn`.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, ObservabilityError> {
    EnvFilter::try_new(directive).map_err(|e| ObservabilityError::InvalidFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber. Events go to stderr so command output on
/// stdout stays machine-readable.
///
/// Fails if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };
    result.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}
