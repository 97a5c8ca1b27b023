//! Resolved configuration and severity levels

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use super::EncodingProfile;
use crate::core::ConfigError;

/// Destination used when no output path was given.
pub const DEFAULT_OUTPUT: &str = "stderr";

/// Fully resolved logging configuration.
///
/// Every field holds a concrete value. This is the only object the logger
/// builder consumes; it is a copy, independent of the configurator it was
/// resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Sinks for log records (`"stdout"`, `"stderr"` or a file path)
    pub output_paths: Vec<String>,

    /// Sinks for backend-side diagnostics such as captured stacktraces
    pub error_output_paths: Vec<String>,

    /// Minimum severity that is emitted
    pub level: Level,

    /// Suppress stacktrace capture on error events
    pub disable_stacktrace: bool,

    /// Development mode: stacktraces are captured from `warn` upward
    pub development: bool,

    /// How records are rendered
    pub encoding: EncodingProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_paths: vec![DEFAULT_OUTPUT.to_owned()],
            error_output_paths: vec![DEFAULT_OUTPUT.to_owned()],
            level: Level::Debug,
            disable_stacktrace: true,
            development: false,
            encoding: EncodingProfile::development(),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl Level {
    /// Lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::UnknownLevel(s.to_owned())),
        }
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => Self::TRACE,
            Level::Debug => Self::DEBUG,
            Level::Info => Self::INFO,
            Level::Warn => Self::WARN,
            Level::Error => Self::ERROR,
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            tracing::Level::ERROR => Self::Error,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        Self::from_level(level.into())
    }
}
