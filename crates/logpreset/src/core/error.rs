//! Error types for logpreset
//!
//! Option calls never fail on the spot. Problems found while applying
//! options are collected as [`ConfigError`]s inside the configurator and
//! surface together, as one [`Error::Config`], when the configuration is
//! resolved.

use std::fmt;

/// A single invalid option recorded while accumulating intent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Preset keyword not present in the preset table.
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),

    /// Level name that does not map to a severity.
    #[error("unknown level: {0:?}")]
    UnknownLevel(String),
}

/// Ordered set of accumulated [`ConfigError`]s.
///
/// Renders every message joined with `"; "`, so a set holding one error
/// reads exactly like that error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    /// Append an error, keeping insertion order.
    pub fn push(&mut self, error: ConfigError) {
        self.0.push(error);
    }

    /// `true` when nothing has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded errors.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the recorded errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigError> {
        self.0.iter()
    }

    /// Borrow the recorded errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ConfigError] {
        &self.0
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

impl<'a> IntoIterator for &'a ConfigErrors {
    type Item = &'a ConfigError;
    type IntoIter = std::slice::Iter<'a, ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<ConfigError> for ConfigErrors {
    fn from(error: ConfigError) -> Self {
        Self(vec![error])
    }
}

/// Error type for all logpreset operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more options were invalid; carries the full set.
    #[error("{0}")]
    Config(ConfigErrors),

    /// An output destination could not be opened by the backend.
    #[error("cannot open log output {path:?}: {source}")]
    Sink {
        /// Destination as given in the configuration.
        path: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A global default subscriber was already installed.
    #[error("global logger already initialized: {0}")]
    AlreadyInitialized(String),

    /// Runtime level change was rejected by the backend.
    #[error("failed to reload level: {0}")]
    Reload(String),

    /// Serialized options could not be parsed.
    #[error("invalid log options: {0}")]
    Options(#[from] serde_json::Error),
}

impl Error {
    /// Accumulated configuration errors, if this is a resolution failure.
    #[must_use]
    pub fn config_errors(&self) -> Option<&ConfigErrors> {
        match self {
            Self::Config(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ConfigErrors> for Error {
    fn from(errors: ConfigErrors) -> Self {
        Self::Config(errors)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
