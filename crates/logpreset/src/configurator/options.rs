//! Sparse options loaded from serialized config or environment variables

use serde::{Deserialize, Serialize};

use super::Configurator;
use crate::core::Result;

/// Variable holding the minimum level name.
pub const LEVEL_VAR: &str = "LOG_LEVEL";
/// Variable holding the preset keyword.
pub const PRESET_VAR: &str = "LOG_PRESET";
/// Variable holding comma-separated output destinations.
pub const OUTPUT_VAR: &str = "LOG_OUTPUT";
/// Variable enabling stacktraces (`1` or `true`).
pub const STACKTRACE_VAR: &str = "LOG_STACKTRACE";

/// Logging options as they appear in a config file.
///
/// Every field is optional. Names are validated only when the options are
/// applied to a [`Configurator`], so bad values end up as accumulated
/// errors rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogOptions {
    /// Output destinations
    pub output_paths: Option<Vec<String>>,
    /// Minimum level name
    pub level: Option<String>,
    /// Capture stacktraces on error events
    pub stacktrace: bool,
    /// Preset keyword
    pub preset: Option<String>,
}

impl LogOptions {
    /// Parse options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_paths = lookup(OUTPUT_VAR).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(String::from)
                .collect()
        });

        Self {
            output_paths,
            level: lookup(LEVEL_VAR),
            stacktrace: lookup(STACKTRACE_VAR).is_some_and(|v| v == "1" || v == "true"),
            preset: lookup(PRESET_VAR),
        }
    }
}

impl Configurator {
    /// Build a configurator from sparse options.
    pub fn from_options(options: &LogOptions) -> Self {
        let mut configurator = Self::new();
        configurator.apply_options(options);
        configurator
    }

    /// Build a configurator from `LOG_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_options(&LogOptions::from_env())
    }

    /// Apply every option that is set, in setter order.
    pub fn apply_options(&mut self, options: &LogOptions) -> &mut Self {
        if let Some(paths) = &options.output_paths {
            self.set_output_paths(paths.iter().cloned());
        }
        if let Some(level) = &options.level {
            self.set_level_str(level);
        }
        if options.stacktrace {
            self.enable_stacktrace();
        }
        if let Some(preset) = &options.preset {
            self.set_preset(preset);
        }
        self
    }
}
