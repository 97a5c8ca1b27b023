//! Fluent accumulation of logging intent
//!
//! A [`Configurator`] starts empty, collects options through chained
//! setters and is resolved into a [`Config`] on demand. Invalid options do
//! not interrupt the chain: they are recorded and reported together at
//! resolution time.
//!
//! ```rust,no_run
//! use logpreset::{Configurator, Level};
//!
//! let logger = Configurator::new()
//!     .enable_stacktrace()
//!     .set_level(Level::Info)
//!     .set_output_paths(["stderr", "./app.log"])
//!     .set_preset("light-console")
//!     .must_build();
//!
//! logger.in_scope(|| tracing::info!("hello!"));
//! ```

mod options;
mod resolve;

use std::fmt;

pub use options::LogOptions;
pub use resolve::resolve;

use crate::builder::Logger;
use crate::config::{Config, EncodingProfile, Environment, Level, Preset};
use crate::core::{ConfigErrors, Result};

/// Options explicitly set by the caller; `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Options {
    output_paths: Option<Vec<String>>,
    error_output_paths: Option<Vec<String>>,
    level: Option<Level>,
    encoding: Option<EncodingProfile>,
}

/// Builder that accumulates logging intent.
///
/// Leaving it untouched resolves to an opinionated development setup:
/// colorized text on stderr at `debug` level without stacktraces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configurator {
    opts: Options,
    stacktrace: bool,
    errors: ConfigErrors,
}

impl Configurator {
    /// Create an empty configurator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send records and backend diagnostics to a single destination.
    pub fn set_output_path(&mut self, dest: impl Into<String>) -> &mut Self {
        let dest = dest.into();
        self.opts.output_paths = Some(vec![dest.clone()]);
        self.opts.error_output_paths = Some(vec![dest]);
        self
    }

    /// Send records and backend diagnostics to every destination given.
    ///
    /// The list is taken as is: it may be empty or contain duplicates.
    pub fn set_output_paths<I>(&mut self, dests: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let dests: Vec<String> = dests.into_iter().map(Into::into).collect();
        self.opts.output_paths = Some(dests.clone());
        self.opts.error_output_paths = Some(dests);
        self
    }

    /// Capture stacktraces on error events. Disabled unless called.
    pub fn enable_stacktrace(&mut self) -> &mut Self {
        self.stacktrace = true;
        self
    }

    /// Set the minimum level.
    pub fn set_level(&mut self, level: Level) -> &mut Self {
        self.opts.level = Some(level);
        self
    }

    /// Set the minimum level by name, recording an error for unknown names.
    pub fn set_level_str(&mut self, name: &str) -> &mut Self {
        match name.parse::<Level>() {
            Ok(level) => self.set_level(level),
            Err(err) => {
                self.errors.push(err);
                self
            }
        }
    }

    /// Select an encoding profile by preset keyword.
    ///
    /// Accepted names are listed in [`Preset::ALL`]. A later call replaces
    /// the profile chosen by an earlier one. Unknown names are recorded and
    /// make resolution fail; nothing else changes.
    pub fn set_preset(&mut self, name: impl AsRef<str>) -> &mut Self {
        match name.as_ref().parse::<Preset>() {
            Ok(preset) => self.apply_preset(preset),
            Err(err) => {
                self.errors.push(err);
                self
            }
        }
    }

    /// Select an encoding profile from a typed preset.
    pub fn apply_preset(&mut self, preset: Preset) -> &mut Self {
        self.opts.encoding = Some(preset.profile());
        self
    }

    /// `true` while no option has been applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &ConfigErrors {
        &self.errors
    }

    /// Resolve against an explicit environment.
    pub fn resolve(&self, env: Environment) -> Result<Config> {
        resolve(self, env)
    }

    /// Resolve against the process environment.
    pub fn config(&self) -> Result<Config> {
        self.resolve(Environment::from_env())
    }

    /// Resolve and construct a logger.
    pub fn build(&self) -> Result<Logger> {
        self.config()?.build()
    }

    /// Like [`build`](Self::build), but a broken logging setup is fatal.
    ///
    /// # Panics
    ///
    /// Panics if resolution or logger construction fails.
    pub fn must_build(&self) -> Logger {
        self.build()
            .unwrap_or_else(|err| panic!("failed to build logger: {err}"))
    }
}

impl fmt::Display for Configurator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(paths) = &self.opts.output_paths {
            parts.push(format!("output_paths: {paths:?}"));
        }
        if let Some(paths) = &self.opts.error_output_paths {
            parts.push(format!("error_output_paths: {paths:?}"));
        }
        if let Some(level) = self.opts.level {
            parts.push(format!("level: {level}"));
        }
        if self.stacktrace {
            parts.push("stacktrace: true".to_owned());
        }
        if let Some(encoding) = &self.opts.encoding {
            parts.push(format!("encoding: {encoding:?}"));
        }
        if !self.errors.is_empty() {
            parts.push(format!("errors: [{}]", self.errors));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}
