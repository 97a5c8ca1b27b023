//! Logger construction from a resolved [`Config`]
//!
//! This module is organized into:
//! - `format`: record rendering for an encoding profile
//! - `reload`: runtime level changes

mod format;
mod reload;

pub use reload::ReloadHandle;

// Standard library
use std::sync::Arc;

// External dependencies
use tracing::Dispatch;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::{
    Registry,
    layer::{Layer, Layered, SubscriberExt},
};

// Internal crates
use crate::config::{Config, Level};
use crate::core::{Error, Result};
use crate::layer::StacktraceLayer;
use crate::writer;

/// Registry with the level filter applied; every other layer sits on top.
pub(crate) type Filtered = Layered<reload::FilterLayer, Registry>;

pub(crate) type BoxedLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build the logger
    ///
    /// Nothing is installed globally; see [`Logger::init`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if an output destination cannot be opened.
    pub fn build(self) -> Result<Logger> {
        let config = self.config;

        let writer = writer::make_writer(&config.output_paths)?;
        let mut layers: Vec<BoxedLayer> =
            vec![format::create_format_layer(&config.encoding, writer)];

        if !config.disable_stacktrace {
            let errors = writer::make_writer(&config.error_output_paths)?;
            layers.push(Box::new(StacktraceLayer::new(config.development, errors)));
        }

        let (filter_layer, reload) = reload::create_filter_layer(config.level);
        let subscriber = Registry::default().with(filter_layer).with(layers);

        tracing::debug!(
            target: "logpreset",
            outputs = ?config.output_paths,
            level = %config.level,
            format = ?config.encoding.format,
            development = config.development,
            "logger built"
        );

        Ok(Logger {
            dispatch: Dispatch::new(subscriber),
            reload,
            config: Arc::new(config),
        })
    }
}

impl Config {
    /// Construct a logger from this configuration.
    pub fn build(&self) -> Result<Logger> {
        LoggerBuilder::from_config(self.clone()).build()
    }
}

/// Active logger.
///
/// Wraps a [`Dispatch`]; clones share the same subscriber. Records go
/// through it only where it is the current dispatcher: inside
/// [`in_scope`](Self::in_scope), while a [`set_default`](Self::set_default)
/// guard is alive, or everywhere after [`init`](Self::init).
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    reload: ReloadHandle,
    config: Arc<Config>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Underlying dispatcher
    #[must_use]
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Configuration the logger was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run `f` with this logger as the current dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this logger the current thread's dispatcher until the guard drops.
    #[must_use = "the logger is unset when the guard is dropped"]
    pub fn set_default(&self) -> DefaultGuard {
        tracing::dispatcher::set_default(&self.dispatch)
    }

    /// Install this logger as the process-wide dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyInitialized`] if a global dispatcher exists.
    pub fn init(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|e| Error::AlreadyInitialized(e.to_string()))
    }

    /// Minimum level currently in effect
    #[must_use]
    pub fn level(&self) -> Level {
        self.reload.current().unwrap_or(self.config.level)
    }

    /// Change the minimum level of the running logger.
    pub fn set_level(&self, level: Level) -> Result<()> {
        self.reload.reload(level)
    }

    /// Handle for changing the level from elsewhere
    #[must_use]
    pub fn reload_handle(&self) -> &ReloadHandle {
        &self.reload
    }
}
