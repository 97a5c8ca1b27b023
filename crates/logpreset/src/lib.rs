//! # logpreset - opinionated logging configuration
//!
//! Collect a few options, pick a preset, get a ready `tracing` logger.
//! Anything left unset falls back to development-friendly defaults, and
//! invalid options are reported together before any logger is built.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logpreset::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let logger = Configurator::new()
//!         .set_level(Level::Info)
//!         .set_preset("light-console")
//!         .build()?;
//!     logger.init()?;
//!
//!     info!(port = 8080, "Server starting");
//!     Ok(())
//! }
//! ```
//!
//! ## Presets
//!
//! | name            | format | timestamps |
//! |-----------------|--------|------------|
//! | `console`       | text   | RFC 3339   |
//! | `light-console` | text   | none       |
//! | `json`          | JSON   | default    |
//! | `light-json`    | JSON   | none       |
//!
//! The `ENVIRONMENT` variable is read at resolution time: `production` or
//! `prod` turns development mode off, `development`, `develop` or `dev`
//! turns it on.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod configurator;
mod core;
mod layer;
mod writer;

// Public API
pub use builder::{Logger, LoggerBuilder, ReloadHandle};
pub use config::{
    Config, DEFAULT_OUTPUT, DurationEncoding, ENVIRONMENT_VAR, EncodingProfile, Environment,
    Format, Level, LevelEncoding, NameEncoding, Preset, TimeEncoding,
};
pub use configurator::{Configurator, LogOptions, resolve};
pub use crate::core::{ConfigError, ConfigErrors, Error, Result};
pub use layer::StacktraceLayer;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Configurator, Environment, Level, Logger, Preset, Result, init, init_with,
    };

    pub use tracing::{debug, error, info, trace, warn};
}

/// Build a logger from `LOG_*` environment variables and install it globally.
///
/// # Errors
///
/// Fails on invalid variable values, unopenable outputs, or when a global
/// logger is already installed.
pub fn init() -> Result<Logger> {
    init_with(&Configurator::from_env())
}

/// Build a logger from `configurator` and install it globally.
pub fn init_with(configurator: &Configurator) -> Result<Logger> {
    let logger = configurator.build()?;
    logger.init()?;
    Ok(logger)
}
