//! Merge of user intent with defaults and the environment signal

use super::Configurator;
use crate::config::{Config, DEFAULT_OUTPUT, EncodingProfile, Environment, Level};
use crate::core::{Error, Result};

/// Resolve `intent` into a [`Config`].
///
/// Pure apart from its inputs: the environment is passed in rather than
/// read here, and `intent` is never modified. Fails with every accumulated
/// error when any option was invalid.
pub fn resolve(intent: &Configurator, env: Environment) -> Result<Config> {
    if !intent.errors.is_empty() {
        return Err(Error::Config(intent.errors.clone()));
    }

    let opts = &intent.opts;
    let mut config = Config {
        output_paths: opts
            .output_paths
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_OUTPUT.to_owned()]),
        error_output_paths: opts
            .error_output_paths
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_OUTPUT.to_owned()]),
        level: opts.level.unwrap_or(Level::Debug),
        disable_stacktrace: !intent.stacktrace,
        development: false,
        encoding: opts.encoding.unwrap_or_else(EncodingProfile::development),
    };

    if let Some(development) = env.development() {
        config.development = development;
    }

    // No config leaves this function while errors are recorded.
    if !intent.errors.is_empty() {
        return Err(Error::Config(intent.errors.clone()));
    }

    Ok(config)
}
