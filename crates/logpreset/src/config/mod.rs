//! Configuration types
//!
//! This module is organized into:
//! - `base`: the resolved [`Config`] and [`Level`]
//! - `encoding`: the [`EncodingProfile`] and its per-field styles
//! - `presets`: the named [`Preset`] table
//! - `environment`: the [`Environment`] signal read at resolution time

mod base;
mod encoding;
mod environment;
mod presets;

pub use base::{Config, DEFAULT_OUTPUT, Level};
pub use encoding::{
    DurationEncoding, EncodingProfile, Format, LevelEncoding, NameEncoding, TimeEncoding,
};
pub use environment::{ENVIRONMENT_VAR, Environment};
pub use presets::Preset;
