//! Core types shared by every part of the crate.
//!
//! ### [`error`] - Error handling
//! [`Error`] is returned from resolution and logger construction;
//! [`ConfigError`] values are accumulated by the configurator and
//! reported together as [`ConfigErrors`].

pub mod error;

pub use error::{ConfigError, ConfigErrors, Error, Result};
