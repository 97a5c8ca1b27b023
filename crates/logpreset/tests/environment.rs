//! Resolution against the real process environment
//!
//! The only test in this binary, so setting variables cannot race another
//! test thread.

#![allow(unsafe_code)]

use logpreset::{Configurator, ENVIRONMENT_VAR, Environment};
use pretty_assertions::assert_eq;

fn set_environment(value: &str) {
    // SAFETY: no other thread in this process reads the environment.
    unsafe { std::env::set_var(ENVIRONMENT_VAR, value) };
}

#[test]
fn config_reads_environment_variable() {
    for (value, development) in [
        ("development", true),
        ("dev", true),
        ("production", false),
        ("", false),
    ] {
        set_environment(value);
        assert_eq!(Environment::from_env(), Environment::classify(Some(value)));

        let config = Configurator::new().config().expect("config");
        assert_eq!(config.development, development, "ENVIRONMENT={value:?}");
    }

    // SAFETY: as above.
    unsafe { std::env::remove_var(ENVIRONMENT_VAR) };
    assert_eq!(Environment::from_env(), Environment::Unspecified);
    assert!(!Configurator::new().config().expect("config").development);
}
