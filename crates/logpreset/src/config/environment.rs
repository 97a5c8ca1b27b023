//! Deployment environment signal

/// Variable consulted by [`Environment::from_env`].
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Three-way classification of the deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// `production` or `prod`: development mode is forced off
    Production,
    /// `development`, `develop` or `dev`: development mode is forced on
    Development,
    /// Anything else, including an unset variable: backend default
    #[default]
    Unspecified,
}

impl Environment {
    /// Classify a raw environment value.
    #[must_use]
    pub fn classify(value: Option<&str>) -> Self {
        match value {
            Some("production" | "prod") => Self::Production,
            Some("development" | "develop" | "dev") => Self::Development,
            _ => Self::Unspecified,
        }
    }

    /// Read and classify the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::classify(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Development-mode override, `None` leaves the backend default.
    #[must_use]
    pub const fn development(self) -> Option<bool> {
        match self {
            Self::Production => Some(false),
            Self::Development => Some(true),
            Self::Unspecified => None,
        }
    }
}
