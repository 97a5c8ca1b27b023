//! Named presets and the encoding profile each one selects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DurationEncoding, EncodingProfile, LevelEncoding, NameEncoding, TimeEncoding};
use crate::core::ConfigError;

/// Keyword shortcut that sets a whole [`EncodingProfile`] at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Colorized text with RFC 3339 timestamps
    Console,
    /// Colorized text without timestamps
    LightConsole,
    /// JSON with backend defaults
    Json,
    /// JSON without timestamps
    LightJson,
}

impl Preset {
    /// Every accepted preset, in the order they are advertised.
    pub const ALL: [Self; 4] = [Self::Console, Self::Json, Self::LightConsole, Self::LightJson];

    /// Keyword accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::LightConsole => "light-console",
            Self::Json => "json",
            Self::LightJson => "light-json",
        }
    }

    /// Encoding profile selected by this preset.
    #[must_use]
    pub const fn profile(self) -> EncodingProfile {
        match self {
            Self::Console => EncodingProfile {
                time: TimeEncoding::Rfc3339,
                level: LevelEncoding::FixedWidthCapitalColor,
                name: NameEncoding::FixedWidth,
                duration: DurationEncoding::HumanReadable,
                ..EncodingProfile::text()
            },
            Self::LightConsole => EncodingProfile {
                time: TimeEncoding::Omitted,
                level: LevelEncoding::FixedWidthCapitalColor,
                name: NameEncoding::FixedWidth,
                ..EncodingProfile::text()
            },
            Self::Json => EncodingProfile::json(),
            Self::LightJson => EncodingProfile {
                time: TimeEncoding::Omitted,
                ..EncodingProfile::json()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_owned()))
    }
}
