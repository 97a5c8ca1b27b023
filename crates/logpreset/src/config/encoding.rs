//! Encoding profile: which formatter renders a record and how each field looks

use serde::{Deserialize, Serialize};

/// Record format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Structured single-line text
    Text,
    /// Structured JSON, one object per line
    Json,
}

/// Timestamp field policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeEncoding {
    /// Whatever the backend timer prints
    #[default]
    Default,
    /// UTC RFC 3339 timestamp
    Rfc3339,
    /// No timestamp field at all
    Omitted,
}

/// Level field style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevelEncoding {
    /// Lowercase, no colors
    #[default]
    Default,
    /// Capitalized and colorized
    CapitalColor,
    /// Capitalized, colorized and padded to a fixed width
    FixedWidthCapitalColor,
}

impl LevelEncoding {
    /// Whether this style asks for ANSI colors.
    #[must_use]
    pub const fn is_colored(self) -> bool {
        matches!(self, Self::CapitalColor | Self::FixedWidthCapitalColor)
    }
}

/// Logger-name (target) field style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameEncoding {
    /// Written as-is
    #[default]
    Default,
    /// Padded to 18 columns in text output
    FixedWidth,
}

/// Duration field style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationEncoding {
    /// Backend default
    #[default]
    Default,
    /// Human-readable strings such as `1.5ms`
    HumanReadable,
}

/// Bundle of rendering choices selected by a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodingProfile {
    /// Record format
    pub format: Format,
    /// Timestamp policy
    pub time: TimeEncoding,
    /// Level style
    pub level: LevelEncoding,
    /// Logger-name style
    pub name: NameEncoding,
    /// Duration style
    pub duration: DurationEncoding,
}

impl EncodingProfile {
    /// Text profile with backend defaults for every field.
    #[must_use]
    pub const fn text() -> Self {
        Self {
            format: Format::Text,
            time: TimeEncoding::Default,
            level: LevelEncoding::Default,
            name: NameEncoding::Default,
            duration: DurationEncoding::Default,
        }
    }

    /// JSON profile with backend defaults for every field.
    #[must_use]
    pub const fn json() -> Self {
        Self {
            format: Format::Json,
            ..Self::text()
        }
    }

    /// Profile used when no preset was selected: development text output
    /// with capitalized, colorized levels.
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: LevelEncoding::CapitalColor,
            ..Self::text()
        }
    }
}
