//! Unified error types for theme generation.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// HexError
// ---------------------------------------------------------------------------

/// Errors when decoding a `#RRGGBB` color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Fewer than 7 characters were supplied.
    TooShort { len: usize },
    /// The leading `#` is missing.
    MissingHash,
    /// A channel pair is not valid base-16.
    InvalidDigit { offset: usize, pair: String },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "expected #RRGGBB (7 characters), got {len}")
            }
            Self::MissingHash => write!(f, "expected leading `#`"),
            Self::InvalidDigit { offset, pair } => {
                write!(f, "invalid hex digits `{pair}` at offset {offset}")
            }
        }
    }
}

impl std::error::Error for HexError {}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors when reading or decoding a theme document.
#[derive(Debug)]
pub enum ThemeError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Yaml(serde_yaml::Error),
    /// A required key is absent. Holds the dotted path, e.g. `colors.normal.red`.
    MissingField(String),
    /// A required key holds something other than a string.
    NotAString(String),
    InvalidColor {
        field: String,
        value: String,
        source: HexError,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io: {}: {source}", path.display()),
            Self::Yaml(e) => write!(f, "yaml: {e}"),
            Self::MissingField(path) => write!(f, "missing field `{path}`"),
            Self::NotAString(path) => write!(f, "field `{path}` must be a string"),
            Self::InvalidColor {
                field,
                value,
                source,
            } => write!(f, "invalid color `{value}` for `{field}`: {source}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml(e) => Some(e),
            Self::InvalidColor { source, .. } => Some(source),
            Self::MissingField(_) | Self::NotAString(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// GenerateError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type for one generator run.
#[derive(Debug)]
pub enum GenerateError {
    Config(ConfigError),
    Theme(ThemeError),
    /// Writing the generated literal failed.
    Output(std::io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Theme(e) => write!(f, "theme: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ThemeError> for GenerateError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}
