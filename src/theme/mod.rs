//! Terminal theme model and document decoding.
//!
//! A theme document is YAML shaped like:
//!
//! ```yaml
//! colors:
//!   primary: { background: '#1d1f21', foreground: '#c5c8c6' }
//!   normal:  { black: '#000000', red: '#cc6666', ... }
//!   bright:  { black: '#666666', red: '#d54e53', ... }
//! ```
//!
//! Decoding walks [`schema::THEME_FIELDS`] and fails on the first missing or
//! malformed entry; there is no default substitution.

pub mod schema;

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::color::Rgb;
use crate::error::ThemeError;

pub use schema::{AnsiColor, Section, ThemeField, THEME_FIELDS};

/// The eight ANSI palette colors of one intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeColors {
    pub black: Rgb,
    pub red: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub blue: Rgb,
    pub magenta: Rgb,
    pub cyan: Rgb,
    pub white: Rgb,
}

impl ThemeColors {
    pub fn get(&self, color: AnsiColor) -> Rgb {
        match color {
            AnsiColor::Black => self.black,
            AnsiColor::Red => self.red,
            AnsiColor::Green => self.green,
            AnsiColor::Yellow => self.yellow,
            AnsiColor::Blue => self.blue,
            AnsiColor::Magenta => self.magenta,
            AnsiColor::Cyan => self.cyan,
            AnsiColor::White => self.white,
        }
    }

    pub fn get_mut(&mut self, color: AnsiColor) -> &mut Rgb {
        match color {
            AnsiColor::Black => &mut self.black,
            AnsiColor::Red => &mut self.red,
            AnsiColor::Green => &mut self.green,
            AnsiColor::Yellow => &mut self.yellow,
            AnsiColor::Blue => &mut self.blue,
            AnsiColor::Magenta => &mut self.magenta,
            AnsiColor::Cyan => &mut self.cyan,
            AnsiColor::White => &mut self.white,
        }
    }
}

/// A fully decoded terminal theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    /// Background color.
    pub background: Rgb,

    /// Foreground color.
    pub foreground: Rgb,

    /// Normal colors.
    pub normal: ThemeColors,

    /// Bright colors.
    pub bright: ThemeColors,
}

impl Theme {
    /// Resolve one schema field to its color.
    pub fn get(&self, field: ThemeField) -> Rgb {
        match field {
            ThemeField::Background => self.background,
            ThemeField::Foreground => self.foreground,
            ThemeField::Normal(color) => self.normal.get(color),
            ThemeField::Bright(color) => self.bright.get(color),
        }
    }

    pub fn get_mut(&mut self, field: ThemeField) -> &mut Rgb {
        match field {
            ThemeField::Background => &mut self.background,
            ThemeField::Foreground => &mut self.foreground,
            ThemeField::Normal(color) => self.normal.get_mut(color),
            ThemeField::Bright(color) => self.bright.get_mut(color),
        }
    }

    /// Decode an already-parsed document. No filesystem access.
    pub fn from_document(document: &Value) -> Result<Self, ThemeError> {
        let mut theme = Self::default();
        for field in THEME_FIELDS {
            *theme.get_mut(field) = decode_field(document, field)?;
        }
        Ok(theme)
    }

    /// Every color replaced by its channel-wise complement.
    pub fn inverted(&self) -> Self {
        let mut theme = *self;
        for field in THEME_FIELDS {
            let slot = theme.get_mut(field);
            *slot = slot.inverted();
        }
        theme
    }
}

fn decode_field(document: &Value, field: ThemeField) -> Result<Rgb, ThemeError> {
    let value = field
        .key_path()
        .iter()
        .try_fold(document, |node, key| node.get(*key))
        .ok_or_else(|| ThemeError::MissingField(field.dotted_path()))?;
    let text = value
        .as_str()
        .ok_or_else(|| ThemeError::NotAString(field.dotted_path()))?;
    Rgb::from_hex(text).map_err(|source| ThemeError::InvalidColor {
        field: field.dotted_path(),
        value: text.to_string(),
        source,
    })
}

/// Parse YAML theme text and decode it.
pub fn parse_theme_str(source: &str) -> Result<Theme, ThemeError> {
    let document: Value = serde_yaml::from_str(source)?;
    Theme::from_document(&document)
}

/// Read a theme file from disk and decode it.
pub fn load_theme_file(path: &Path) -> Result<Theme, ThemeError> {
    debug!(path = %path.display(), "reading theme document");
    let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let theme = parse_theme_str(&source)?;
    debug!(fields = THEME_FIELDS.len(), "decoded theme colors");
    Ok(theme)
}
