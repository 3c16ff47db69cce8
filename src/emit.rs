//! Rust struct-literal emission for decoded themes.
//!
//! Output is driven by [`THEME_FIELDS`] so field order always matches the
//! `Theme`/`ThemeColors` struct shape the literal is pasted into.

use std::fmt;
use std::io::{self, Write};

use crate::color::Rgb;
use crate::theme::{Section, Theme, THEME_FIELDS};

/// Names and layout used when printing a theme literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Constructor path applied to each `(r, g, b)` triple, e.g. `RGB8::new`.
    pub constructor: String,
    /// Outer struct name.
    pub theme_type: String,
    /// Struct name for the `normal` and `bright` groups.
    pub colors_type: String,
    /// One indentation level.
    pub indent: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            constructor: "RGB8::new".to_string(),
            theme_type: "Theme".to_string(),
            colors_type: "ThemeColors".to_string(),
            indent: "  ".to_string(),
        }
    }
}

/// Render the theme literal into a string.
pub fn render_theme(theme: &Theme, options: &EmitOptions) -> String {
    ThemeLiteral { theme, options }.to_string()
}

/// Write the theme literal to `out`, one field per line.
pub fn write_theme<W: Write>(out: &mut W, theme: &Theme, options: &EmitOptions) -> io::Result<()> {
    write!(out, "{}", ThemeLiteral { theme, options })
}

/// A theme bound to its output names; `Display` produces the literal.
struct ThemeLiteral<'a> {
    theme: &'a Theme,
    options: &'a EmitOptions,
}

impl fmt::Display for ThemeLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.options;
        let indent = options.indent.as_str();
        writeln!(f, "{} {{", options.theme_type)?;

        let mut open_group: Option<Section> = None;
        for field in THEME_FIELDS {
            let section = field.section();
            if open_group != Some(section) {
                if open_group.and_then(Section::nested_field).is_some() {
                    writeln!(f, "{indent}}},")?;
                }
                if let Some(name) = section.nested_field() {
                    writeln!(f, "{indent}{name}: {} {{", options.colors_type)?;
                }
                open_group = Some(section);
            }

            let depth = if section.nested_field().is_some() { 2 } else { 1 };
            writeln!(
                f,
                "{}{}: {},",
                indent.repeat(depth),
                field.name(),
                constructor_call(&options.constructor, self.theme.get(field))
            )?;
        }
        if open_group.and_then(Section::nested_field).is_some() {
            writeln!(f, "{indent}}},")?;
        }

        writeln!(f, "}}")
    }
}

fn constructor_call(constructor: &str, color: Rgb) -> String {
    format!("{constructor}({}, {}, {})", color.r, color.g, color.b)
}
