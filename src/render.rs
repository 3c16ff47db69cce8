//! Stderr status output and palette preview.
//!
//! Everything here writes to stderr so stdout carries only the generated
//! literal and can be redirected into a source file.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::color::Rgb;
use crate::theme::{AnsiColor, Theme, ThemeColors};

const LABEL_ERROR: &str = "error:";
const LABEL_WARNING: &str = "warning:";
const INDENT_1: &str = "  ";
/// Width of one preview swatch in cells.
const SWATCH: &str = "    ";

/// Terminal renderer for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    /// Print a swatch preview of `theme` to stderr.
    pub fn preview(&self, theme: &Theme) {
        let stderr = io::stderr();
        let mut out = stderr.lock();
        if let Err(err) = write_preview(&mut out, theme, self.color) {
            self.warn(&format!("failed to render preview: {err}"));
        }
    }
}

/// Write a three-row palette preview: primary, normal, bright.
///
/// Without color, swatches degrade to `#rrggbb` labels.
pub fn write_preview<W: Write>(out: &mut W, theme: &Theme, color: bool) -> io::Result<()> {
    write!(out, "{:<8}", "primary")?;
    write_swatch(out, theme.background, color)?;
    write_swatch(out, theme.foreground, color)?;
    if color {
        write!(
            out,
            "{INDENT_1}{}",
            " sample "
                .with(crossterm_color(theme.foreground))
                .on(crossterm_color(theme.background))
        )?;
    }
    writeln!(out)?;

    write_palette_row(out, "normal", &theme.normal, color)?;
    write_palette_row(out, "bright", &theme.bright, color)?;
    out.flush()
}

fn write_palette_row<W: Write>(
    out: &mut W,
    label: &str,
    colors: &ThemeColors,
    color: bool,
) -> io::Result<()> {
    write!(out, "{label:<8}")?;
    for slot in AnsiColor::ALL {
        write_swatch(out, colors.get(slot), color)?;
    }
    writeln!(out)
}

fn write_swatch<W: Write>(out: &mut W, rgb: Rgb, color: bool) -> io::Result<()> {
    if color {
        write!(out, "{}", SWATCH.on(crossterm_color(rgb)))
    } else {
        write!(out, " {}", rgb.to_hex())
    }
}

fn crossterm_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::theme_yaml_fixture;
    use crate::theme::parse_theme_str;

    fn preview_text(color: bool) -> String {
        let theme = parse_theme_str(&theme_yaml_fixture()).expect("theme");
        let mut out = Vec::new();
        write_preview(&mut out, &theme, color).expect("preview");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn plain_preview_lists_hex_codes_per_row() {
        let text = preview_text(false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "primary  #1d1f21 #c5c8c6");
        assert!(lines[1].starts_with("normal   #000000 #cc6666"));
        assert!(lines[2].ends_with("#54ced6 #ffffff"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn color_preview_uses_truecolor_backgrounds() {
        // crossterm drops SGR sequences when NO_COLOR is set.
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let text = preview_text(true);
        assert_eq!(text.lines().count(), 3);
        // SGR 48;2;r;g;b sets a 24-bit background.
        assert!(text.contains("48;2;29;31;33"), "got: {text:?}");
        assert!(text.contains("48;2;255;255;255"), "got: {text:?}");
    }
}
