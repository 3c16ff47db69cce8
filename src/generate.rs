//! One-pass generation pipeline: read → decode → transform → emit.
//!
//! Decoding completes before anything is written, so document errors never
//! leave partial output behind.

use std::io::Write;
use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, info};

use crate::emit::{write_theme, EmitOptions};
use crate::error::GenerateError;
use crate::theme::{load_theme_file, parse_theme_str, Theme};

/// Settings for one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub emit: EmitOptions,
    /// Emit the channel-wise complement of every color.
    pub invert: bool,
}

/// Generate the literal for the theme document at `path`.
///
/// Returns the theme that was emitted (after any transform).
pub fn generate<W: Write>(
    path: &Path,
    options: &GenerateOptions,
    out: &mut W,
) -> Result<Theme, GenerateError> {
    info!(path = %path.display(), "generating theme literal");
    let theme = load_theme_file(path)?;
    emit(theme, options, out)
}

/// Generate from YAML text already in memory.
pub fn generate_from_str<W: Write>(
    source: &str,
    options: &GenerateOptions,
    out: &mut W,
) -> Result<Theme, GenerateError> {
    let theme = parse_theme_str(source)?;
    emit(theme, options, out)
}

/// Generate from an already-parsed document.
pub fn generate_from_document<W: Write>(
    document: &Value,
    options: &GenerateOptions,
    out: &mut W,
) -> Result<Theme, GenerateError> {
    let theme = Theme::from_document(document)?;
    emit(theme, options, out)
}

fn emit<W: Write>(
    theme: Theme,
    options: &GenerateOptions,
    out: &mut W,
) -> Result<Theme, GenerateError> {
    let theme = if options.invert {
        debug!("inverting theme colors");
        theme.inverted()
    } else {
        theme
    };
    write_theme(out, &theme, &options.emit).map_err(GenerateError::Output)?;
    out.flush().map_err(GenerateError::Output)?;
    debug!(constructor = %options.emit.constructor, "emitted theme literal");
    Ok(theme)
}
