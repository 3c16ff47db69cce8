//! Configuration loading from TOML files.
//!
//! Config is loaded from the first source found (highest wins):
//! 1. TOML file specified via --config CLI flag
//! 2. ./themegen.toml in the current directory
//! 3. $XDG_CONFIG_HOME/themegen/themegen.toml (or ~/.config/themegen/themegen.toml)
//! 4. Built-in defaults
//!
//! CLI flags are applied on top of the loaded config by the binary.

use crate::error::ConfigError;

mod defaults;
mod loader;
mod sources;
mod types;

use defaults::MAX_INDENT_WIDTH;
pub use loader::load_config_with_source;
pub use sources::config_root_dir;
use types::FileConfig;
pub use types::{Config, InputConfig, LoadedConfig, OutputConfig};

/// Validate a parsed file config into the runtime shape.
fn resolve_config(parsed: FileConfig) -> Result<Config, ConfigError> {
    let mut output = parsed.output;
    output.constructor = require_non_blank("output.constructor", &output.constructor)?;
    output.theme_type = require_type_name("output.theme_type", &output.theme_type)?;
    output.colors_type = require_type_name("output.colors_type", &output.colors_type)?;
    if output.indent > MAX_INDENT_WIDTH {
        return Err(ConfigError::Invalid(format!(
            "output.indent must be at most {MAX_INDENT_WIDTH}, got {}",
            output.indent
        )));
    }
    if parsed.input.path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "input.path must not be empty".to_string(),
        ));
    }

    Ok(Config {
        input: parsed.input,
        output,
    })
}

/// Apply `--constructor`/`--theme-type`/`--colors-type` with file-config validation.
pub fn apply_output_overrides(
    config: &mut Config,
    constructor: Option<&str>,
    theme_type: Option<&str>,
    colors_type: Option<&str>,
) -> Result<(), ConfigError> {
    if let Some(value) = constructor {
        config.output.constructor = require_non_blank("--constructor", value)?;
    }
    if let Some(value) = theme_type {
        config.output.theme_type = require_type_name("--theme-type", value)?;
    }
    if let Some(value) = colors_type {
        config.output.colors_type = require_type_name("--colors-type", value)?;
    }
    Ok(())
}

fn require_non_blank(key: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{key} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Struct names may be paths (`ui::Theme`) but not arbitrary expressions.
fn require_type_name(key: &str, value: &str) -> Result<String, ConfigError> {
    let name = require_non_blank(key, value)?;
    let valid = name.split("::").all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
            && chars.all(|c| c.is_alphanumeric() || c == '_')
    });
    if !valid {
        return Err(ConfigError::Invalid(format!(
            "{key} `{name}` is not a valid type path"
        )));
    }
    Ok(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
