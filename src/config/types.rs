//! Configuration data model.
//!
//! `FileConfig` mirrors the on-disk TOML; `Config` is the validated runtime
//! shape produced by `config::resolve_config`.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_COLORS_TYPE, DEFAULT_CONSTRUCTOR, DEFAULT_INDENT_WIDTH, DEFAULT_INPUT_PATH,
    DEFAULT_THEME_TYPE,
};
use crate::emit::EmitOptions;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Emission settings derived from `[output]`.
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            constructor: self.output.constructor.clone(),
            theme_type: self.output.theme_type.clone(),
            colors_type: self.output.colors_type.clone(),
            indent: " ".repeat(self.output.indent),
        }
    }
}

/// `[input]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Theme document read when no path is given on the command line.
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
        }
    }
}

/// `[output]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Constructor applied to each color triple.
    pub constructor: String,
    pub theme_type: String,
    pub colors_type: String,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            constructor: DEFAULT_CONSTRUCTOR.to_string(),
            theme_type: DEFAULT_THEME_TYPE.to_string(),
            colors_type: DEFAULT_COLORS_TYPE.to_string(),
            indent: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Raw `themegen.toml` contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Loaded config plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}
