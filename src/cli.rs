//! CLI argument parsing via clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use themegen::build_info::HELP_BUILD_METADATA;

/// Generate a Rust `Theme { .. }` literal from a YAML terminal color theme.
///
/// The literal is written to stdout; redirect it into a source file.
#[derive(Debug, Parser)]
#[command(name = "themegen", version, after_help = HELP_BUILD_METADATA)]
pub struct Args {
    /// Theme document to read (default: input.path from config, else ./orig.yml).
    pub input: Option<PathBuf>,

    /// Path to config file (default: ./themegen.toml or ~/.config/themegen/themegen.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Override the per-color constructor (e.g. `Color::Rgb`).
    #[arg(long = "constructor", value_name = "EXPR")]
    pub constructor: Option<String>,

    /// Override the outer struct name.
    #[arg(long = "theme-type", value_name = "NAME")]
    pub theme_type: Option<String>,

    /// Override the struct name used for `normal` and `bright`.
    #[arg(long = "colors-type", value_name = "NAME")]
    pub colors_type: Option<String>,

    /// Emit every color inverted (255 - channel).
    #[arg(long = "invert")]
    pub invert: bool,

    /// Print a color swatch preview of the theme to stderr.
    #[arg(long = "preview")]
    pub preview: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
