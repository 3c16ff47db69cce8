//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::sources::{config_root_dir, read_config_text_with_sources};
use super::{resolve_config, FileConfig, LoadedConfig};

/// Load configuration and report which file it came from.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config_with_source(path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!(source = ?source, "resolved config source");
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let config = resolve_config(parsed)?;

    Ok(LoadedConfig {
        config,
        source_path: source.path().map(Path::to_path_buf),
    })
}
