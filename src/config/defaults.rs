//! Default configuration constants.

/// Theme document read from the working directory when nothing else is given.
pub(super) const DEFAULT_INPUT_PATH: &str = "orig.yml";
/// Per-color constructor matching `rgb::RGB8`.
pub(super) const DEFAULT_CONSTRUCTOR: &str = "RGB8::new";
pub(super) const DEFAULT_THEME_TYPE: &str = "Theme";
pub(super) const DEFAULT_COLORS_TYPE: &str = "ThemeColors";
pub(super) const DEFAULT_INDENT_WIDTH: usize = 2;
/// Upper bound on `output.indent`.
pub(super) const MAX_INDENT_WIDTH: usize = 16;
/// Config file name used for both local and global discovery.
pub(super) const CONFIG_FILE_NAME: &str = "themegen.toml";
/// Directory under the user config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "themegen";
