//! Compile-time build metadata exposed on the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("THEMEGEN_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("THEMEGEN_BUILD_TIMESTAMP");

/// Help trailer block that surfaces build metadata in `themegen --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("THEMEGEN_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("THEMEGEN_BUILD_TIMESTAMP")
);

/// One-line build summary logged at startup.
pub fn startup_metadata_line() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_metadata_line_contains_all_fields() {
        let text = startup_metadata_line();
        assert!(text.starts_with('v'));
        assert!(text.contains(GIT_COMMIT));
        assert!(text.contains(BUILD_TIMESTAMP));
    }

    #[test]
    fn help_trailer_embeds_commit() {
        assert!(HELP_BUILD_METADATA.contains(GIT_COMMIT));
        assert!(HELP_BUILD_METADATA.contains(BUILD_TIMESTAMP));
    }
}
