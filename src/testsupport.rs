//! Shared test fixtures for theme/emit/config test modules.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::theme::{AnsiColor, ThemeField};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "themegen-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Hex value used for `field` in [`theme_yaml_fixture`].
pub fn fixture_hex(field: ThemeField) -> &'static str {
    match field {
        ThemeField::Background => "#1d1f21",
        ThemeField::Foreground => "#c5c8c6",
        ThemeField::Normal(color) => match color {
            AnsiColor::Black => "#000000",
            AnsiColor::Red => "#cc6666",
            AnsiColor::Green => "#b5bd68",
            AnsiColor::Yellow => "#f0c674",
            AnsiColor::Blue => "#81a2be",
            AnsiColor::Magenta => "#b294bb",
            AnsiColor::Cyan => "#8abeb7",
            AnsiColor::White => "#eaeaea",
        },
        ThemeField::Bright(color) => match color {
            AnsiColor::Black => "#666666",
            AnsiColor::Red => "#ff3334",
            AnsiColor::Green => "#9ec400",
            AnsiColor::Yellow => "#e7c547",
            AnsiColor::Blue => "#7aa6da",
            AnsiColor::Magenta => "#b77ee0",
            AnsiColor::Cyan => "#54ced6",
            AnsiColor::White => "#ffffff",
        },
    }
}

/// Complete alacritty-style theme document (Tomorrow Night palette).
pub fn theme_yaml_fixture() -> String {
    build_theme_yaml(None)
}

/// Same document as [`theme_yaml_fixture`] with one key left out.
pub fn theme_yaml_without(omitted: ThemeField) -> String {
    build_theme_yaml(Some(omitted))
}

fn build_theme_yaml(omitted: Option<ThemeField>) -> String {
    let mut out = String::from("colors:\n");
    let mut current = None;
    for field in crate::theme::THEME_FIELDS {
        if current != Some(field.section()) {
            current = Some(field.section());
            out.push_str(&format!("  {}:\n", field.section().key()));
        }
        if Some(field) == omitted {
            continue;
        }
        out.push_str(&format!("    {}: '{}'\n", field.name(), fixture_hex(field)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().exists());
    }

    #[test]
    fn theme_fixture_lists_every_key_once() {
        let yaml = theme_yaml_fixture();
        assert!(yaml.starts_with("colors:\n  primary:\n"));
        assert_eq!(yaml.matches("    black: ").count(), 2);
        assert_eq!(yaml.matches(": '#").count(), 18);
    }

    #[test]
    fn omitted_fixture_drops_only_that_key() {
        let yaml = theme_yaml_without(ThemeField::Normal(AnsiColor::Red));
        assert_eq!(yaml.matches(": '#").count(), 17);
        assert!(!yaml.contains("'#cc6666'"));
        assert!(yaml.contains("'#ff3334'"));
    }
}
