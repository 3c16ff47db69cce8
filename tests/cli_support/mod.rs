//! Fixtures for running the built `themegen` binary in scratch directories.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU64, Ordering};

static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Tomorrow Night palette in alacritty layout.
pub const THEME_YAML: &str = "\
colors:
  primary:
    background: '#1d1f21'
    foreground: '#c5c8c6'
  normal:
    black:   '#000000'
    red:     '#cc6666'
    green:   '#b5bd68'
    yellow:  '#f0c674'
    blue:    '#81a2be'
    magenta: '#b294bb'
    cyan:    '#8abeb7'
    white:   '#eaeaea'
  bright:
    black:   '#666666'
    red:     '#ff3334'
    green:   '#9ec400'
    yellow:  '#e7c547'
    blue:    '#7aa6da'
    magenta: '#b77ee0'
    cyan:    '#54ced6'
    white:   '#ffffff'
";

/// Field names in the order the literal must list them.
pub const FIELD_ORDER: [&str; 18] = [
    "background",
    "foreground",
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
];

/// `(line index, key)` for every color leaf in [`THEME_YAML`], however the
/// value column is aligned.
pub fn color_lines() -> Vec<(usize, &'static str)> {
    THEME_YAML
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let (key, value) = line.trim_start().split_once(':')?;
            value.trim().starts_with("'#").then_some((index, key))
        })
        .collect()
}

/// [`THEME_YAML`] with line `skip` removed.
pub fn theme_yaml_without_line(skip: usize) -> String {
    THEME_YAML
        .lines()
        .enumerate()
        .filter(|(index, _)| *index != skip)
        .map(|(_, line)| format!("{line}\n"))
        .collect()
}

/// Scratch working directory removed on drop.
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(prefix: &str) -> Self {
        let n = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "themegen-it-{prefix}-{}-{n}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("xdg")).expect("create workspace");
        Self { root }
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Run the binary with `args` inside this workspace, isolated from user config.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_themegen"))
            .args(args)
            .current_dir(&self.root)
            .env("XDG_CONFIG_HOME", self.root.join("xdg"))
            .env_remove("RUST_LOG")
            .output()
            .expect("spawn themegen")
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout utf8")
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Field names of every constructor line, in output order.
pub fn constructor_fields(stdout: &str, constructor: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.contains(constructor))
        .filter_map(|line| line.trim().split(':').next().map(str::to_string))
        .collect()
}
