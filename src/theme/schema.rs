//! Ordered field table for the terminal theme schema.
//!
//! Every decode and emit pass iterates [`THEME_FIELDS`]; the array order is
//! the output order and must match the `Theme`/`ThemeColors` struct shape the
//! generated literal is pasted into.

/// Top-level key every theme document nests its groups under.
pub const ROOT_KEY: &str = "colors";

/// Group a theme field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Primary,
    Normal,
    Bright,
}

impl Section {
    /// Document key for this group (`colors.<key>`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Normal => "normal",
            Self::Bright => "bright",
        }
    }

    /// Output field holding this group's nested struct, if it has one.
    ///
    /// Primary colors are flattened onto the theme itself.
    pub fn nested_field(self) -> Option<&'static str> {
        match self {
            Self::Primary => None,
            Self::Normal => Some("normal"),
            Self::Bright => Some("bright"),
        }
    }
}

/// The eight ANSI palette slots, in struct order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    pub const ALL: [AnsiColor; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

/// One addressable color in a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeField {
    Background,
    Foreground,
    Normal(AnsiColor),
    Bright(AnsiColor),
}

impl ThemeField {
    pub fn section(self) -> Section {
        match self {
            Self::Background | Self::Foreground => Section::Primary,
            Self::Normal(_) => Section::Normal,
            Self::Bright(_) => Section::Bright,
        }
    }

    /// Output field name; also the leaf key in the document.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Normal(color) | Self::Bright(color) => color.key(),
        }
    }

    /// Document key path, e.g. `["colors", "normal", "red"]`.
    pub fn key_path(self) -> [&'static str; 3] {
        [ROOT_KEY, self.section().key(), self.name()]
    }

    /// Dotted key path used in diagnostics, e.g. `colors.normal.red`.
    pub fn dotted_path(self) -> String {
        self.key_path().join(".")
    }
}

/// All 18 theme fields in emission order.
pub const THEME_FIELDS: [ThemeField; 18] = [
    ThemeField::Background,
    ThemeField::Foreground,
    ThemeField::Normal(AnsiColor::Black),
    ThemeField::Normal(AnsiColor::Red),
    ThemeField::Normal(AnsiColor::Green),
    ThemeField::Normal(AnsiColor::Yellow),
    ThemeField::Normal(AnsiColor::Blue),
    ThemeField::Normal(AnsiColor::Magenta),
    ThemeField::Normal(AnsiColor::Cyan),
    ThemeField::Normal(AnsiColor::White),
    ThemeField::Bright(AnsiColor::Black),
    ThemeField::Bright(AnsiColor::Red),
    ThemeField::Bright(AnsiColor::Green),
    ThemeField::Bright(AnsiColor::Yellow),
    ThemeField::Bright(AnsiColor::Blue),
    ThemeField::Bright(AnsiColor::Magenta),
    ThemeField::Bright(AnsiColor::Cyan),
    ThemeField::Bright(AnsiColor::White),
];
