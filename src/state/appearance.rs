//! Appearance model: theme color catalog, font and mode choices.
//!
//! DESIGN
//! ======
//! Everything the page toggles through class names is modeled here as an
//! enum or catalog entry, with pure functions mapping state to the class set
//! and stylesheet the document must carry. Browser writes live in
//! `util::dom`; persistence lives in `state::preferences`.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use std::fmt;
use std::str::FromStr;

use crate::util::color::rgba;

/// One accent color the visitor can pick from the settings sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColor {
    pub name: &'static str,
    pub hex: &'static str,
    class: &'static str,
}

impl ThemeColor {
    /// Discrete body class for rules that cannot use the color variable.
    pub fn theme_class(&self) -> &'static str {
        self.class
    }
}

/// Fixed color catalog. Index 0 is the default.
pub static THEME_COLORS: [ThemeColor; 8] = [
    ThemeColor { name: "blue", hex: "#3B82F6", class: "theme-blue" },
    ThemeColor { name: "purple", hex: "#8B5CF6", class: "theme-purple" },
    ThemeColor { name: "green", hex: "#10B981", class: "theme-green" },
    ThemeColor { name: "red", hex: "#EF4444", class: "theme-red" },
    ThemeColor { name: "orange", hex: "#F97316", class: "theme-orange" },
    ThemeColor { name: "pink", hex: "#EC4899", class: "theme-pink" },
    ThemeColor { name: "teal", hex: "#14B8A6", class: "theme-teal" },
    ThemeColor { name: "indigo", hex: "#6366F1", class: "theme-indigo" },
];

/// The catalog's default entry.
pub fn default_color() -> &'static ThemeColor {
    &THEME_COLORS[0]
}

/// Look up a catalog entry by exact hex equality.
pub fn find_color(hex: &str) -> Option<&'static ThemeColor> {
    THEME_COLORS.iter().find(|c| c.hex == hex)
}

/// Resolve `hex` to a catalog entry, falling back to the default.
pub fn resolve_color(hex: &str) -> &'static ThemeColor {
    find_color(hex).unwrap_or_else(default_color)
}

/// Theme class for `hex`; unmapped values get the first entry's class.
pub fn theme_class_for_color(hex: &str) -> &'static str {
    resolve_color(hex).theme_class()
}

/// Index of the swatch that should carry the selected marker.
pub fn highlight_selected_color(hex: &str) -> Option<usize> {
    THEME_COLORS.iter().position(|c| c.hex == hex)
}

/// Every theme class, for removal before applying a new one.
pub fn all_theme_classes() -> impl Iterator<Item = &'static str> {
    THEME_COLORS.iter().map(ThemeColor::theme_class)
}

/// Everything the document needs to show one theme color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStyle {
    pub hex: &'static str,
    pub theme_class: &'static str,
    pub css: String,
}

impl ColorStyle {
    pub fn for_color(color: &'static ThemeColor) -> Self {
        Self { hex: color.hex, theme_class: color.theme_class(), css: theme_stylesheet(color.hex) }
    }
}

/// Generate the single stylesheet that paints every color role with `hex`.
pub fn theme_stylesheet(hex: &str) -> String {
    let shadow = rgba(hex, 0.3);
    let shadow_hover = rgba(hex, 0.4);
    let soft = rgba(hex, 0.1);
    format!(
        ":root {{ --primary-color: {hex}; --primary-shadow: {shadow}; }}\n\
         .text-primary {{ color: {hex} !important; }}\n\
         .bg-primary {{ background-color: {hex} !important; }}\n\
         .bg-primary-soft {{ background-color: {soft} !important; }}\n\
         .border-primary {{ border-color: {hex} !important; }}\n\
         .ring-primary {{ --tw-ring-color: {hex} !important; }}\n\
         .from-primary {{ --tw-gradient-from: {hex} !important; --tw-gradient-stops: var(--tw-gradient-from), var(--tw-gradient-to, transparent) !important; }}\n\
         .to-primary {{ --tw-gradient-to: {hex} !important; }}\n\
         .hover\\:text-primary:hover {{ color: {hex} !important; }}\n\
         .hover\\:bg-primary:hover {{ background-color: {hex} !important; }}\n\
         .hover\\:border-primary:hover {{ border-color: {hex} !important; }}\n\
         .shadow-primary {{ box-shadow: 0 10px 15px -3px {shadow} !important; }}\n\
         .hover\\:shadow-primary:hover {{ box-shadow: 0 20px 25px -5px {shadow_hover} !important; }}\n"
    )
}

/// Returned when a stored or clicked id names no known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}

/// Body font family choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontChoice {
    Alexandria,
    #[default]
    Tajawal,
    Cairo,
}

impl FontChoice {
    pub const ALL: [FontChoice; 3] = [FontChoice::Alexandria, FontChoice::Tajawal, FontChoice::Cairo];

    /// Identifier written to storage and carried by font-option controls.
    pub fn id(self) -> &'static str {
        match self {
            Self::Alexandria => "alexandria",
            Self::Tajawal => "tajawal",
            Self::Cairo => "cairo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Alexandria => "Alexandria",
            Self::Tajawal => "Tajawal",
            Self::Cairo => "Cairo",
        }
    }

    /// Body class selecting this family.
    pub fn class(self) -> &'static str {
        match self {
            Self::Alexandria => "font-alexandria",
            Self::Tajawal => "font-tajawal",
            Self::Cairo => "font-cairo",
        }
    }
}

impl FromStr for FontChoice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ParseChoiceError { kind: "font", value: s.to_owned() })
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Dark or light display variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl FromStr for Mode {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseChoiceError { kind: "mode", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What the document currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppearanceState {
    pub color: &'static ThemeColor,
    pub font: FontChoice,
    pub mode: Mode,
}

impl Default for AppearanceState {
    fn default() -> Self {
        Self { color: default_color(), font: FontChoice::default(), mode: Mode::default() }
    }
}

impl AppearanceState {
    /// Classes the `<body>` element must carry for this state.
    pub fn body_classes(&self) -> [&'static str; 2] {
        [self.font.class(), self.color.theme_class()]
    }

    /// Class the root `<html>` element must carry, if any.
    pub fn root_class(&self) -> Option<&'static str> {
        self.mode.is_dark().then_some("dark")
    }
}
