//! Color schemes and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two are built in (`midnight`, the default, and
//! `daylight`); any other palette can be loaded from a file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e0def4"
//! text_normal = "#e0def4"
//! text_dim = "#6e6a86"
//! border = "#393552"
//! accent = "#9ccfd8"
//! chip_fg = "#e0def4"
//! chip_bg = "#393552"
//! chip_active_fg = "#232136"
//! chip_active_bg = "#c4a7e7"
//! placeholder_fg = "#908caa"
//! error_fg = "#eb6f92"
//! empty_state_fg = "#9ccfd8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixgrid::Theme;
//!
//! let theme = Theme::from_name("daylight").unwrap();
//! let line = format!("{}{}Title{}", Theme::fg(&theme.colors.header_fg), Theme::bold(), Theme::reset());
//! assert!(line.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in theme names.
pub const BUILTIN_THEMES: [&str; 2] = ["midnight", "daylight"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Subtitles, footer, captions.
    pub text_dim: String,
    pub border: String,

    /// Search button and load-more control.
    pub accent: String,

    pub chip_fg: String,
    pub chip_bg: String,
    pub chip_active_fg: String,
    pub chip_active_bg: String,

    /// "No Image Available" / "No description" placeholders.
    pub placeholder_fg: String,
    pub error_fg: String,
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "midnight" => include_str!("../../themes/midnight.toml"),
            "daylight" => include_str!("../../themes/daylight.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GalleryError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| GalleryError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`; anything malformed renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The built-in `midnight` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("midnight").expect("bundled midnight theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, "midnight");
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("102030"), "\u{1b}[48;2;16;32;48m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = 3").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(GalleryError::Theme(_))));
        assert!(matches!(Theme::from_file(dir.path().join("missing.toml")), Err(GalleryError::Theme(_))));
    }
}
