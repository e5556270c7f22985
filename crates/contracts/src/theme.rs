//! Light/dark mode and the palette derived from it.
//!
//! The palette is a pure function of the mode: toggling twice returns the
//! exact same tokens. Nothing here is persisted; a page refresh starts
//! from the default mode again.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// String form used for the `data-theme` attribute on `<body>`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

}

/// Color tokens consumed by the shell and the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub app_bar: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub drawer: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
    pub accent: &'static str,
}

impl Palette {
    /// Derive the full token set from a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                app_bar: "linear-gradient(135deg, #FF6D00 0%, #E65100 100%)",
                background: "#f5f7fa",
                surface: "#FFFFFF",
                drawer: "#FFFFFF",
                text_primary: "#333333",
                text_secondary: "#666666",
                divider: "rgba(0,0,0,0.12)",
                accent: "#FF6D00",
            },
            ThemeMode::Dark => Self {
                app_bar: "linear-gradient(135deg, #E65100 0%, #BF360C 100%)",
                background: "#121212",
                surface: "#1E1E1E",
                drawer: "#1E1E1E",
                text_primary: "#EEEEEE",
                text_secondary: "#AAAAAA",
                divider: "rgba(255,255,255,0.12)",
                accent: "#FF9E40",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn palette_is_pure_in_mode() {
        assert_eq!(
            Palette::for_mode(ThemeMode::Dark),
            Palette::for_mode(ThemeMode::Dark)
        );
        assert_ne!(
            Palette::for_mode(ThemeMode::Light).background,
            Palette::for_mode(ThemeMode::Dark).background
        );
    }

    #[test]
    fn attribute_strings_differ_per_mode() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
