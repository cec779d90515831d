use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const LIGHT_LOGO: &str = "/logo.png";
pub const DARK_LOGO: &str = "/logo-w8-bg.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Glyph shown on the theme toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ThemeIcon::Sun => "☀️",
            ThemeIcon::Moon => "🌙",
        }
    }
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn logo_asset(&self) -> &'static str {
        match self {
            Theme::Light => LIGHT_LOGO,
            Theme::Dark => DARK_LOGO,
        }
    }

    /// The toggle shows the theme it would switch to.
    pub fn icon(&self) -> ThemeIcon {
        match self {
            Theme::Light => ThemeIcon::Moon,
            Theme::Dark => ThemeIcon::Sun,
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_selects_sun_and_dark_logo() {
        let theme = Theme::from_dark(true);
        assert_eq!(theme.logo_asset(), "/logo-w8-bg.png");
        assert_eq!(theme.icon(), ThemeIcon::Sun);
    }

    #[test]
    fn test_light_selects_moon_and_light_logo() {
        let theme = Theme::from_dark(false);
        assert_eq!(theme.logo_asset(), "/logo.png");
        assert_eq!(theme.icon(), ThemeIcon::Moon);
    }

    #[test]
    fn test_toggle_parity() {
        for initial in [Theme::Light, Theme::Dark] {
            for n in 0..7 {
                let result = (0..n).fold(initial, |t, _| t.toggled());
                assert_eq!(result.is_dark(), initial.is_dark() ^ (n % 2 == 1));
            }
        }
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse(), Ok(Theme::Dark));
        assert_eq!("LIGHT".parse(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ParseThemeError("sepia".to_string()))
        );
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
