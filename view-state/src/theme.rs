//! Light/dark theme state.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::ViewStateError;

/// The site's visual mode.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Selects the value that belongs to this mode.
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }

    /// Class applied to the document root. Utility classes key their
    /// `dark:` variants off it.
    pub fn root_class(self) -> &'static str {
        self.pick("", "dark")
    }
}

impl FromStr for ThemeMode {
    type Err = ViewStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ViewStateError::UnknownTheme(s.to_string())),
        }
    }
}

/// Holds the single active [`ThemeMode`] for the app.
///
/// The app root owns one of these and hands it to every component as a
/// context value. It only changes through [`ThemeController::toggle`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    pub fn new(initial: ThemeMode) -> Self {
        Self { mode: initial }
    }

    pub fn current(&self) -> ThemeMode {
        self.mode
    }

    /// Flips between light and dark and returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(theme = %self.mode, "theme toggled");
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_is_light() {
        assert_eq!(ThemeController::default().current(), ThemeMode::Light);
    }

    #[test]
    fn toggle_light_dark_light() {
        let mut theme = ThemeController::default();
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.current(), ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.current(), ThemeMode::Light);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ViewStateError::UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in ThemeMode::iter() {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
    }

    #[test]
    fn root_class_only_set_for_dark() {
        assert_eq!(ThemeMode::Light.root_class(), "");
        assert_eq!(ThemeMode::Dark.root_class(), "dark");
        assert_eq!(ThemeMode::Dark.pick("moon", "sun"), "sun");
    }
}
