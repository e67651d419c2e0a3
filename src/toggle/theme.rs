// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::{fmt::Display, str::FromStr};

use crate::{document::Root, storage::Storage};

pub const THEME_KEY: &str = "theme";

/// Boolean flag written by older versions of the page, read once for migration.
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flip(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug)]
pub struct ParseThemeError(String);

impl Display for ParseThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported theme `{}`, expected `light` or `dark`", self.0)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug)]
pub struct ThemeToggle {
    theme: Theme,
}

impl ThemeToggle {
    /// Resolve the startup theme and reflect it into `root`.
    pub fn init(storage: &dyn Storage, root: &mut Root) -> Self {
        let theme = Self::resolve(storage);
        reflect(theme, root);
        Self { theme }
    }

    /// Stored `theme` first, then the legacy `darkMode` flag, then light.
    pub fn resolve(storage: &dyn Storage) -> Theme {
        if let Some(theme) = storage.get(THEME_KEY).and_then(|s| s.parse().ok()) {
            return theme;
        }
        match storage.get(LEGACY_DARK_MODE_KEY).as_deref() {
            Some("true") => Theme::Dark,
            Some("false") => Theme::Light,
            _ => Theme::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme. Once `theme` is stored the page follows it, even if
    /// the legacy flag cannot be dropped afterwards.
    pub fn toggle(&mut self, storage: &mut dyn Storage, root: &mut Root) -> eyre::Result<Theme> {
        let theme = self.theme.flip();
        storage.set(THEME_KEY, theme.as_str())?;
        reflect(theme, root);
        self.theme = theme;
        storage.remove(LEGACY_DARK_MODE_KEY)?;
        Ok(theme)
    }
}

fn reflect(theme: Theme, root: &mut Root) {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    match theme {
        Theme::Dark => root.add_class(DARK_CLASS),
        Theme::Light => root.remove_class(DARK_CLASS),
    }
}
