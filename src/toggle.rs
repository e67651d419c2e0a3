// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod lang;
pub mod theme;

/// Class names identifying the page controls.
pub const THEME_TOGGLE_CLASS: &str = "theme-toggle";
pub const LANG_TOGGLE_CLASS: &str = "lang-toggle";
pub const MOBILE_MENU_TOGGLE_CLASS: &str = "mobile-menu-toggle";
pub const MOBILE_MENU_CLASS: &str = "mobile-menu";
