// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

pub const DEFAULT_LOCALES_DIR: &str = "locales";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_HEADER_OFFSET: i32 = 80;

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Site {
    pub title: String,
    pub author: String,
    pub avatar: String,
    pub locales: String,
    pub assets: String,
    pub default_locale: Locale,

    /// Height of the fixed page header, subtracted from smooth-scroll targets.
    pub header_offset: i32,
    pub links: Vec<SocialLink>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),
            avatar: "./assets/images/avatar.png".to_string(),
            locales: DEFAULT_LOCALES_DIR.to_string(),
            assets: DEFAULT_ASSETS_DIR.to_string(),
            default_locale: Locale::En,
            header_offset: DEFAULT_HEADER_OFFSET,
            links: vec![],
        }
    }
}

#[derive(Deserialize, Debug, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SocialLink {
    pub href: String,
    pub icon: String,

    /// Extra classes applied on hover, e.g. `hover:text-blue-400`.
    #[serde(default)]
    pub hover: String,
}
