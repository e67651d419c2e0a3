// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod dictionary;
pub mod record;
pub mod store;

use std::{borrow::Cow, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use dictionary::Dictionary;
pub use record::Record;
pub use store::{I18n, I18nEvent};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,

    #[serde(rename = "zh")]
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Value of the `lang` attribute on the page root.
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh-CN",
        }
    }

    pub fn next(self) -> Locale {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }

    /// Short label of the control that switches away from `self`,
    /// i.e. the label names the other locale.
    pub fn toggle_label(self) -> &'static str {
        match self.next() {
            Locale::En => "EN",
            Locale::Zh => "中",
        }
    }
}

#[derive(Debug)]
pub struct ParseLocaleError(String);

impl Display for ParseLocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported locale `{}`, expected `en` or `zh`", self.0)
    }
}

impl std::error::Error for ParseLocaleError {}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of a key lookup. A missing key carries the key itself, which is
/// what gets displayed when a caller renders it anyway.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    Found(&'a Value),
    Missing(&'a str),
}

impl<'a> Lookup<'a> {
    #[cfg(test)]
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing(_))
    }

    /// Displayable text for scalar values, `None` for missing keys,
    /// objects, arrays and `null`.
    pub fn scalar(&self) -> Option<Cow<'a, str>> {
        let Lookup::Found(value) = *self else {
            return None;
        };
        match value {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }

    /// Displayable text, falling back to the key.
    pub fn text(&self) -> Cow<'a, str> {
        match (self.scalar(), *self) {
            (Some(text), _) => text,
            (None, Lookup::Missing(key)) => Cow::Borrowed(key),
            (None, Lookup::Found(value)) => Cow::Owned(value.to_string()),
        }
    }
}

/// The translation subsystem as seen by renderers.
pub trait Translator {
    /// Raw value at a dotted key, `None` when absent.
    fn value(&self, key: &str) -> Option<&Value>;

    fn current_lang(&self) -> Locale;

    fn get<'a>(&'a self, key: &'a str) -> Lookup<'a> {
        match self.value(key) {
            Some(value) => Lookup::Found(value),
            None => Lookup::Missing(key),
        }
    }

    /// Structured view over the value at `key`.
    fn record(&self, key: &str) -> Record<'_> {
        Record::new(key, self.value(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_alternates() {
        assert_eq!(Locale::En.next(), Locale::Zh);
        assert_eq!(Locale::Zh.next(), Locale::En);
        assert_eq!(Locale::En.next().next(), Locale::En);
    }

    #[test]
    fn test_label_names_other_locale() {
        assert_eq!(Locale::En.toggle_label(), "中");
        assert_eq!(Locale::Zh.toggle_label(), "EN");
        for locale in Locale::ALL {
            assert_eq!(locale.toggle_label(), locale.next().next().toggle_label());
            assert_ne!(locale.toggle_label(), locale.next().toggle_label());
        }
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!(Locale::En.to_string(), "en");
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_lookup_text() {
        let value = Value::String("Hello".to_string());
        assert_eq!(Lookup::Found(&value).text(), "Hello");
        assert_eq!(Lookup::Missing("about.name").text(), "about.name");
        assert!(Lookup::Missing("about.name").scalar().is_none());

        let object = serde_json::json!({ "a": 1 });
        assert!(Lookup::Found(&object).scalar().is_none());
        assert_eq!(Lookup::Found(&serde_json::json!(3)).scalar().unwrap(), "3");
    }
}
