// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use serde_json::Value;

use super::{Locale, Translator};

/// Translation data of one locale, e.g. `locales/en.json`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    data: Value,
}

impl Dictionary {
    pub fn new(locale: Locale, data: Value) -> Self {
        Self { locale, data }
    }

    pub fn from_json(locale: Locale, json: &str) -> eyre::Result<Self> {
        let data: Value = serde_json::from_str(json)
            .wrap_err_with(|| eyre!("failed to parse `{}` translations", locale))?;
        if !data.is_object() {
            return Err(eyre!("`{}` translations must be a JSON object", locale));
        }
        Ok(Self::new(locale, data))
    }

    pub fn path(dir: &Utf8Path, locale: Locale) -> Utf8PathBuf {
        dir.join(format!("{}.json", locale.code()))
    }

    pub fn load(dir: &Utf8Path, locale: Locale) -> eyre::Result<Self> {
        let path = Self::path(dir, locale);
        let json = std::fs::read_to_string(&path)
            .wrap_err_with(|| eyre!("failed to read translations `{}`", path))?;
        Self::from_json(locale, &json).wrap_err_with(|| eyre!("invalid translations `{}`", path))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a dotted key such as `experience.item1.tasks.0.title`.
    /// Numeric segments index into arrays.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.data, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl Translator for Dictionary {
    fn value(&self, key: &str) -> Option<&Value> {
        self.lookup(key).filter(|value| !value.is_null())
    }

    fn current_lang(&self) -> Locale {
        self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_json(
            Locale::En,
            r#"{
                "about": { "name_full": "Jane Doe" },
                "experience": { "item1": { "tasks": [ { "title": "Build" } ] } },
                "empty": null
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_nested_lookup() {
        let dict = sample();
        assert_eq!(dict.get("about.name_full").text(), "Jane Doe");
        assert_eq!(dict.get("experience.item1.tasks.0.title").text(), "Build");
        assert!(dict.get("about").scalar().is_none());
        assert!(!dict.get("about").is_missing());
    }

    #[test]
    fn test_missing_returns_key() {
        let dict = sample();
        assert_eq!(dict.get("about.nickname").text(), "about.nickname");
        assert_eq!(dict.get("experience.item1.tasks.9.title").text(), "experience.item1.tasks.9.title");
        assert_eq!(dict.get("about.name_full.deeper").text(), "about.name_full.deeper");
        assert!(dict.get("empty").is_missing());
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(Dictionary::from_json(Locale::Zh, "[1, 2]").is_err());
        assert!(Dictionary::from_json(Locale::Zh, "{ not json").is_err());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(root.join("zh.json"), r#"{ "publications": { "title": "论文" } }"#).unwrap();

        let dict = Dictionary::load(root, Locale::Zh).unwrap();
        assert_eq!(dict.current_lang(), Locale::Zh);
        assert_eq!(dict.get("publications.title").text(), "论文");
        assert!(Dictionary::load(root, Locale::En).is_err());
    }
}
