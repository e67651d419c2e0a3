// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::WrapErr;
use serde_json::Value;

use crate::{document::Document, storage::Storage};

use super::{Dictionary, Locale, Translator};

pub const LANG_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I18nEvent {
    /// The first dictionary finished loading.
    Loaded,

    /// A dictionary for another locale replaced the current one.
    LocaleChanged(Locale),
}

pub type Listener = Box<dyn FnMut(I18nEvent, &dyn Translator, &mut Document)>;

/// The translation subsystem: the active locale, its dictionary, and the
/// listeners notified after each successful load.
pub struct I18n {
    dir: Utf8PathBuf,
    current: Locale,
    dictionary: Option<Dictionary>,
    listeners: Vec<Listener>,
}

impl I18n {
    /// The persisted locale wins over `default`.
    pub fn init<P: AsRef<Utf8Path>>(dir: P, default: Locale, storage: &dyn Storage) -> Self {
        let current = storage
            .get(LANG_KEY)
            .and_then(|code| code.parse().ok())
            .unwrap_or(default);
        Self {
            dir: dir.as_ref().to_owned(),
            current,
            dictionary: None,
            listeners: vec![],
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.dictionary.is_some()
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Load the dictionary of the current locale and emit [`I18nEvent::Loaded`].
    pub fn load(&mut self, document: &mut Document) -> eyre::Result<()> {
        let dictionary = Dictionary::load(&self.dir, self.current)?;
        self.install(dictionary);
        self.emit(I18nEvent::Loaded, document);
        Ok(())
    }

    /// Switch to `locale` without persisting it. The current locale is kept
    /// if its dictionary fails to load.
    pub fn load_locale(&mut self, locale: Locale, document: &mut Document) -> eyre::Result<()> {
        let dictionary = Dictionary::load(&self.dir, locale)?;
        self.install(dictionary);
        self.emit(I18nEvent::LocaleChanged(locale), document);
        Ok(())
    }

    /// Switch to `locale` and persist the choice.
    pub fn change_lang(
        &mut self,
        locale: Locale,
        storage: &mut dyn Storage,
        document: &mut Document,
    ) -> eyre::Result<()> {
        let dictionary = Dictionary::load(&self.dir, locale)?;
        storage
            .set(LANG_KEY, locale.code())
            .wrap_err("failed to persist language")?;
        self.install(dictionary);
        self.emit(I18nEvent::LocaleChanged(locale), document);
        Ok(())
    }

    #[cfg(test)]
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dir: Utf8PathBuf::new(),
            current: dictionary.locale(),
            dictionary: Some(dictionary),
            listeners: vec![],
        }
    }

    fn install(&mut self, dictionary: Dictionary) {
        self.current = dictionary.locale();
        self.dictionary = Some(dictionary);
    }

    fn emit(&mut self, event: I18nEvent, document: &mut Document) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(event, &*self, document);
        }
        // Listeners registered while emitting go after the existing ones.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}

impl Translator for I18n {
    fn value(&self, key: &str) -> Option<&Value> {
        self.dictionary.as_ref()?.value(key)
    }

    fn current_lang(&self) -> Locale {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::storage::MemoryStorage;

    fn locales_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{ "greeting": "Hello" }"#).unwrap();
        std::fs::write(dir.path().join("zh.json"), r#"{ "greeting": "你好" }"#).unwrap();
        dir
    }

    fn utf8(dir: &tempfile::TempDir) -> &Utf8Path {
        Utf8Path::from_path(dir.path()).unwrap()
    }

    #[test]
    fn test_init_prefers_persisted_locale() {
        let storage = MemoryStorage::with([(LANG_KEY, "zh")]);
        assert_eq!(I18n::init("locales", Locale::En, &storage).current_lang(), Locale::Zh);

        let storage = MemoryStorage::with([(LANG_KEY, "fr")]);
        assert_eq!(I18n::init("locales", Locale::En, &storage).current_lang(), Locale::En);
    }

    #[test]
    fn test_lookup_before_load_returns_key() {
        let i18n = I18n::init("locales", Locale::En, &MemoryStorage::default());
        assert!(!i18n.is_loaded());
        assert_eq!(i18n.get("greeting").text(), "greeting");
    }

    #[test]
    fn test_events_in_order() {
        let dir = locales_dir();
        let mut storage = MemoryStorage::default();
        let mut document = Document::default();
        let mut i18n = I18n::init(utf8(&dir), Locale::En, &storage);

        let seen = Rc::new(RefCell::new(vec![]));
        let sink = seen.clone();
        i18n.subscribe(Box::new(move |event: I18nEvent, t: &dyn Translator, _: &mut Document| {
            sink.borrow_mut().push((event, t.get("greeting").text().into_owned()));
        }));

        i18n.load(&mut document).unwrap();
        i18n.change_lang(Locale::Zh, &mut storage, &mut document).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                (I18nEvent::Loaded, "Hello".to_string()),
                (I18nEvent::LocaleChanged(Locale::Zh), "你好".to_string()),
            ]
        );
        assert_eq!(storage.get(LANG_KEY).as_deref(), Some("zh"));
    }

    #[test]
    fn test_failed_change_keeps_locale_and_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{ "greeting": "Hello" }"#).unwrap();
        let mut storage = MemoryStorage::default();
        let mut document = Document::default();
        let mut i18n = I18n::init(utf8(&dir), Locale::En, &storage);
        i18n.load(&mut document).unwrap();

        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        i18n.subscribe(Box::new(move |_: I18nEvent, _: &dyn Translator, _: &mut Document| {
            *sink.borrow_mut() += 1
        }));

        assert!(i18n.change_lang(Locale::Zh, &mut storage, &mut document).is_err());
        assert_eq!(i18n.current_lang(), Locale::En);
        assert_eq!(i18n.get("greeting").text(), "Hello");
        assert_eq!(storage.get(LANG_KEY), None);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_load_locale_does_not_persist() {
        let dir = locales_dir();
        let storage = MemoryStorage::default();
        let mut document = Document::default();
        let mut i18n = I18n::init(utf8(&dir), Locale::En, &storage);
        i18n.load_locale(Locale::Zh, &mut document).unwrap();
        assert_eq!(i18n.current_lang(), Locale::Zh);
        assert_eq!(storage.get(LANG_KEY), None);
    }
}
