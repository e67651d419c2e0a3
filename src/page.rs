// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8Path;

use crate::{
    config::{fragments::Fragment, Config},
    document::Document,
    fragment::{FragmentLoader, FragmentSource},
    i18n::{store::Listener, I18n, I18nEvent, Locale, Translator},
    nav::{MobileMenu, SmoothScroll},
    render::{Renderer, Section},
    storage::Storage,
    toggle::{
        lang::LangToggle,
        theme::{Theme, ThemeToggle},
    },
};

/// The composed page together with its UI state.
pub struct Page {
    pub document: Document,
    pub menu: MobileMenu,
    pub scroll: SmoothScroll,
    i18n: I18n,
    theme: ThemeToggle,
    storage: Box<dyn Storage>,
    fragments: Vec<Fragment>,
}

impl Page {
    /// Set up the page and register the listeners that keep it localized:
    /// section rendering, key-based rehydration and the lang toggle label.
    pub fn new<P: AsRef<Utf8Path>>(config: &Config, locales_dir: P, storage: Box<dyn Storage>) -> Self {
        let mut document = Document::with_sections();
        let theme = ThemeToggle::init(&*storage, &mut document.root);
        let i18n = I18n::init(locales_dir, config.site.default_locale, &*storage);

        let mut page = Self {
            document,
            menu: MobileMenu::default(),
            scroll: SmoothScroll::new(config.site.header_offset),
            i18n,
            theme,
            storage,
            fragments: config.fragments.clone(),
        };
        reflect_lang(I18nEvent::Loaded, &page.i18n, &mut page.document);

        let renderer = Renderer::from_config(config);
        page.on_i18n(Box::new(move |_: I18nEvent, t: &dyn Translator, document: &mut Document| {
            renderer.render_all(t, document)
        }));
        page.on_i18n(Box::new(|_: I18nEvent, t: &dyn Translator, document: &mut Document| {
            document.rehydrate(t)
        }));
        page.on_i18n(Box::new(reflect_lang));
        page
    }

    pub fn on_i18n(&mut self, listener: Listener) {
        self.i18n.subscribe(listener);
    }

    /// Load every configured fragment. Containers owned by a section
    /// renderer are left alone once a dictionary is available.
    pub fn ready(&mut self, source: &dyn FragmentSource) {
        let loaded = self.i18n.is_loaded();
        let translator: Option<&dyn Translator> = if loaded { Some(&self.i18n) } else { None };
        FragmentLoader::new(&self.fragments).load_all(&mut self.document, source, translator, |id| {
            loaded && Section::from_container_id(id).is_some()
        });
    }

    pub fn load_dictionary(&mut self) -> eyre::Result<()> {
        self.i18n.load(&mut self.document)
    }

    /// Render the page in `locale` without persisting it.
    pub fn switch_locale(&mut self, locale: Locale) -> eyre::Result<()> {
        self.i18n.load_locale(locale, &mut self.document)
    }

    pub fn toggle_lang(&mut self) -> eyre::Result<Locale> {
        LangToggle::toggle(&mut self.i18n, &mut *self.storage, &mut self.document)
    }

    pub fn toggle_theme(&mut self) -> eyre::Result<Theme> {
        self.theme.toggle(&mut *self.storage, &mut self.document.root)
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn current_lang(&self) -> Locale {
        self.i18n.current_lang()
    }

    pub fn is_loaded(&self) -> bool {
        self.i18n.is_loaded()
    }

    pub fn translator(&self) -> &dyn Translator {
        &self.i18n
    }

    #[cfg(test)]
    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }
}

fn reflect_lang(event: I18nEvent, translator: &dyn Translator, document: &mut Document) {
    document
        .root
        .set_attribute("lang", translator.current_lang().html_lang());
    LangToggle::update_label(event, translator, document);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        fragment::FetchError,
        i18n::store::LANG_KEY,
        render::tests::{structure, EN, ZH},
        storage::MemoryStorage,
        toggle::{theme::THEME_KEY, LANG_TOGGLE_CLASS},
    };

    struct StaticSource(HashMap<&'static str, &'static str>);

    impl FragmentSource for StaticSource {
        fn fetch(&self, resource: &str) -> Result<String, FetchError> {
            self.0
                .get(resource)
                .map(|html| html.to_string())
                .ok_or_else(|| FetchError::Status {
                    resource: resource.to_string(),
                    status: 404,
                })
        }
    }

    fn source() -> StaticSource {
        StaticSource(HashMap::from([
            ("./components/about.html", r#"<h1 data-i18n="about.name_full">Name</h1>"#),
            ("./components/education.html", "<p>education</p>"),
            ("./components/projects.html", "<p>projects</p>"),
            ("./components/publications.html", "<p>publications</p>"),
        ]))
    }

    fn locales() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), EN).unwrap();
        std::fs::write(dir.path().join("zh.json"), ZH).unwrap();
        dir
    }

    fn page(dir: &tempfile::TempDir, storage: MemoryStorage) -> Page {
        let root = Utf8Path::from_path(dir.path()).unwrap();
        Page::new(&Config::default(), root, Box::new(storage))
    }

    #[test]
    fn test_ready_without_dictionary() {
        let dir = locales();
        let mut page = page(&dir, MemoryStorage::default());
        page.ready(&source());

        assert_eq!(page.document.container("education-container"), Some("<p>education</p>"));
        assert_eq!(
            page.document.container("experience-container"),
            Some(r#"<p class="text-red-500">Failed to load ./components/experience.html</p>"#)
        );
        assert_eq!(page.document.container("about-container"), Some(r#"<h1 data-i18n="about.name_full">Name</h1>"#));
        assert_eq!(page.document.control_label(LANG_TOGGLE_CLASS), Some("中"));
        assert_eq!(page.document.root.attribute("lang"), Some("en"));
    }

    #[test]
    fn test_dictionary_overwrites_fragments() {
        let dir = locales();
        let mut page = page(&dir, MemoryStorage::default());
        page.ready(&source());
        page.load_dictionary().unwrap();

        let renderer = Renderer::from_config(&Config::default());
        for section in Section::ALL {
            assert_eq!(
                page.document.container(section.container_id().as_str()),
                Some(renderer.render(section, page.translator()).as_str())
            );
        }
    }

    #[test]
    fn test_ready_after_dictionary_skips_sections() {
        let dir = locales();
        let mut page = page(&dir, MemoryStorage::default());
        page.load_dictionary().unwrap();
        let rendered = page.document.container("education-container").unwrap().to_string();
        page.ready(&source());
        assert_eq!(page.document.container("education-container"), Some(rendered.as_str()));
    }

    #[test]
    fn test_toggle_lang_rerenders() {
        let dir = locales();
        let mut page = page(&dir, MemoryStorage::default());
        page.load_dictionary().unwrap();
        let en = page.document.container("experience-container").unwrap().to_string();

        assert_eq!(page.toggle_lang().unwrap(), Locale::Zh);
        let zh = page.document.container("experience-container").unwrap().to_string();
        assert_ne!(en, zh);
        assert_eq!(structure(&en), structure(&zh));
        assert_eq!(page.document.control_label(LANG_TOGGLE_CLASS), Some("EN"));
        assert_eq!(page.document.root.attribute("lang"), Some("zh-CN"));
        assert_eq!(page.storage().get(LANG_KEY).as_deref(), Some("zh"));

        assert_eq!(page.toggle_lang().unwrap(), Locale::En);
        assert_eq!(page.document.container("experience-container"), Some(en.as_str()));
    }

    #[test]
    fn test_switch_locale_is_not_persisted() {
        let dir = locales();
        let mut page = page(&dir, MemoryStorage::default());
        page.load_dictionary().unwrap();
        page.switch_locale(Locale::Zh).unwrap();
        assert_eq!(page.current_lang(), Locale::Zh);
        assert_eq!(page.storage().get(LANG_KEY), None);
    }

    #[test]
    fn test_persisted_state_is_restored() {
        let dir = locales();
        let storage = MemoryStorage::with([(LANG_KEY, "zh"), ("darkMode", "true")]);
        let mut page = page(&dir, storage);
        assert_eq!(page.current_lang(), Locale::Zh);
        assert_eq!(page.theme(), Theme::Dark);
        assert!(page.document.root.has_class("dark"));

        let before = page.document.container("about-container").unwrap().to_string();
        page.toggle_theme().unwrap();
        assert_eq!(page.storage().get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(page.document.container("about-container"), Some(before.as_str()));
    }
}
