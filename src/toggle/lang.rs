// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::{
    document::Document,
    i18n::{I18n, I18nEvent, Locale, Translator},
    storage::Storage,
};

use super::LANG_TOGGLE_CLASS;

pub struct LangToggle;

impl LangToggle {
    /// The label names the locale the control switches to.
    pub fn label(translator: &dyn Translator) -> &'static str {
        translator.current_lang().toggle_label()
    }

    pub fn next(translator: &dyn Translator) -> Locale {
        translator.current_lang().next()
    }

    /// Ask the translation subsystem for the other locale. Rendering happens
    /// in its listeners once the dictionary is in.
    pub fn toggle(i18n: &mut I18n, storage: &mut dyn Storage, document: &mut Document) -> eyre::Result<Locale> {
        let next = Self::next(&*i18n);
        i18n.change_lang(next, storage, document)?;
        Ok(next)
    }

    /// Listener keeping every lang toggle label in sync with the locale.
    pub fn update_label(_: I18nEvent, translator: &dyn Translator, document: &mut Document) {
        document.set_control_label(LANG_TOGGLE_CLASS, Self::label(translator));
    }
}
