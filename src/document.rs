// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use indexmap::{IndexMap, IndexSet};

use crate::{container::ContainerId, i18n::Translator, markup, render::Section};

/// Attributes and classes of the page's root element.
#[derive(Debug, Default, Clone)]
pub struct Root {
    attributes: IndexMap<String, String>,
    classes: IndexSet<String>,
}

impl Root {
    #[cfg(test)]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.shift_remove(class);
    }

    pub fn class_list(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

/// The composed page: its root element, the named containers in page
/// order, and the text of the page controls (`lang-toggle`, ...).
#[derive(Debug, Default)]
pub struct Document {
    pub root: Root,
    containers: IndexMap<ContainerId, String>,
    controls: IndexMap<String, String>,
}

impl Document {
    pub fn new<I: IntoIterator<Item = ContainerId>>(ids: I) -> Self {
        Self {
            root: Root::default(),
            containers: ids.into_iter().map(|id| (id, String::new())).collect(),
            controls: IndexMap::new(),
        }
    }

    /// A page with the five section containers, all empty.
    pub fn with_sections() -> Self {
        Self::new(Section::ALL.iter().map(|s| s.container_id()))
    }

    pub fn has_container(&self, id: ContainerId) -> bool {
        self.containers.contains_key(&id)
    }

    #[cfg(test)]
    pub fn container(&self, id: &str) -> Option<&str> {
        self.containers.get(&ContainerId::new(id)).map(String::as_str)
    }

    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &str)> {
        self.containers.iter().map(|(id, html)| (*id, html.as_str()))
    }

    /// Replace the whole content of a container. Returns `false` when the
    /// page has no such container.
    pub fn set_content(&mut self, id: ContainerId, html: String) -> bool {
        match self.containers.get_mut(&id) {
            Some(content) => {
                *content = html;
                true
            }
            None => false,
        }
    }

    /// Re-apply key-based translations to the tagged elements of one container.
    pub fn rehydrate_container(&mut self, id: ContainerId, translator: &dyn Translator) {
        if let Some(content) = self.containers.get_mut(&id) {
            if let Some(translated) = markup::translate_tagged(content, translator) {
                *content = translated;
            }
        }
    }

    /// Re-apply key-based translations in every container.
    pub fn rehydrate(&mut self, translator: &dyn Translator) {
        for content in self.containers.values_mut() {
            if let Some(translated) = markup::translate_tagged(content, translator) {
                *content = translated;
            }
        }
    }

    pub fn control_label(&self, class: &str) -> Option<&str> {
        self.controls.get(class).map(String::as_str)
    }

    pub fn set_control_label(&mut self, class: &str, label: &str) {
        self.controls.insert(class.to_string(), label.to_string());
    }
}
