// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod about;
pub mod education;
pub mod experience;
pub mod projects;
pub mod publications;
pub mod tags;

use crate::{
    config::{projects::ProjectDecoration, site::SocialLink, timeline::TimelineDecoration, Config},
    container::ContainerId,
    document::Document,
    i18n::Translator,
};

use tags::TagPalette;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Education,
    Experience,
    Projects,
    Publications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Publications,
    ];

    /// Top-level key of the section's record in the dictionary.
    pub fn key(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Publications => "publications",
        }
    }

    pub fn container_id(self) -> ContainerId {
        ContainerId::new(format!("{}-container", self.key()))
    }

    pub fn fragment_path(self) -> String {
        format!("./components/{}.html", self.key())
    }

    pub fn from_container_id(id: ContainerId) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.container_id() == id)
    }
}

/// Synthesizes localized section markup. Everything that does not vary
/// with the locale comes from the site configuration.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub avatar: String,
    pub author: String,
    pub links: Vec<SocialLink>,
    pub tags: TagPalette,
    pub projects: Vec<ProjectDecoration>,
    pub education: TimelineDecoration,
    pub experience: TimelineDecoration,
}

impl Renderer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            avatar: config.site.avatar.clone(),
            author: config.site.author.clone(),
            links: config.site.links.clone(),
            tags: TagPalette::new(config.tags.colors.clone(), &config.tags.fallback),
            projects: config.projects.clone(),
            education: config.education.clone(),
            experience: config.experience.clone(),
        }
    }

    pub fn render(&self, section: Section, translator: &dyn Translator) -> String {
        match section {
            Section::About => about::render(self, translator),
            Section::Education => education::render(self, translator),
            Section::Experience => experience::render(self, translator),
            Section::Projects => projects::render(self, translator),
            Section::Publications => publications::render(translator),
        }
    }

    /// Render one section and overwrite its container.
    pub fn render_into(&self, section: Section, translator: &dyn Translator, document: &mut Document) {
        let html = self.render(section, translator);
        document.set_content(section.container_id(), html);
    }

    pub fn render_all(&self, translator: &dyn Translator, document: &mut Document) {
        for section in Section::ALL {
            self.render_into(section, translator, document);
        }
    }
}
