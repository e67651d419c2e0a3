// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod build;
pub mod fragments;
pub mod projects;
pub mod serve;
pub mod site;
pub mod tags;
pub mod timeline;

use build::Build;
use camino::Utf8PathBuf;
use fragments::Fragment;
use projects::ProjectDecoration;
use serde::{Deserialize, Serialize};
use serve::Serve;
use site::Site;
use tags::Tags;
use timeline::TimelineDecoration;

pub const DEFAULT_CONFIG_PATH: &str = "./Folio.toml";

#[derive(Deserialize, Debug, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: Site,

    #[serde(default)]
    pub build: Build,

    #[serde(default)]
    pub serve: Serve,

    #[serde(default)]
    pub tags: Tags,

    #[serde(default = "timeline::default_education")]
    pub education: TimelineDecoration,

    #[serde(default = "timeline::default_experience")]
    pub experience: TimelineDecoration,

    #[serde(default = "fragments::default_fragments")]
    pub fragments: Vec<Fragment>,

    #[serde(default = "projects::default_projects")]
    pub projects: Vec<ProjectDecoration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: Site::default(),
            build: Build::default(),
            serve: Serve::default(),
            tags: Tags::default(),
            education: timeline::default_education(),
            experience: timeline::default_experience(),
            fragments: fragments::default_fragments(),
            projects: projects::default_projects(),
        }
    }
}

/// Try to find toml file in the current directory or the parent directory.
pub fn find_config(mut toml_file: Utf8PathBuf) -> eyre::Result<Utf8PathBuf> {
    if !toml_file.exists() {
        let parent = match toml_file.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent.canonicalize_utf8()?,
            _ => Utf8PathBuf::from(".").canonicalize_utf8()?,
        };
        let parent = parent
            .parent()
            .ok_or_else(|| eyre::eyre!("cannot find configuration file: {}", toml_file))?;

        toml_file = parent.join(DEFAULT_CONFIG_PATH);
        if !toml_file.exists() {
            return Err(eyre::eyre!("cannot find configuration file: {}", toml_file));
        }
    }
    Ok(toml_file)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre::eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use crate::i18n::Locale;

    #[test]
    fn test_empty_toml() {
        let serve = crate::config::Serve::default();
        let config = crate::config::parse_config("").unwrap();

        assert_eq!(config.site.locales, "locales");
        assert_eq!(config.site.assets, "assets");
        assert_eq!(config.site.default_locale, Locale::En);
        assert_eq!(config.site.header_offset, 80);
        assert_eq!(config.build.output, "./publish");
        assert_eq!(config.serve.output, serve.output);
        assert_eq!(config.fragments.len(), 5);
        assert_eq!(config.fragments[0].id, "about-container");
        assert_eq!(config.fragments[0].resource, "./components/about.html");
        assert_eq!(config.tags.fallback, "gray");
        assert_eq!(config.tags.colors.get("DeepSpeed").unwrap(), "purple");
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.education.link, "https://example.edu/cs/");
        assert_eq!(config.experience.logo, "./assets/images/lab.png");
    }

    #[test]
    fn test_simple_toml() {
        let config = crate::config::parse_config(
            r#"
            [site]
            title = "Jane Doe"
            default-locale = "zh"
            header-offset = 64

            [[site.links]]
            href = "https://github.com/jane"
            icon = "fa-brands fa-github"

            [build]
            output = "./dist"

            [tags]
            fallback = "slate"

            [tags.colors]
            "Rust" = "orange"

            [education]
            link = "https://u.edu/"

            [[fragments]]
            id = "about-container"
            resource = "https://example.com/about.html"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Jane Doe");
        assert_eq!(config.site.default_locale, Locale::Zh);
        assert_eq!(config.site.header_offset, 64);
        assert_eq!(config.site.links.len(), 1);
        assert_eq!(config.site.links[0].hover, "");
        assert_eq!(config.build.output, "./dist");
        assert_eq!(config.tags.fallback, "slate");
        assert_eq!(config.tags.colors.len(), 1);
        assert_eq!(config.fragments.len(), 1);
        assert_eq!(config.fragments[0].resource, "https://example.com/about.html");
        assert_eq!(config.education.link, "https://u.edu/");
        assert_eq!(config.education.logo, "");
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let result = crate::config::parse_config(
            r#"
            [site]
            default-locale = "fr"
            "#,
        );
        assert!(result.is_err());
    }
}
