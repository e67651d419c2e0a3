// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};

use crate::{
    config::{self, Config},
    html_flake::i18n_attr,
    i18n::{Dictionary, Locale},
    render::Section,
};

#[derive(clap::Args)]
pub struct NewCommand {
    /// Path to the new site.
    #[arg(required = true)]
    pub path: Utf8PathBuf,
}

const EN_JSON: &str = include_str!("../include/en.json");
const ZH_JSON: &str = include_str!("../include/zh.json");

pub fn new_site(command: &NewCommand) -> eyre::Result<()> {
    let site_path = &command.path;
    if site_path.exists() {
        return Err(eyre!("Already exists: {}", site_path));
    }

    std::fs::create_dir_all(site_path).wrap_err("failed to create site directory")?;
    println!("Created new site at: {}", site_path);

    let config = Config::default();
    new_config(&site_path.join(config::DEFAULT_CONFIG_PATH), &config)?;

    let locales_dir = site_path.join(&config.site.locales);
    create_dir(&locales_dir)?;
    for locale in Locale::ALL {
        let json = match locale {
            Locale::En => EN_JSON,
            Locale::Zh => ZH_JSON,
        };
        write_file(&Dictionary::path(&locales_dir, locale), json)?;
    }

    for section in Section::ALL {
        let path = site_path.join(section.fragment_path());
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        write_file(&path, &fragment_template(section))?;
    }

    create_dir(&site_path.join(&config.site.assets).join("images"))?;
    Ok(())
}

fn new_config(config_path: &Utf8Path, config: &Config) -> eyre::Result<()> {
    let toml = toml::to_string(config).wrap_err("failed to serialize default config")?;
    std::fs::write(config_path, toml).wrap_err("failed to create default config file")?;
    println!("Created new config at: {}", config_path);
    Ok(())
}

fn create_dir(path: &Utf8Path) -> eyre::Result<()> {
    std::fs::create_dir_all(path).wrap_err_with(|| eyre!("failed to create directory `{}`", path))
}

fn write_file(path: &Utf8Path, content: &str) -> eyre::Result<()> {
    std::fs::write(path, content).wrap_err_with(|| eyre!("failed to create file `{}`", path))?;
    println!("Created: {}", path);
    Ok(())
}

/// Static fallback markup, shown until a dictionary is available.
fn fragment_template(section: Section) -> String {
    let key = section.key();
    match section {
        Section::About => format!(
            "<h1 class=\"text-4xl font-extrabold mb-4\"{}>{key}.name_full</h1>\n<p{}>{key}.title</p>\n",
            i18n_attr(&format!("{key}.name_full")),
            i18n_attr(&format!("{key}.title")),
        ),
        _ => format!(
            "<section id=\"{key}\">\n  <h2 class=\"text-2xl font-bold mb-10\"{}>{key}.title</h2>\n</section>\n",
            i18n_attr(&format!("{key}.title")),
        ),
    }
}
