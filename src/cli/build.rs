// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use eyre::{eyre, WrapErr};

use crate::{
    assets_sync, config,
    environment::{self, BuildMode, CUSTOM_HEAD_HTML},
    fragment::SiteSource,
    page::Page,
    storage::FileStorage,
    writer::PageWriter,
};

#[derive(clap::Args)]
pub struct BuildCommand {
    /// Path to the configuration file (e.g., "Folio.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,
}

/// This function invoked the [`environment::init_environment`] function to initialize the environment.
pub fn build(command: &BuildCommand) -> eyre::Result<()> {
    build_with(&command.config, BuildMode::Build)
}

pub fn build_with(config: &str, mode: BuildMode) -> eyre::Result<()> {
    environment::init_environment(Utf8PathBuf::from(config), mode)?;
    let root = environment::root_dir();
    let site = &environment::config().site;

    let mut page = open_page()?;
    if let Err(err) = page.load_dictionary() {
        color_print::ceprintln!("<y>Warning: {:#}. Keeping fragment content.</>", err);
    }
    page.ready(&SiteSource::new(root)?);

    let output = environment::output_dir();
    let writer = PageWriter::new(&output, &site.title, &CUSTOM_HEAD_HTML, site.default_locale);
    let first = page.current_lang();
    for locale in [first, first.next()] {
        if locale != page.current_lang() {
            if let Err(err) = page.switch_locale(locale) {
                color_print::ceprintln!("<y>Warning: {:#}. Skipping the `{}` page.</>", err, locale);
                continue;
            }
        }
        let path = writer
            .write(&page)
            .wrap_err_with(|| eyre!("failed to build site `{}`", root))?;
        println!("Output: {}", path);
    }

    sync_assets_dir()?;
    Ok(())
}

/// Open the page with the state persisted under the site's cache directory.
pub fn open_page() -> eyre::Result<Page> {
    let storage = FileStorage::open(environment::storage_path())?;
    Ok(Page::new(
        environment::config(),
        environment::locales_dir(),
        Box::new(storage),
    ))
}

/// Synchronize the assets directory [`environment::assets_dir`] with the
/// output directory [`environment::output_dir`].
fn sync_assets_dir() -> eyre::Result<bool> {
    let assets_dir = environment::assets_dir();
    let Some(name) = assets_dir.file_name() else {
        return Ok(true);
    };
    let target = environment::output_dir().join(name);
    assets_sync::sync_assets(&assets_dir, &target)
}
