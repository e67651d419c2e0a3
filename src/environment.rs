// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::sync::{LazyLock, OnceLock};

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};

use crate::config::{self, Config};

pub struct Environment {
    /// Specifies the site root path.
    ///
    /// Always derived from the location of the toml configuration file.
    pub root: Utf8PathBuf,
    pub config: Config,
    pub build_mode: BuildMode,
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

fn get_environment() -> &'static Environment {
    ENVIRONMENT.get().expect("environment must be initialized")
}

pub fn config() -> &'static Config {
    &get_environment().config
}

pub fn init_environment(toml_file: Utf8PathBuf, build_mode: BuildMode) -> eyre::Result<()> {
    let toml_file = config::find_config(toml_file)?;
    let root = match toml_file.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_owned(),
        _ => Utf8PathBuf::from("./"),
    };
    let toml = std::fs::read_to_string(&toml_file)
        .wrap_err_with(|| eyre!("failed to read configuration file `{}`", toml_file))?;

    _ = ENVIRONMENT.set(Environment {
        root,
        config: config::parse_config(&toml)?,
        build_mode,
    });
    Ok(())
}

/// Mock environment for testing purposes.
#[allow(dead_code)]
pub fn mock_environment() -> eyre::Result<()> {
    _ = ENVIRONMENT.set(Environment {
        root: "./".into(),
        config: Config::default(),
        build_mode: BuildMode::Build,
    });
    Ok(())
}

#[derive(Clone, Copy)]
pub enum BuildMode {
    /// Build mode for the `folio build` command.
    Build,

    /// Serve mode for the `folio serve` command.
    Serve,
}

/// Extra markup inserted at the end of `<head>`, e.g. stylesheets and fonts.
pub static CUSTOM_HEAD_HTML: LazyLock<String> = LazyLock::new(|| {
    std::fs::read_to_string(root_dir().join("import-head.html")).unwrap_or_default()
});

pub const CACHE_DIR_NAME: &str = ".cache";
pub const STORAGE_FILE_NAME: &str = "storage.json";

pub fn root_dir() -> &'static Utf8Path {
    &get_environment().root
}

pub fn output_dir() -> Utf8PathBuf {
    let output_dir = match get_environment().build_mode {
        BuildMode::Build => &config().build.output,
        BuildMode::Serve => &config().serve.output,
    };
    root_dir().join(output_dir)
}

pub fn locales_dir() -> Utf8PathBuf {
    root_dir().join(&config().site.locales)
}

pub fn assets_dir() -> Utf8PathBuf {
    root_dir().join(&config().site.assets)
}

pub fn cache_dir() -> Utf8PathBuf {
    root_dir().join(CACHE_DIR_NAME)
}

pub fn storage_path() -> Utf8PathBuf {
    cache_dir().join(STORAGE_FILE_NAME)
}

pub fn serve_command() -> Vec<String> {
    config().serve.command.clone()
}

/// Local directories holding the configured fragments.
pub fn fragment_dirs() -> Vec<Utf8PathBuf> {
    crate::fragment::local_dirs(root_dir(), &config().fragments)
}
