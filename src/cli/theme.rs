// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;

use crate::{
    cli::build::open_page,
    config,
    environment::{self, BuildMode},
};

#[derive(clap::Args)]
pub struct ThemeCommand {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,

    /// Path to the configuration file (e.g., "Folio.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,
}

#[derive(clap::Subcommand, Clone, Copy)]
pub enum ThemeAction {
    /// Print the persisted theme.
    Show,

    /// Switch between light and dark, and persist the choice.
    Toggle,
}

pub fn theme(command: &ThemeCommand) -> eyre::Result<()> {
    environment::init_environment(Utf8PathBuf::from(&command.config), BuildMode::Build)?;
    let mut page = open_page()?;

    match command.action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => println!("{}", page.theme()),
        ThemeAction::Toggle => {
            let theme = page.toggle_theme()?;
            println!("Theme: {}", theme);
        }
    }
    Ok(())
}
