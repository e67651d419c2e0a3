// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use eyre::{eyre, WrapErr};

use crate::{
    cli::build::open_page,
    config,
    environment::{self, BuildMode},
};

#[derive(clap::Args)]
pub struct LangCommand {
    #[command(subcommand)]
    pub action: Option<LangAction>,

    /// Path to the configuration file (e.g., "Folio.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,
}

#[derive(clap::Subcommand, Clone, Copy)]
pub enum LangAction {
    /// Print the persisted locale.
    Show,

    /// Switch to the other locale, and persist the choice.
    ///
    /// The locale file of the other locale must load.
    Toggle,
}

pub fn lang(command: &LangCommand) -> eyre::Result<()> {
    environment::init_environment(Utf8PathBuf::from(&command.config), BuildMode::Build)?;
    let mut page = open_page()?;

    match command.action.unwrap_or(LangAction::Show) {
        LangAction::Show => println!("{}", page.current_lang()),
        LangAction::Toggle => {
            let next = page.current_lang().next();
            let locale = page
                .toggle_lang()
                .wrap_err_with(|| eyre!("failed to switch to `{}`", next))?;
            println!("Language: {} (toggle shows {})", locale, locale.toggle_label());
        }
    }
    Ok(())
}
