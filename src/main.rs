// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

mod assets_sync;
mod cli;
mod config;
mod container;
mod document;
mod environment;
mod fragment;
mod html_flake;
mod html_macro;
mod i18n;
mod markup;
mod nav;
mod page;
mod render;
mod storage;
mod toggle;
mod writer;

use clap::Parser;

use crate::cli::{
    build::BuildCommand, lang::LangCommand, new::NewCommand, serve::ServeCommand,
    theme::ThemeCommand,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create a new folio site.
    #[command(visible_alias = "n")]
    New(NewCommand),

    /// Compose the page for every locale into the output directory.
    #[command(visible_alias = "b")]
    Build(BuildCommand),

    /// Serve the page at http://localhost:<port>, and rebuild it on changes.
    ///
    /// Server by default depends on the miniserve program in the user's environment.
    #[command(visible_alias = "s")]
    Serve(ServeCommand),

    /// Show or toggle the persisted light/dark theme.
    #[command(visible_alias = "t")]
    Theme(ThemeCommand),

    /// Show or toggle the persisted page language.
    #[command(visible_alias = "l")]
    Lang(LangCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::New(command) => crate::cli::new::new_site(command)?,
        Command::Build(command) => crate::cli::build::build(command)?,
        Command::Serve(command) => crate::cli::serve::serve(command)?,
        Command::Theme(command) => crate::cli::theme::theme(command)?,
        Command::Lang(command) => crate::cli::lang::lang(command)?,
    };
    Ok(())
}
