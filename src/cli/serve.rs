// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::eyre;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::{
    cli::build::build_with,
    config::{self, serve::OUTPUT_PLACEHOLDER},
    environment::{self, BuildMode},
};

#[derive(clap::Args)]
pub struct ServeCommand {
    /// Path to the configuration file (e.g., "Folio.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    config: String,
}

/// This function invoked the [`environment::init_environment`] function to initialize the environment.
pub fn serve(command: &ServeCommand) -> eyre::Result<()> {
    let serve_build = || -> eyre::Result<()> {
        build_with(&command.config, BuildMode::Serve)?;
        Ok(())
    };

    serve_build()?;

    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    let mut serve = parse_command(&environment::serve_command(), environment::output_dir())?
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()?;

    if let Some(serve_stdout) = serve.stdout.take() {
        std::thread::spawn(move || {
            use std::io::{BufRead, BufReader};
            for line in BufReader::new(serve_stdout).lines().map_while(Result::ok) {
                println!("[serve] {}", line);
            }
        });
    }

    if let Some(serve_stderr) = serve.stderr.take() {
        std::thread::spawn(move || {
            use std::io::{BufRead, BufReader};
            for line in BufReader::new(serve_stderr).lines().map_while(Result::ok) {
                color_print::ceprintln!("<r>[serve] Error: {}</>", line);
            }
        });
    }

    let mut watched_paths = vec![environment::locales_dir()];
    watched_paths.extend(environment::fragment_dirs());
    watched_paths.push(environment::assets_dir());
    let result = watch_paths(&watched_paths, |_| serve_build());

    // After watching process is done, kill the server process.
    let _ = serve.kill();

    result
}

fn parse_command(command: &[String], output: Utf8PathBuf) -> eyre::Result<std::process::Command> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| eyre!("serve command must not be empty"))?;
    let mut serve = std::process::Command::new(program);
    for arg in args {
        if arg == OUTPUT_PLACEHOLDER {
            serve.arg(&output);
            continue;
        }
        serve.arg(arg);
    }
    Ok(serve)
}

/// from: https://github.com/notify-rs/notify/blob/main/examples/monitor_raw.rs#L18
fn watch_paths<P: AsRef<Utf8Path>, F>(watched_paths: &[P], action: F) -> eyre::Result<()>
where
    F: Fn(&Utf8Path) -> eyre::Result<()>,
{
    let (tx, rx) = std::sync::mpsc::channel();

    let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

    print!("[watch] ");
    for watched_path in watched_paths {
        let watched_path = watched_path.as_ref();
        if !watched_path.exists() {
            color_print::ceprintln!(
                "<y>[watch] Warning: Path \"{}\" does not exist, skipping.</>",
                watched_path
            );
            continue;
        }

        watcher.watch(watched_path.as_std_path(), RecursiveMode::Recursive)?;
        print!("\"{}\"  ", watched_path);
    }
    println!("\n\nPress Ctrl+C to stop watching.\n");

    for res in rx {
        match res {
            Ok(event) => {
                // notify-rs only reports `Modify(Any)` on Windows, so every
                // modify kind counts.
                if let EventKind::Modify(_) = event.kind {
                    for path in event.paths {
                        println!("[watch] Change: {path:?}");
                        std::io::stdout().flush()?;
                        if let Ok(p) = path.as_path().try_into() {
                            if let Err(err) = action(p) {
                                color_print::ceprintln!("<r>[watch] Error: {:#}</>", err);
                            }
                        }
                    }
                }
            }
            Err(error) => {
                color_print::ceprintln!("<r>[watch] Error: {:?}</>", error);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let command: Vec<String> = ["miniserve", "<output>", "--index", "index.html"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let serve = parse_command(&command, Utf8PathBuf::from("./.cache/publish")).unwrap();
        assert_eq!(serve.get_program(), "miniserve");
        let args: Vec<_> = serve.get_args().collect();
        assert_eq!(args, ["./.cache/publish", "--index", "index.html"]);

        assert!(parse_command(&[], Utf8PathBuf::new()).is_err());
    }
}
