use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use eyre::Result;
use itertools::Itertools;
use log::debug;
use slate_core::Keymap;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "slate", author, version, about, styles = crate::cli::get_styles())]
pub struct Slate {
    /// TOML file with scene overflow and key binding settings
    #[arg(short, long, global = true, env = "SLATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Option<SlateCmd>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SlateCmd {
    /// Read keypad input from the terminal and show the slate live
    #[command(visible_alias = "c")]
    Capture,

    /// Feed a string of keystrokes through the slate and print what changed
    #[command(visible_alias = "r")]
    Replay {
        /// Keystrokes, one character each (e.g. "tttr")
        keys: String,

        /// How to print the final session
        #[arg(short, long, value_enum, default_value_t = SnapshotFormat::Text)]
        format: SnapshotFormat,
    },

    /// List the active key bindings
    #[command(visible_alias = "k")]
    Keys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Text,
    Toml,
}

pub fn run(args: &[OsString]) -> Result<()> {
    debug!("slate args: {args:?}");
    let flags = Slate::parse_from(args);
    run_with_flags(flags)
}

pub fn run_with_flags(flags: Slate) -> Result<()> {
    let config = Config::load(flags.config.as_deref())?;

    match flags.subcommand {
        None | Some(SlateCmd::Capture) => crate::cmd::capture::run(&config),
        Some(SlateCmd::Replay { keys, format }) => crate::cmd::replay::run(&config, &keys, format),
        Some(SlateCmd::Keys) => {
            print_keys(&config.keymap());
            Ok(())
        }
    }
}

fn print_keys(keymap: &Keymap) {
    for (key, command) in keymap.bindings().sorted_by_key(|&(key, _)| key) {
        println!(
            "  {}  {:<16} {}",
            key.to_string().cyan().bold(),
            command.name(),
            command.description().dimmed()
        );
    }
}
