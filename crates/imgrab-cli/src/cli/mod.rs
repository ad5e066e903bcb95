//! CLI for imgrab.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use imgrab_core::config::{self, ImgrabConfig};
use std::path::PathBuf;

use commands::{run_completions, run_get, run_list};

/// Top-level CLI for imgrab.
#[derive(Debug, Parser)]
#[command(name = "imgrab")]
#[command(about = "imgrab: download imgur images, albums and galleries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download an image, album or gallery into a directory.
    Get {
        /// Image, album (/a/...) or gallery (/gallery/...) URL.
        url: String,

        /// Existing directory to save into (default: current directory).
        #[arg(long, short = 'd', value_name = "DIR")]
        dest: Option<PathBuf>,

        /// Print progress and per-item failures.
        #[arg(long, short)]
        verbose: bool,

        /// Keep image ids as filenames instead of numbering album items.
        #[arg(long)]
        keep_names: bool,
    },

    /// Print the files a URL would produce, without downloading.
    List {
        /// Image, album or gallery URL.
        url: String,

        /// Keep image ids as filenames instead of numbering album items.
        #[arg(long)]
        keep_names: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                url,
                dest,
                verbose,
                keep_names,
            } => {
                let cfg = load_config()?;
                let dest = match dest {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_get(&cfg, &url, &dest, verbose, keep_names)?;
            }
            CliCommand::List { url, keep_names } => {
                let cfg = load_config()?;
                run_list(&cfg, &url, keep_names)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

fn load_config() -> Result<ImgrabConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
