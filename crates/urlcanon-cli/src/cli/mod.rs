//! CLI for the urlcanon URL processor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use urlcanon_core::config::{self, UrlcanonConfig};

use commands::{run_batch, run_completions, run_man, run_process};

/// Top-level CLI for urlcanon.
#[derive(Debug, Parser)]
#[command(name = "urlcanon")]
#[command(about = "urlcanon: canonicalize and redirect URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlcanon/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Process a single URL and print the result.
    Process {
        /// URL to process.
        url: String,

        /// Operation to apply: canonical, redirection or all.
        #[arg(short, long, value_name = "OP")]
        operation: String,

        /// Print the JSON response body instead of the bare URL.
        #[arg(long)]
        json: bool,
    },

    /// Process JSON Lines requests ({"url", "operation"}) and write JSON Lines responses.
    Batch {
        /// Input file, or "-" for stdin.
        #[arg(default_value = "-")]
        path: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("dispatching {:?}", cli.command);

        match cli.command {
            CliCommand::Process {
                url,
                operation,
                json,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_process(&cfg, &url, &operation, json)?;
            }
            CliCommand::Batch { path } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_batch(&cfg, &path)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<UrlcanonConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
