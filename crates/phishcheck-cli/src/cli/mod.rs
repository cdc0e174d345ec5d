//! CLI for the phishcheck URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use phishcheck_core::config::{self, PhishcheckConfig};
use std::path::PathBuf;

use commands::{run_classify, run_completions, run_features, run_model_info, run_serve};

/// Top-level CLI for phishcheck.
#[derive(Debug, Parser)]
#[command(name = "phishcheck")]
#[command(about = "phishcheck: classify URLs as phishing or legitimate", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the HTTP prediction API.
    Serve {
        /// Address to bind (overrides config).
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides config).
        #[arg(long)]
        port: Option<u16>,
        /// Model JSON file (overrides config).
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Classify a single URL and print the label.
    Classify {
        /// URL to classify.
        url: String,
        /// Model JSON file (overrides config).
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        /// Print the API response body instead of the bare label.
        #[arg(long)]
        json: bool,
    },

    /// Print the feature vector extracted from a URL.
    Features {
        /// URL to inspect.
        url: String,
        /// Print a JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Validate the configured model and print its dimensions and checksum.
    ModelInfo {
        /// Model JSON file (overrides config).
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Serve { bind, port, model } => {
                run_serve(&load_config()?, bind, port, model).await?
            }
            CliCommand::Classify { url, model, json } => {
                run_classify(&load_config()?, &url, model, json)?
            }
            CliCommand::Features { url, json } => run_features(&url, json)?,
            CliCommand::ModelInfo { model } => run_model_info(&load_config()?, model)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

fn load_config() -> Result<PhishcheckConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
