//! CLI for the bytebank câmbio URL extractor.

mod commands;

use anyhow::Result;
use cambio_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_completions, run_convert, run_demo, run_inspect, run_param};

/// Top-level CLI for the câmbio URL extractor.
#[derive(Debug, Parser)]
#[command(name = "cambio")]
#[command(about = "Extract parameters from bytebank câmbio URLs and convert amounts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the reference scenario and print the full report.
    Demo,

    /// Show the URL, its base, its query string and its size.
    Inspect {
        /// bytebank câmbio URL.
        url: String,
        /// Print a JSON object instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Convert the `quantidade` of a URL towards its `moedaDestino`.
    Convert {
        /// bytebank câmbio URL with quantidade, moedaOrigem and moedaDestino.
        url: String,
        /// Reais per dollar (defaults to the configured rate).
        #[arg(long, value_name = "RATE")]
        rate: Option<f64>,
    },

    /// Print the value of one query parameter.
    Param {
        /// bytebank câmbio URL.
        url: String,
        /// Parameter name, matched exactly.
        name: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Demo => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_demo(&cfg)?
            }
            CliCommand::Inspect { url, json } => run_inspect(&url, json)?,
            CliCommand::Convert { url, rate } => {
                let rate = match rate {
                    Some(rate) => rate,
                    None => config::load_or_init()?.dollar_rate,
                };
                run_convert(&url, rate)?
            }
            CliCommand::Param { url, name } => run_param(&url, &name)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
