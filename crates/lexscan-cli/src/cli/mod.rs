//! CLI for lexscan.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use lexscan_core::config::{self, LexscanConfig};
use std::path::PathBuf;

use commands::{run_completions, run_dict, run_fetch, run_man, DictAction};
use prompt::Prompter;

/// Top-level CLI for lexscan.
#[derive(Debug, Parser)]
#[command(name = "lexscan")]
#[command(about = "Fetch a page or image and scan it for flagged words; keep a small word dictionary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a URL: HTML is scanned for flagged words, JPEG images are saved as-is.
    Fetch {
        /// URL to download (scheme defaults to http://). Prompted for if omitted.
        url: Option<String>,

        /// File or directory to save to. Prompted for if omitted.
        #[arg(short, long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Look up or add dictionary words. Without an action, starts the interactive loop.
    Dict {
        /// Dictionary JSON file (overrides the config file).
        #[arg(long, value_name = "PATH", global = true)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: Option<DictAction>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            LexscanConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url, output } => {
                let mut prompter = Prompter::stdio();
                run_fetch(url.as_deref(), output.as_deref(), &mut prompter)?;
            }
            CliCommand::Dict { file, action } => {
                let path = file.unwrap_or_else(|| cfg.dictionary.resolved_path());
                let mut prompter = Prompter::stdio();
                run_dict(&path, cfg.dictionary.suggestion_cutoff, action, &mut prompter)?;
            }
            CliCommand::Completions { shell } => {
                run_completions(shell, &mut Cli::command(), &mut std::io::stdout());
            }
            CliCommand::Man => run_man(Cli::command(), &mut std::io::stdout())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
