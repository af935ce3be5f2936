//! `lexscan fetch [url] [-o path]` – download, scan or store, report.

use crate::cli::prompt::Prompter;
use anyhow::Result;
use lexscan_core::fetch::ContentClassification;
use lexscan_core::pipeline;
use lexscan_core::writer::clean_path_input;
use std::io::{BufRead, Write};

pub const URL_PROMPT: &str = "Give me a valid URL to download? ";
pub const PATH_PROMPT: &str = "Give me a valid path to save the contents? ";

/// Runs the fetch flow, prompting for whatever was not given on the command line.
/// The save path is only asked for once the URL has been fetched and accepted.
pub fn run_fetch<R: BufRead, W: Write>(
    url: Option<&str>,
    output: Option<&str>,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let url = match url {
        Some(u) => u.trim().to_string(),
        None => prompter.ask(URL_PROMPT)?.trim().to_string(),
    };
    let fetched = pipeline::fetch_supported(&url)?;

    let target = match output {
        Some(p) => clean_path_input(p),
        None => clean_path_input(&prompter.ask(PATH_PROMPT)?),
    };
    let outcome = pipeline::persist(&fetched, &target)?;

    match outcome.classification {
        ContentClassification::Html => {
            if let Some(scan) = outcome.scan.as_ref().filter(|s| !s.is_empty()) {
                prompter.say(format!(
                    "Dangerous words found: {}",
                    scan.words().collect::<Vec<_>>().join(", ")
                ))?;
            }
            prompter.say(format!(
                "Dangerous words saved to: {}",
                outcome.path.display()
            ))?;
        }
        _ => {
            prompter.say(format!("Saving succeeded to: {}", outcome.path.display()))?;
        }
    }
    Ok(())
}
