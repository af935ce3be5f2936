//! `lexscan dict` – interactive dictionary loop, plus one-shot search/add.

use crate::cli::prompt::Prompter;
use anyhow::Result;
use clap::Subcommand;
use lexscan_core::dictionary::{self, Dictionary, LookupOutcome};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum DictAction {
    /// Look up one word.
    Search {
        word: String,
    },
    /// Add (or replace) one word and save the dictionary.
    Add {
        word: String,
        definition: String,
    },
}

/// Loads the dictionary at `path`, runs `action` (or the interactive loop) and
/// saves when something may have changed.
pub fn run_dict<R: BufRead, W: Write>(
    path: &Path,
    suggestion_cutoff: f64,
    action: Option<DictAction>,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let mut dict = dictionary::load(path).with_suggestion_cutoff(suggestion_cutoff);

    match action {
        Some(DictAction::Search { word }) => report_lookup(&dict, &word, prompter),
        Some(DictAction::Add { word, definition }) => {
            if add_word(&mut dict, &word, &definition, prompter)? {
                dictionary::save(&dict, path)?;
            }
            Ok(())
        }
        None => {
            run_session(&mut dict, prompter)?;
            dictionary::save(&dict, path)?;
            prompter.say("Goodbye!")
        }
    }
}

/// Interactive loop: `search`/`s`, `add`/`a`, `quit`/`q`. End of input quits.
pub fn run_session<R: BufRead, W: Write>(
    dict: &mut Dictionary,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("\nDictionary Application")?;
    prompter.say("Commands: search/s, add/a, quit/q")?;

    loop {
        let Some(command) = prompter.ask_or_eof("\nEnter command: ")? else {
            break;
        };
        match command.trim().to_lowercase().as_str() {
            "quit" | "q" => break,
            "search" | "s" => {
                let Some(word) = prompter.ask_or_eof("Enter word: ")? else {
                    break;
                };
                report_lookup(dict, &word, prompter)?;
            }
            "add" | "a" => {
                let Some(word) = prompter.ask_or_eof("Enter word: ")? else {
                    break;
                };
                let Some(definition) = prompter.ask_or_eof("Enter definition: ")? else {
                    break;
                };
                add_word(dict, &word, &definition, prompter)?;
            }
            _ => prompter.say("Invalid command")?,
        }
    }
    Ok(())
}

fn report_lookup<R: BufRead, W: Write>(
    dict: &Dictionary,
    word: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    match dict.find(word) {
        LookupOutcome::Found(definition) => prompter.say(format!("{} = {}", word.trim(), definition)),
        LookupOutcome::Suggestion(candidate) => prompter.say(format!("Did you mean: {}?", candidate)),
        LookupOutcome::NotFound => prompter.say(format!("{} not found", word.trim())),
    }
}

fn add_word<R: BufRead, W: Write>(
    dict: &mut Dictionary,
    word: &str,
    definition: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<bool> {
    if dict.add(word, definition) {
        prompter.say("Word added successfully")?;
        Ok(true)
    } else {
        prompter.say("Word and definition must not be empty")?;
        Ok(false)
    }
}
