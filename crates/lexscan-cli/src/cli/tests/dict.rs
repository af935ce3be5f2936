//! Tests for the dict subcommand.

use super::parse;
use clap::Parser;
use crate::cli::commands::DictAction;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_dict_interactive() {
    match parse(&["lexscan", "dict"]) {
        CliCommand::Dict { file, action } => {
            assert!(file.is_none());
            assert!(action.is_none());
        }
        _ => panic!("expected Dict"),
    }
}

#[test]
fn cli_parse_dict_search_with_file() {
    match parse(&["lexscan", "dict", "--file", "/tmp/d.json", "search", "koulu"]) {
        CliCommand::Dict {
            file,
            action: Some(DictAction::Search { word }),
        } => {
            assert_eq!(file.as_deref(), Some(Path::new("/tmp/d.json")));
            assert_eq!(word, "koulu");
        }
        other => panic!("expected Dict search, got {other:?}"),
    }
}

#[test]
fn cli_parse_dict_add_file_after_action() {
    match parse(&["lexscan", "dict", "add", "talo", "house", "--file", "w.json"]) {
        CliCommand::Dict {
            file,
            action: Some(DictAction::Add { word, definition }),
        } => {
            assert_eq!(file.as_deref(), Some(Path::new("w.json")));
            assert_eq!(word, "talo");
            assert_eq!(definition, "house");
        }
        other => panic!("expected Dict add, got {other:?}"),
    }
}

#[test]
fn cli_parse_dict_add_requires_definition() {
    assert!(crate::cli::Cli::try_parse_from(["lexscan", "dict", "add", "talo"]).is_err());
}
