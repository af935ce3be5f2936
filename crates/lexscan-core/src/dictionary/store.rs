//! JSON persistence for the dictionary.

use super::Dictionary;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Loads the dictionary at `path`.
///
/// A missing file yields the seed entries. An unreadable or malformed file is
/// logged and also yields the seed entries, so a damaged file never blocks
/// lookups.
pub fn load(path: &Path) -> Dictionary {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no dictionary file, using seed entries");
            return Dictionary::seeded();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read dictionary, using seed entries");
            return Dictionary::seeded();
        }
    };

    match serde_json::from_str::<BTreeMap<String, String>>(&data) {
        Ok(entries) => {
            tracing::debug!(path = %path.display(), entries = entries.len(), "dictionary loaded");
            Dictionary::from_entries(entries)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed dictionary, using seed entries");
            Dictionary::seeded()
        }
    }
}

/// Writes the dictionary to `path` as pretty-printed JSON (two-space indent).
pub fn save(dictionary: &Dictionary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(dictionary.entries())?;
    fs::write(path, json).with_context(|| format!("Error saving dictionary to {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = dictionary.len(), "dictionary saved");
    Ok(())
}
