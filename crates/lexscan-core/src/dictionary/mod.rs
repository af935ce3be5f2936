//! Word dictionary with "did you mean" suggestions, persisted as JSON.
//!
//! Keys are stored lowercased and trimmed; lookups normalize the same way.

mod store;
mod suggest;

pub use store::{load, save};
pub use suggest::{closest_match, similarity, DEFAULT_SUGGESTION_CUTOFF};

use std::collections::BTreeMap;

/// Default dictionary file name, relative to the working directory.
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.json";

/// Entries used when no dictionary file exists yet.
const SEED_ENTRIES: [(&str, &str); 3] = [
    ("koulu", "school"),
    ("oppilas", "student"),
    ("opettaja", "teacher"),
];

/// Result of looking a word up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    /// Not present; this is the closest known word.
    Suggestion(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
    suggestion_cutoff: f64,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Dictionary {
    /// Empty dictionary.
    pub fn new() -> Self {
        Self::from_entries(BTreeMap::new())
    }

    /// Dictionary holding the built-in seed entries.
    pub fn seeded() -> Self {
        Self::from_entries(
            SEED_ENTRIES
                .iter()
                .map(|(w, d)| (w.to_string(), d.to_string()))
                .collect(),
        )
    }

    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries,
            suggestion_cutoff: DEFAULT_SUGGESTION_CUTOFF,
        }
    }

    /// Minimum similarity (0.0..=1.0) a key needs to be suggested.
    pub fn with_suggestion_cutoff(mut self, cutoff: f64) -> Self {
        self.suggestion_cutoff = cutoff.clamp(0.0, 1.0);
        self
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup, falling back to the closest key above the cutoff.
    pub fn find(&self, word: &str) -> LookupOutcome {
        let key = normalize(word);
        if let Some(definition) = self.entries.get(&key) {
            return LookupOutcome::Found(definition.clone());
        }
        match closest_match(&key, self.entries.keys(), self.suggestion_cutoff) {
            Some(candidate) => {
                tracing::debug!(word = %key, suggestion = %candidate, "lookup miss with suggestion");
                LookupOutcome::Suggestion(candidate.to_string())
            }
            None => LookupOutcome::NotFound,
        }
    }

    /// Adds or replaces an entry. Returns false if either side is blank.
    pub fn add(&mut self, word: &str, definition: &str) -> bool {
        let key = normalize(word);
        let definition = definition.trim();
        if key.is_empty() || definition.is_empty() {
            return false;
        }
        self.entries.insert(key, definition.to_string());
        true
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
