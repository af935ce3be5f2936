//! Denylist scan over HTML text.
//!
//! Tags are removed with a non-greedy regex substitution, not an HTML parser:
//! entities, scripts and comments get no special treatment. The remaining
//! text is tokenized on word boundaries and intersected with [`DENYLIST`].

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Words flagged by the scan. Lowercase; never changed at runtime.
pub const DENYLIST: [&str; 7] = [
    "bomb",
    "kill",
    "murder",
    "terror",
    "terrorist",
    "terrorists",
    "terrorism",
];

/// Placeholder written when a document contains no denylisted words.
pub const NO_MATCHES_TEXT: &str = "No dangerous words found";

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^<]+?>").expect("tag pattern is valid"))
}

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"))
}

/// Denylisted words found in a document, deduplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    matches: BTreeSet<&'static str>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Matched words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matches.iter().copied()
    }

    /// Text persisted for this result: one word per line, or
    /// [`NO_MATCHES_TEXT`] when nothing matched.
    pub fn report(&self) -> String {
        if self.is_empty() {
            NO_MATCHES_TEXT.to_string()
        } else {
            self.words().collect::<Vec<_>>().join("\n")
        }
    }
}

/// Removes every `<...>` span.
pub fn strip_tags(html: &str) -> String {
    tag_pattern().replace_all(html, "").into_owned()
}

/// Returns the denylisted words that occur as whole words in `text`,
/// compared case-insensitively.
pub fn scan_text(text: &str) -> ScanResult {
    let mut matches = BTreeSet::new();
    for token in word_pattern().find_iter(text) {
        let lower = token.as_str().to_lowercase();
        if let Some(hit) = DENYLIST.iter().find(|w| **w == lower) {
            matches.insert(*hit);
        }
    }
    ScanResult { matches }
}

/// Strips tags from `html` and scans the remaining text.
pub fn scan_html(html: &str) -> ScanResult {
    let text = strip_tags(html);
    let result = scan_text(&text);
    tracing::debug!(matches = result.len(), "scanned document");
    result
}
