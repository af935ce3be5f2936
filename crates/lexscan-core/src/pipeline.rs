//! Fetch → scan → write, the whole flow of `lexscan fetch`.
//!
//! Split in two so the caller can ask for the save path after the URL has
//! been checked, the same order the interactive prompts use.

use crate::error::LexscanError;
use crate::fetch::{self, ContentClassification, FetchResult, Payload};
use crate::scan::{self, ScanResult};
use crate::writer;
use std::path::{Path, PathBuf};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub classification: ContentClassification,
    /// Scan result for HTML; `None` for images.
    pub scan: Option<ScanResult>,
    /// File that was written.
    pub path: PathBuf,
}

/// Fetches `url` and rejects anything that is neither HTML nor JPEG.
pub fn fetch_supported(url: &str) -> Result<FetchResult, LexscanError> {
    let result = fetch::fetch(url)?;
    if result.classification == ContentClassification::Invalid {
        tracing::warn!(url = %result.url, "unsupported or empty response");
        return Err(LexscanError::InvalidContentType);
    }
    tracing::info!(
        url = %result.url,
        media_type = result.media_type.as_deref().unwrap_or("-"),
        classification = ?result.classification,
        "fetched"
    );
    Ok(result)
}

/// Scans HTML or stores image bytes under `target`.
///
/// HTML yields a scan report in text mode. JPEG bytes are written in binary
/// mode; an extension-less file target gets `.jpg`. An empty target means the
/// working directory.
pub fn persist(result: &FetchResult, target: &Path) -> Result<PipelineOutcome, LexscanError> {
    match (&result.classification, &result.payload) {
        (ContentClassification::Html, Payload::Text(html)) => {
            let scan = scan::scan_html(html);
            let path = writer::save_report(&scan, target)?;
            Ok(PipelineOutcome {
                classification: ContentClassification::Html,
                scan: Some(scan),
                path,
            })
        }
        (ContentClassification::Jpeg, payload) => {
            let target = image_target(target);
            let path = writer::save_content(payload, &target)?;
            Ok(PipelineOutcome {
                classification: ContentClassification::Jpeg,
                scan: None,
                path,
            })
        }
        _ => Err(LexscanError::InvalidContentType),
    }
}

/// Fetches `url` and persists it under `target` in one call.
pub fn run(url: &str, target: &Path) -> Result<PipelineOutcome, LexscanError> {
    let result = fetch_supported(url)?;
    persist(&result, target)
}

fn image_target(target: &Path) -> PathBuf {
    let target = writer::non_empty(target);
    if !target.is_dir() && writer::lacks_extension(&target) {
        target.with_extension("jpg")
    } else {
        target
    }
}
