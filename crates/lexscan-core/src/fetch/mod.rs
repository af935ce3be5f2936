//! HTTP GET and content classification.
//!
//! Uses the curl crate (libcurl easy handle) to issue a single blocking GET
//! with a fixed `User-Agent`, then classifies the response as JPEG, HTML or
//! invalid from its `Content-Type` header and body.

mod classify;
mod parse;

pub use classify::classify;
pub use parse::normalize_url;

use crate::error::LexscanError;
use std::str;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Media type that selects the binary (image) branch.
pub const JPEG_MEDIA_TYPE: &str = "image/jpeg";

/// What kind of content a URL returned; decides the downstream branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClassification {
    Html,
    Jpeg,
    Invalid,
}

/// Raw response body: bytes for images, decoded text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Binary(Vec<u8>),
    Text(String),
}

/// Result of fetching one URL. Immutable once produced.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL after scheme defaulting and redirects.
    pub url: String,
    /// Media type from `Content-Type` (lowercase, without parameters), if sent.
    pub media_type: Option<String>,
    pub classification: ContentClassification,
    pub payload: Payload,
}

/// Fetches `raw_url` with one GET and classifies the response.
///
/// A missing scheme defaults to `http://`. Redirects are followed. Non-2xx
/// responses and transport failures are network errors; nothing is retried.
pub fn fetch(raw_url: &str) -> Result<FetchResult, LexscanError> {
    let url = normalize_url(raw_url)?;
    let mut headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.useragent(USER_AGENT)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(LexscanError::HttpStatus {
            url: url.to_string(),
            code,
        });
    }

    let final_url = easy
        .effective_url()?
        .map(str::to_string)
        .unwrap_or_else(|| url.to_string());
    let media_type = parse::content_type(&headers);
    tracing::debug!(
        url = %final_url,
        code,
        media_type = media_type.as_deref().unwrap_or("-"),
        bytes = body.len(),
        "GET completed"
    );

    let (classification, payload) = classify(media_type.as_deref(), body)?;
    Ok(FetchResult {
        url: final_url,
        media_type,
        classification,
        payload,
    })
}
