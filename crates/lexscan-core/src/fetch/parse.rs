//! URL defaulting and response header parsing.

use crate::error::LexscanError;

/// Prepends `http://` unless the input already starts with `http://` or
/// `https://`, then parses it.
pub fn normalize_url(raw: &str) -> Result<url::Url, LexscanError> {
    let raw = raw.trim();
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };
    url::Url::parse(&candidate).map_err(|source| LexscanError::InvalidUrl {
        url: candidate,
        source,
    })
}

/// Media type of the last response in `lines`, lowercased and stripped of
/// parameters (`text/html; charset=utf-8` → `text/html`).
///
/// Each status line starts a new header block, so after redirects only the
/// final response counts.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut found = None;
    for line in lines {
        let line = line.trim();
        if line.starts_with("HTTP/") {
            found = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                let media = value
                    .split(';')
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_ascii_lowercase();
                if !media.is_empty() {
                    found = Some(media);
                }
            }
        }
    }
    found
}
