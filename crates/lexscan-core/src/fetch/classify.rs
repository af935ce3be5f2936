//! Decide between the JPEG, HTML and invalid branches.

use super::{ContentClassification, Payload, JPEG_MEDIA_TYPE};
use crate::error::LexscanError;

/// Classifies a response body from its media type.
///
/// `image/jpeg` is JPEG whatever the body holds. Anything else must decode as
/// UTF-8: non-empty text is HTML, empty text is invalid.
pub fn classify(
    media_type: Option<&str>,
    body: Vec<u8>,
) -> Result<(ContentClassification, Payload), LexscanError> {
    if media_type.is_some_and(|m| m.eq_ignore_ascii_case(JPEG_MEDIA_TYPE)) {
        return Ok((ContentClassification::Jpeg, Payload::Binary(body)));
    }

    let text = String::from_utf8(body)?;
    let classification = if text.is_empty() {
        ContentClassification::Invalid
    } else {
        ContentClassification::Html
    };
    Ok((classification, Payload::Text(text)))
}
