//! Error type shared by the fetch, scan and write stages.
//!
//! Kept as a typed enum so the CLI can tell a cancelled prompt apart from a
//! real failure before everything is flattened into `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexscanError {
    /// URL could not be parsed even after defaulting the scheme.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, TLS or transfer failure reported by libcurl.
    #[error("failed to load URL: {0}")]
    Network(#[from] curl::Error),

    /// Server answered with a non-2xx status.
    #[error("failed to load URL: GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    /// Body of a non-JPEG response is not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Response is neither a JPEG image nor non-empty text.
    #[error("Invalid URL or unsupported content type")]
    InvalidContentType,

    /// Target extension is not allowed for the write mode.
    #[error("Invalid {mode} extension: {found}. Expected: {expected}")]
    InvalidExtension {
        mode: &'static str,
        found: String,
        expected: String,
    },

    /// Creating directories or writing the output file failed.
    #[error("file operation failed on {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input ended while a prompt was waiting for an answer.
    #[error("Operation cancelled by user")]
    UserCancelled,
}
