//! Persisting fetched content and scan reports.
//!
//! Resolves the user's target (file, extension-less file, or directory),
//! validates the extension against the per-mode allow-list, creates parent
//! directories and writes the file in one go. There is no temp-file swap: a
//! failed write leaves either no file or a fully written one.

mod target;

pub use target::{clean_path_input, resolve_target, resolve_target_at, timestamp};
pub(crate) use target::{lacks_extension, non_empty};

use crate::error::LexscanError;
use crate::fetch::Payload;
use crate::scan::ScanResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename prefix for scan reports written into a directory.
pub const REPORT_PREFIX: &str = "dangerous_words";

/// Binary or text output; selects extensions, generated names and write mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Binary,
    Text,
}

impl WriteMode {
    /// Extensions (without the dot) accepted for this mode.
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            WriteMode::Binary => &["jpg", "png", "bin"],
            WriteMode::Text => &["txt", "html"],
        }
    }

    /// Appended when the target has no extension.
    pub fn default_extension(self) -> &'static str {
        match self {
            WriteMode::Binary => "bin",
            WriteMode::Text => "txt",
        }
    }

    /// Prefix and extension used when the target is a directory.
    pub(crate) fn generated_name_parts(self) -> (&'static str, &'static str) {
        match self {
            WriteMode::Binary => ("image", "jpg"),
            WriteMode::Text => ("content", "txt"),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            WriteMode::Binary => "binary",
            WriteMode::Text => "text",
        }
    }
}

impl Payload {
    /// Write mode matching this payload.
    pub fn write_mode(&self) -> WriteMode {
        match self {
            Payload::Binary(_) => WriteMode::Binary,
            Payload::Text(_) => WriteMode::Text,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Binary(b) => b,
            Payload::Text(t) => t.as_bytes(),
        }
    }
}

/// Saves `payload` under `target`, returning the path actually written.
pub fn save_content(payload: &Payload, target: &Path) -> Result<PathBuf, LexscanError> {
    let mode = payload.write_mode();
    let (prefix, _) = mode.generated_name_parts();
    let path = resolve_target(target, mode, prefix)?;
    write_file(&path, payload.as_bytes())?;
    tracing::info!(path = %path.display(), mode = mode.label(), "content saved");
    Ok(path)
}

/// Saves the text report of `scan` under `target` (text mode).
pub fn save_report(scan: &ScanResult, target: &Path) -> Result<PathBuf, LexscanError> {
    let path = resolve_target(target, WriteMode::Text, REPORT_PREFIX)?;
    write_file(&path, scan.report().as_bytes())?;
    tracing::info!(path = %path.display(), matches = scan.len(), "scan report saved");
    Ok(path)
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), LexscanError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LexscanError::FileSystem {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, data).map_err(|source| LexscanError::FileSystem {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{scan_html, NO_MATCHES_TEXT};

    #[test]
    fn binary_payload_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("photo.jpg");
        let payload = Payload::Binary(vec![0xff, 0xd8, 0x00, 0x42]);
        let written = save_content(&payload, &target).unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read(&written).unwrap(), vec![0xff, 0xd8, 0x00, 0x42]);
    }

    #[test]
    fn binary_to_txt_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("photo.txt");
        let err = save_content(&Payload::Binary(vec![1, 2, 3]), &target).unwrap_err();
        assert!(matches!(err, LexscanError::InvalidExtension { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn text_to_jpg_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("page.jpg");
        let err = save_content(&Payload::Text("hi".into()), &target).unwrap_err();
        assert!(matches!(err, LexscanError::InvalidExtension { .. }));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c/page.html");
        let written = save_content(&Payload::Text("<p>x</p>".into()), &target).unwrap();
        assert_eq!(fs::read_to_string(written).unwrap(), "<p>x</p>");
    }

    #[test]
    fn directory_target_gets_generated_binary_name() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_content(&Payload::Binary(vec![7]), dir.path()).unwrap();
        assert_eq!(written.parent().unwrap(), dir.path());
        let name = written.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("image_"), "{name}");
        assert!(name.ends_with(".jpg"), "{name}");
    }

    #[test]
    fn empty_scan_report_writes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report");
        let written = save_report(&scan_html("<p>nothing here</p>"), &target).unwrap();
        assert_eq!(written, dir.path().join("report.txt"));
        assert_eq!(fs::read_to_string(written).unwrap(), NO_MATCHES_TEXT);
    }

    #[test]
    fn scan_report_lists_sorted_words() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_report(&scan_html("<b>murder</b> then <i>bomb</i>"), dir.path()).unwrap();
        let name = written.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("dangerous_words_") && name.ends_with(".txt"), "{name}");
        assert_eq!(fs::read_to_string(written).unwrap(), "bomb\nmurder");
    }

    #[test]
    fn write_into_file_as_directory_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let err = save_content(&Payload::Text("t".into()), &blocker.join("out.txt")).unwrap_err();
        assert!(matches!(err, LexscanError::FileSystem { .. }));
    }
}
