//! Output path resolution: directory targets, default and allowed extensions.

use super::WriteMode;
use crate::error::LexscanError;
use std::path::{Path, PathBuf};

/// Local timestamp used in generated filenames, e.g. `20240131_235959`.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Turns a typed path into a `PathBuf`, dropping surrounding whitespace and
/// quotes (paths pasted from a file manager often come quoted).
pub fn clean_path_input(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches(|c| c == '"' || c == '\''))
}

/// Resolves `target` to the file that will be written, using the current time
/// for generated names.
pub fn resolve_target(
    target: &Path,
    mode: WriteMode,
    prefix: &str,
) -> Result<PathBuf, LexscanError> {
    resolve_target_at(target, mode, prefix, &timestamp())
}

/// An empty path means the working directory.
pub(crate) fn non_empty(target: &Path) -> PathBuf {
    if target.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        target.to_path_buf()
    }
}

/// True when `path` has no extension or ends in a bare dot (`report.`).
pub(crate) fn lacks_extension(path: &Path) -> bool {
    path.extension().map_or(true, |e| e.is_empty())
}

/// Like [`resolve_target`] with an explicit timestamp.
///
/// - empty path → working directory
/// - existing directory → `<dir>/<prefix>_<stamp>.<ext>`
/// - no extension (or a trailing dot) → mode's default extension appended
/// - extension outside the mode's allow-list (case-insensitive) → error
pub fn resolve_target_at(
    target: &Path,
    mode: WriteMode,
    prefix: &str,
    stamp: &str,
) -> Result<PathBuf, LexscanError> {
    let mut path = non_empty(target);

    if path.is_dir() {
        let (_, ext) = mode.generated_name_parts();
        path.push(format!("{}_{}.{}", prefix, stamp, ext));
    }

    if lacks_extension(&path) {
        path.set_extension(mode.default_extension());
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let allowed = mode.allowed_extensions();
    if !allowed.contains(&ext.as_str()) {
        return Err(LexscanError::InvalidExtension {
            mode: mode.label(),
            found: format!(".{}", ext),
            expected: allowed
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    Ok(path)
}
