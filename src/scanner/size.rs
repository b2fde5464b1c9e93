use std::fs::Metadata;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::Result;

use super::cancel::CancelToken;

/// Get apparent file size (content length)
pub fn apparent_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Total apparent size of every regular file below `path`.
///
/// Symbolic links are neither followed nor counted: a link contributes
/// 0 bytes regardless of its target. Entries that cannot be read are
/// skipped, so the result is a best-effort lower bound.
pub fn size_of(path: &Path, cancel: &CancelToken) -> Result<u64> {
    let mut total = 0u64;

    for result in WalkDir::new(path).follow_links(false) {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(error = %err, "Skipping unreadable entry while sizing");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            cancel.check()?;
            continue;
        }
        if !file_type.is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => total += apparent_size(&metadata),
            Err(err) => {
                tracing::debug!(path = %entry.path().display(), error = %err, "Skipping file without metadata");
            }
        }
    }

    Ok(total)
}

/// Format size in human-readable binary units
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
