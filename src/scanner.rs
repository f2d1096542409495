use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::{should_include_file, MapdownConfig};
use crate::errors::{MapdownError, Result};

/// Recursively collects every document under `root`.
///
/// The walk is depth-first with each directory's entries visited in
/// file-name order, so the result is stable for an unchanged tree. Symlinks
/// are followed. Any traversal error aborts the scan; unreadable entries are
/// never skipped silently.
pub fn scan_documents(root: &Path, config: &MapdownConfig) -> Result<Vec<PathBuf>> {
    let root = std::path::absolute(root).map_err(|e| MapdownError::File {
        message: format!("failed to resolve root directory: {}", e),
        path: root.display().to_string(),
    })?;
    let extension = config.dotted_extension();

    let mut documents = Vec::new();
    let walker = WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| match e.path().strip_prefix(&root) {
            Ok(rel) if !rel.as_os_str().is_empty() => {
                should_include_file(&rel.to_string_lossy(), config)
            }
            _ => true,
        });

    for entry in walker {
        let entry = entry.map_err(|e| MapdownError::File {
            message: format!("failed to scan directory: {}", e),
            path: e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string()),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(&extension) {
            debug!(path = %entry.path().display(), "found document");
            documents.push(entry.into_path());
        }
    }

    Ok(documents)
}
