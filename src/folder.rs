use std::fs;
use std::path::Path;

use crate::error::{RenameError, Result};
use crate::models::FileEntry;

/// List the regular files directly inside `folder`, sorted by name.
///
/// `filter_extension` is a plain suffix match on the file name; empty keeps
/// everything. Subfolders are not entered.
pub fn scan_folder(folder: &Path, filter_extension: &str) -> Result<Vec<FileEntry>> {
    let unreadable = |source| RenameError::FolderUnreadable {
        path: folder.to_path_buf(),
        source,
    };

    let mut names: Vec<String> = fs::read_dir(folder)
        .map_err(unreadable)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| filter_extension.is_empty() || name.ends_with(filter_extension))
        .collect();
    names.sort();

    tracing::debug!(folder = %folder.display(), files = names.len(), "scanned folder");
    Ok(names.into_iter().map(FileEntry::new).collect())
}
