use std::path::{Path, PathBuf};

use crate::config::ConflictStrategy;
use crate::rename_engine::split_extension;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Rename to this path.
    Proceed(PathBuf),
    /// Leave the entry alone.
    Skip,
}

/// Decide the final target for renaming `source` to `candidate`.
///
/// `exists` must reflect the live filesystem. No check happens when the
/// candidate is the source itself.
pub fn resolve<F>(source: &Path, candidate: &Path, strategy: ConflictStrategy, exists: F) -> Resolution
where
    F: Fn(&Path) -> bool,
{
    if candidate == source || !exists(candidate) {
        return Resolution::Proceed(candidate.to_path_buf());
    }

    match strategy {
        ConflictStrategy::Skip => Resolution::Skip,
        ConflictStrategy::Overwrite => Resolution::Proceed(candidate.to_path_buf()),
        ConflictStrategy::Rename => Resolution::Proceed(first_free_path(candidate, &exists)),
    }
}

/// `a.txt` -> `a_1.txt`, `a_2.txt`, ... until one does not exist.
fn first_free_path<F>(candidate: &Path, exists: &F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let file_name = candidate
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, extension) = split_extension(&file_name);

    let mut counter = 1u64;
    loop {
        let next = candidate.with_file_name(format!("{stem}_{counter}{extension}"));
        if !exists(&next) {
            return next;
        }
        counter += 1;
    }
}
