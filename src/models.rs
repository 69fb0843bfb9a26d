use std::collections::BTreeSet;
use std::path::PathBuf;

/// One file of the working folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Current on-disk base name. Only changed after a real rename succeeds.
    pub original_name: String,
    /// Last computed candidate; `None` when deselected or unchanged.
    pub preview_name: Option<String>,
}

impl FileEntry {
    pub fn new(original_name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            preview_name: None,
        }
    }
}

/// Indices of the entries the user picked. Empty means "apply to all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<usize>);

impl Selection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn of(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Whether `index` takes part in the current pass.
    pub fn includes(&self, index: usize) -> bool {
        self.0.is_empty() || self.0.contains(&index)
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.0.remove(&index) {
            self.0.insert(index);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

/// Everything one executor call recorded, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameBatch {
    pub operations: Vec<RenameOperation>,
    /// Recorded in simulation mode; nothing on disk was touched.
    pub simulated: bool,
}

impl RenameBatch {
    pub fn new(simulated: bool) -> Self {
        Self {
            operations: Vec::new(),
            simulated,
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
