use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenameError>;

/// Coarse classification a front end can switch on without caring about sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidPattern,
    RenameFailed,
    UndoFailed,
    FolderUnreadable,
    Preset,
}

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("invalid regular expression `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to undo rename {} back to {}: {source}", .from.display(), .to.display())]
    UndoFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read folder {}: {source}", .path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot access preset {}: {source}", .path.display())]
    PresetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preset {}: {source}", .path.display())]
    PresetFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RenameError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            Self::RenameFailed { .. } => ErrorKind::RenameFailed,
            Self::UndoFailed { .. } => ErrorKind::UndoFailed,
            Self::FolderUnreadable { .. } => ErrorKind::FolderUnreadable,
            Self::PresetIo { .. } | Self::PresetFormat { .. } => ErrorKind::Preset,
        }
    }

    /// Short heading for an error popup.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidPattern => "Regex Error",
            ErrorKind::RenameFailed => "Rename Failed",
            ErrorKind::UndoFailed => "Undo Failed",
            ErrorKind::FolderUnreadable => "Folder Error",
            ErrorKind::Preset => "Preset Error",
        }
    }
}
