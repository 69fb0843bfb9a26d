//! Batch renaming of the files in one folder: rule-based preview names,
//! conflict handling, simulation and undo.

pub mod config;
pub mod conflict;
pub mod error;
pub mod executor;
pub mod fix;
pub mod folder;
pub mod history;
pub mod logging;
pub mod models;
pub mod rename_engine;
pub mod tui;

pub use config::{CaseOption, ConflictStrategy, Configuration, NumberingPosition};
pub use error::{ErrorKind, RenameError};
pub use executor::{RenameReport, execute_batch};
pub use history::{History, UndoReport};
pub use models::{FileEntry, RenameBatch, RenameOperation, Selection};
pub use rename_engine::{NumberingCounter, RenameEngine};
