use std::fs;
use std::path::Path;

use crate::config::Configuration;
use crate::conflict::{Resolution, resolve};
use crate::error::{RenameError, Result};
use crate::history::History;
use crate::models::{FileEntry, RenameBatch, RenameOperation, Selection};

/// What one executor call did, for the front end's summary message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub recorded: usize,
    /// Names left alone because their target already existed.
    pub skipped: Vec<String>,
    pub simulated: bool,
}

impl RenameReport {
    pub fn summary(&self) -> String {
        if self.recorded == 0 {
            "No files were renamed.".to_string()
        } else if self.simulated {
            format!(
                "Simulation complete: {} file(s) would be renamed. No files were renamed.",
                self.recorded
            )
        } else if self.skipped.is_empty() {
            format!("Renamed {} file(s).", self.recorded)
        } else {
            format!(
                "Renamed {} file(s), skipped {} on conflict.",
                self.recorded,
                self.skipped.len()
            )
        }
    }
}

/// Rename every included entry that has a preview, against the live folder.
///
/// A batch is pushed onto `history` on every call, even when nothing was
/// renamed or a rename failed part way; operations done before a failure
/// stay applied and stay undoable.
pub fn execute_batch(
    folder: &Path,
    entries: &mut [FileEntry],
    selection: &Selection,
    config: &Configuration,
    history: &mut History,
) -> Result<RenameReport> {
    let mut batch = RenameBatch::new(config.simulation_mode);
    let outcome = apply_entries(folder, entries, selection, config, &mut batch);

    tracing::info!(
        folder = %folder.display(),
        operations = batch.len(),
        simulated = batch.simulated,
        ok = outcome.is_ok(),
        "rename batch finished"
    );
    history.push(batch);
    outcome
}

fn apply_entries(
    folder: &Path,
    entries: &mut [FileEntry],
    selection: &Selection,
    config: &Configuration,
    batch: &mut RenameBatch,
) -> Result<RenameReport> {
    let simulated = config.simulation_mode;
    let mut report = RenameReport {
        simulated,
        ..RenameReport::default()
    };

    for (index, entry) in entries.iter_mut().enumerate() {
        if !selection.includes(index) {
            continue;
        }
        let Some(candidate) = entry.preview_name.as_deref() else {
            continue;
        };
        if candidate == entry.original_name {
            continue;
        }

        let old_path = folder.join(&entry.original_name);
        let candidate_path = folder.join(candidate);
        let new_path = match resolve(
            &old_path,
            &candidate_path,
            config.conflict_strategy,
            |path: &Path| path.exists(),
        ) {
            Resolution::Proceed(path) => path,
            Resolution::Skip => {
                tracing::warn!(
                    source = %old_path.display(),
                    target = %candidate_path.display(),
                    "target exists, skipping"
                );
                report.skipped.push(entry.original_name.clone());
                continue;
            }
        };

        if !simulated && new_path != old_path {
            fs::rename(&old_path, &new_path).map_err(|source| RenameError::RenameFailed {
                from: old_path.clone(),
                to: new_path.clone(),
                source,
            })?;
        }
        tracing::debug!(
            from = %old_path.display(),
            to = %new_path.display(),
            simulated,
            "renamed"
        );

        if !simulated {
            if let Some(name) = new_path.file_name() {
                entry.original_name = name.to_string_lossy().into_owned();
            }
            entry.preview_name = None;
        }

        batch.operations.push(RenameOperation { old_path, new_path });
        report.recorded += 1;
    }

    Ok(report)
}
