use std::fs;

use crate::error::{RenameError, Result};
use crate::models::RenameBatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoReport {
    pub reverted: usize,
    pub simulated: bool,
}

/// Undo stack of executed batches, most recent last.
#[derive(Debug, Default)]
pub struct History {
    batches: Vec<RenameBatch>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, batch: RenameBatch) {
        self.batches.push(batch);
    }

    pub fn depth(&self) -> usize {
        self.batches.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.batches.is_empty()
    }

    pub fn last(&self) -> Option<&RenameBatch> {
        self.batches.last()
    }

    pub fn clear(&mut self) {
        self.batches.clear();
    }

    /// Pop the latest batch and reverse its operations, last first.
    ///
    /// Returns `Ok(None)` on an empty stack. On failure the batch stays popped
    /// and the operations before the failing one (in undo order) stay reversed;
    /// the rest are left as they are.
    pub fn undo(&mut self) -> Result<Option<UndoReport>> {
        let Some(batch) = self.batches.pop() else {
            return Ok(None);
        };

        if batch.simulated {
            tracing::info!(operations = batch.len(), "discarded simulated batch");
            return Ok(Some(UndoReport {
                reverted: 0,
                simulated: true,
            }));
        }

        let mut reverted = 0usize;
        for operation in batch.operations.iter().rev() {
            if operation.old_path != operation.new_path {
                fs::rename(&operation.new_path, &operation.old_path).map_err(|source| {
                    tracing::warn!(
                        from = %operation.new_path.display(),
                        to = %operation.old_path.display(),
                        error = %source,
                        "undo stopped"
                    );
                    RenameError::UndoFailed {
                        from: operation.new_path.clone(),
                        to: operation.old_path.clone(),
                        source,
                    }
                })?;
                tracing::debug!(
                    from = %operation.new_path.display(),
                    to = %operation.old_path.display(),
                    "reverted"
                );
            }
            reverted += 1;
        }

        tracing::info!(reverted, remaining = self.batches.len(), "undo completed");
        Ok(Some(UndoReport {
            reverted,
            simulated: false,
        }))
    }
}
