//! Snapshot undo history.
//!
//! Each entry is the full box set as it was before a committed change. There
//! is no redo and no capacity limit; the stack lives as long as the loaded
//! image's unsaved edits.

#[cfg(test)]
#[path = "undo_test.rs"]
mod undo_test;

use crate::doc::BoxSet;

#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    snapshots: Vec<BoxSet>,
}

impl UndoStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state to return to on the next undo.
    pub fn push(&mut self, snapshot: BoxSet) {
        self.snapshots.push(snapshot);
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<BoxSet> {
        self.snapshots.pop()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
