use crate::models::Medication;
use std::collections::VecDeque;

/// Snapshots kept per user before the oldest is evicted.
pub const UNDO_CAP: usize = 10;

/// A full copy of the medication list taken just before a state-changing
/// action. Undo restores the whole list, not the inverse of one action.
#[derive(Debug, Clone)]
pub struct UndoEntry {
    pub action: String,
    pub at: String,
    pub medications: Vec<Medication>,
}

/// Bounded stack of snapshots: oldest evicted on overflow, most recent
/// popped first.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: VecDeque<UndoEntry>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl Into<String>, at: impl Into<String>, medications: Vec<Medication>) {
        if self.entries.len() == UNDO_CAP {
            self.entries.pop_front();
        }
        self.entries.push_back(UndoEntry {
            action: action.into(),
            at: at.into(),
            medications,
        });
    }

    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
