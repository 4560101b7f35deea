//! # Undo/Redo Stack
//!
//! Snapshot-based linear history over the document.
//!
//! ## Design
//!
//! - Structural commands record the pre-command document snapshot
//! - Undo swaps the present document with the top of the past stack
//! - Redo is symmetric over the future stack
//! - A new edit clears the future stack (linear history, not a tree)
//! - Transient view state is never captured; restoring a snapshot leaves
//!   selection, preview mode, and viewport exactly as they are
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//!
//! stack.record(state.document.clone());
//! state.document = edited_document;
//!
//! if let Some(document) = stack.undo(state.document.clone()) {
//!     state.document = document;
//! }
//! ```

use pagecraft_model::Document;

/// Linear undo/redo history of document snapshots.
#[derive(Debug, Clone)]
pub struct UndoStack {
    /// Past snapshots, oldest first.
    past: Vec<Document>,

    /// Undone snapshots, nearest last.
    future: Vec<Document>,

    /// Maximum number of undo levels (0 = unlimited).
    max_levels: usize,
}

impl UndoStack {
    /// Create an undo stack with the default cap (100 levels).
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_levels,
        }
    }

    /// Record the pre-command snapshot of a structural edit. Invalidates
    /// any previously undone redo path.
    pub fn record(&mut self, snapshot: Document) {
        self.past.push(snapshot);
        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Step back one edit. Returns the document to restore, keeping
    /// `present` for redo; `None` if there is nothing to undo.
    pub fn undo(&mut self, present: Document) -> Option<Document> {
        let restored = self.past.pop()?;
        self.future.push(present);
        Some(restored)
    }

    /// Step forward one undone edit. Symmetric to [`UndoStack::undo`].
    pub fn redo(&mut self, present: Document) -> Option<Document> {
        let restored = self.future.pop()?;
        self.past.push(present);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Clear all history, e.g. after a bulk document load.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
