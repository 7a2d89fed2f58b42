//! # Undo/Redo Stack
//!
//! Every structural edit returns a fresh document, so history is a stack of
//! whole-document snapshots rather than inverse mutations.
//!
//! ## Design
//!
//! - Before an edit is committed, the pre-edit snapshot is recorded
//! - Undo swaps the current document for the last snapshot and keeps the
//!   current one for redo
//! - New records clear the redo stack
//! - Batches collapse several edits into one undo step (the snapshot taken
//!   before the first of them)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let result = modify(&doc, &mutation);
//! stack.record(doc, Some("add"));
//! doc = result.document;
//!
//! if let Some(previous) = stack.undo(&doc) {
//!     doc = previous;
//! }
//! ```

use form_protocol::FormDocument;

/// One undo step
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// The document as it was before the step
    pub snapshot: FormDocument,

    /// Optional description of this step
    pub description: Option<String>,
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Snapshots before each step (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Snapshots of undone states (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<HistoryEntry>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Record the snapshot taken before an edit
    pub fn record(&mut self, before: FormDocument, description: Option<&str>) {
        let entry = HistoryEntry {
            snapshot: before,
            description: description.map(str::to_string),
        };

        // A batch already holds the state before its first edit
        if let Some(batch) = &mut self.current_batch {
            if batch.description.is_none() {
                batch.description = entry.description;
            }
            return;
        }
        self.push_entry(entry);
    }

    /// Start a batch: edits recorded until [`end_batch`](Self::end_batch) undo as one step
    pub fn begin_batch(&mut self, before: FormDocument) {
        self.current_batch = Some(HistoryEntry {
            snapshot: before,
            description: None,
        });
    }

    /// End the current batch and push it, unless nothing changed inside it
    pub fn end_batch(&mut self, current: &FormDocument) {
        if let Some(batch) = self.current_batch.take() {
            if batch.snapshot != *current {
                self.push_entry(batch);
            }
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates future
        self.redo_stack.clear();
    }

    /// Step back: returns the document to restore, keeping `current` for redo
    pub fn undo(&mut self, current: &FormDocument) -> Option<FormDocument> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(HistoryEntry {
            snapshot: current.clone(),
            description: entry.description.clone(),
        });
        Some(entry.snapshot)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: &FormDocument) -> Option<FormDocument> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(HistoryEntry {
            snapshot: current.clone(),
            description: entry.description.clone(),
        });
        Some(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
