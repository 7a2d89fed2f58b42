//! # Edit Session Management
//!
//! An EditSession is the single place edits are serialised through. It
//! owns the current document, its undo history and the post-effect engine,
//! and tracks whether the document differs from what is on disk.
//!
//! Edits that the engine refuses leave no trace: no version bump, no
//! history entry, no dirty flag.

use crate::mutations::Mutation;
use crate::post_effects::PostEffectEngine;
use crate::undo_stack::UndoStack;
use crate::EditorError;
use form_protocol::FormDocument;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Single-user editing state for one form
#[derive(Debug)]
pub struct EditSession {
    /// Source file (if any)
    path: Option<PathBuf>,

    document: FormDocument,

    /// Current version number (increments on each effective edit)
    pub version: u64,

    dirty: bool,

    /// Write indented JSON on save
    pretty: bool,

    history: UndoStack,

    effects: PostEffectEngine,
}

impl EditSession {
    /// Memory-backed session
    pub fn new(document: FormDocument) -> Self {
        Self {
            path: None,
            document,
            version: 0,
            dirty: false,
            pretty: true,
            history: UndoStack::new(),
            effects: PostEffectEngine::new(),
        }
    }

    pub fn with_history_limit(document: FormDocument, max_levels: usize) -> Self {
        Self {
            history: UndoStack::with_max_levels(max_levels),
            ..Self::new(document)
        }
    }

    /// Load a JSON form from disk (file-backed)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let document = FormDocument::from_json(&source)?;
        info!(path = %path.display(), components = document.components.len(), "Loaded form");

        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::new(document)
        })
    }

    pub fn set_history_limit(&mut self, max_levels: usize) {
        self.history = UndoStack::with_max_levels(max_levels);
    }

    pub fn set_pretty(&mut self, pretty: bool) {
        self.pretty = pretty;
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Apply a mutation and its post-effects; returns the id of any created node.
    ///
    /// Refused edits are logged by the engine and return `None`.
    pub fn apply(&mut self, mutation: &Mutation) -> Option<String> {
        let result = self.effects.apply_with_effects(mutation, &self.document);
        self.commit(result.document, mutation.name());
        result.new_node_id
    }

    /// Like [`apply`](Self::apply) but reports why an edit would be refused
    pub fn try_apply(&mut self, mutation: &Mutation) -> Result<Option<String>, EditorError> {
        mutation.validate(&self.document)?;
        Ok(self.apply(mutation))
    }

    /// Apply several mutations as one undo step
    pub fn apply_batch(&mut self, mutations: &[Mutation], description: &str) -> Vec<Option<String>> {
        self.history.begin_batch(self.document.clone());
        self.history.set_batch_description(description);
        let ids = mutations.iter().map(|mutation| self.apply(mutation)).collect();
        self.history.end_batch(&self.document);
        ids
    }

    /// Replace the document with the output of a multi-step edit (scaffolding)
    pub fn replace(&mut self, next: FormDocument, description: &str) {
        self.commit(next, description);
    }

    fn commit(&mut self, next: FormDocument, description: &str) {
        if next == self.document {
            return;
        }
        let before = std::mem::replace(&mut self.document, next);
        self.history.record(before, Some(description));
        self.touch();
        debug!(version = self.version, %description, "Committed edit");
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }

    /// Returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.document) {
            Some(previous) => {
                self.document = previous;
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.document) {
            Some(next) => {
                self.document = next;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save document to its source file
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.clone().ok_or(EditorError::NotFileBacked)?;
        self.write_to(&path)
    }

    /// Save to `path` and make it the session's source file
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let path = path.as_ref().to_path_buf();
        self.write_to(&path)?;
        self.path = Some(path);
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), EditorError> {
        let json = if self.pretty {
            self.document.to_json_pretty()?
        } else {
            self.document.to_json()?
        };
        std::fs::write(path, json)?;
        self.dirty = false;
        info!(path = %path.display(), version = self.version, "Saved form");
        Ok(())
    }
}
