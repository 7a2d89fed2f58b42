//! # Post-Effect System
//!
//! Some edits need follow-up edits to keep the document consistent. The
//! engine itself never cascades; instead each effect inspects the primary
//! mutation against the pre-edit document and returns further mutations,
//! which are applied one engine call at a time.
//!
//! Built in:
//! - Removing a table removes the edit dialog its `editDialogId` points to.
//! - So does changing a table into any other kind.

use crate::address::Address;
use crate::locator::{find_deep, node_at};
use crate::mutations::{modify, Mutation, MutationResult};
use form_protocol::{FormDocument, Node};
use tracing::debug;

/// Follow-up triggered by a mutation
pub trait PostEffect: std::fmt::Debug {
    /// Inspect the mutation against the document it is about to change
    fn analyze(&self, mutation: &Mutation, doc: &FormDocument) -> Vec<Mutation>;
}

/// Delete the linked edit dialog when its table goes away
#[derive(Debug)]
pub struct RemoveLinkedEditDialog;

impl PostEffect for RemoveLinkedEditDialog {
    fn analyze(&self, mutation: &Mutation, doc: &FormDocument) -> Vec<Mutation> {
        let removed_id = match mutation {
            Mutation::Remove { id } => id,
            Mutation::Dnd {
                active,
                target: Address::Delete,
                ..
            } => active,
            Mutation::ChangeType { id, kind } if !kind.is_table() => {
                return retyped_table_dialog(doc, id).into_iter().collect();
            }
            _ => return vec![],
        };

        let Some(removed) = find_deep(&doc.components, removed_id)
            .and_then(|location| node_at(&doc.components, &location.node_path()))
        else {
            return vec![];
        };

        let mut dialogs = Vec::new();
        collect_edit_dialogs(removed, &mut dialogs);

        // a dialog inside the removed subtree goes with it
        dialogs
            .into_iter()
            .filter(|dialog_id| !subtree_contains(removed, dialog_id))
            .map(|id| Mutation::Remove { id })
            .collect()
    }
}

fn retyped_table_dialog(doc: &FormDocument, id: &str) -> Option<Mutation> {
    let node = find_deep(&doc.components, id).and_then(|location| node_at(&doc.components, &location.node_path()))?;
    if !node.is_table() {
        return None;
    }
    let dialog_id = node.config.get_str("editDialogId").filter(|id| !id.is_empty())?;
    Some(Mutation::Remove {
        id: dialog_id.to_string(),
    })
}

fn collect_edit_dialogs(node: &Node, dialogs: &mut Vec<String>) {
    if node.is_table() {
        if let Some(dialog_id) = node.config.get_str("editDialogId").filter(|id| !id.is_empty()) {
            dialogs.push(dialog_id.to_string());
        }
    }
    for child in node.children().into_iter().flatten() {
        collect_edit_dialogs(child, dialogs);
    }
}

fn subtree_contains(node: &Node, id: &str) -> bool {
    node.id == id
        || node
            .children()
            .is_some_and(|children| children.iter().any(|child| subtree_contains(child, id)))
}

/// Runs registered effects around each mutation
#[derive(Debug)]
pub struct PostEffectEngine {
    effects: Vec<Box<dyn PostEffect>>,
}

impl PostEffectEngine {
    /// Create engine with default effects
    pub fn new() -> Self {
        Self {
            effects: vec![Box::new(RemoveLinkedEditDialog)],
        }
    }

    /// Engine with no effects registered
    pub fn empty() -> Self {
        Self { effects: Vec::new() }
    }

    pub fn register(&mut self, effect: Box<dyn PostEffect>) {
        self.effects.push(effect);
    }

    /// Analyze a mutation and generate all secondary mutations
    pub fn analyze(&self, mutation: &Mutation, doc: &FormDocument) -> Vec<Mutation> {
        self.effects
            .iter()
            .flat_map(|effect| effect.analyze(mutation, doc))
            .collect()
    }

    /// Apply a mutation, then each of its follow-ups as a separate edit.
    ///
    /// Follow-ups only run when the primary edit changed the document. The
    /// returned node id is the primary edit's.
    pub fn apply_with_effects(&self, mutation: &Mutation, doc: &FormDocument) -> MutationResult {
        let secondary = self.analyze(mutation, doc);
        let primary = modify(doc, mutation);
        if primary.document == *doc {
            return primary;
        }

        let mut document = primary.document;
        for follow_up in secondary {
            debug!(action = follow_up.name(), trigger = mutation.name(), "Applying post-effect");
            document = modify(&document, &follow_up).document;
        }

        MutationResult {
            document,
            new_node_id: primary.new_node_id,
        }
    }
}

impl Default for PostEffectEngine {
    fn default() -> Self {
        Self::new()
    }
}
