//! # Structural Mutations
//!
//! The seven structural edits of the form editor. Field-level config edits
//! from the property sidebar do not go through here.
//!
//! ## Semantics
//!
//! - `Add` / `Paste` mint fresh ids and insert at the resolved target. A
//!   pasted table starts without an edit dialog.
//! - `Dnd` either creates (source is a kind name) or relocates (source is a
//!   node id). Dropping onto the delete address removes the node.
//! - `MoveUp` / `MoveDown` shift a node within its own collection, clamped.
//! - `ChangeType` swaps the kind in place and keeps the id. A dialog that a
//!   table uses as its edit dialog cannot change kind.
//!
//! ## Insertion legality
//!
//! - a table accepts only columns
//! - a column accepts only buttons, and only when it is an action column
//! - the canvas and structures never accept a column
//!
//! [`Mutation::apply`] leaves the document untouched when it returns an
//! error. [`modify`] wraps it: failures are logged and degrade to "document
//! unchanged" so callers never see an error path.

use crate::address::Address;
use crate::factory::{apply_config_of_previous, create_config, create_node, dialog_buttons, CreateData};
use crate::ids::IdAllocator;
use crate::locator::{collection_at_mut, find_deep, node_at, node_at_mut, parent_at, resolve, Location};
use crate::queries::table_linking_dialog;
use form_protocol::{ComponentKind, Config, FormDocument, Node};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Structural edits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a new node of `kind` at `target` (the canvas by default)
    Add {
        kind: ComponentKind,
        #[serde(default)]
        create: Option<CreateData>,
        #[serde(default)]
        target: Address,
    },

    /// Drag result: `active` is a palette kind name or an existing node id
    Dnd {
        active: String,
        target: Address,
        #[serde(default)]
        create: Option<CreateData>,
    },

    /// Excise a node and its subtree
    Remove { id: String },

    MoveUp { id: String },

    MoveDown { id: String },

    /// Insert a structural copy of a clipboard snapshot with fresh ids
    Paste {
        kind: ComponentKind,
        clipboard: Config,
        target: Address,
    },

    /// Replace a node's kind in place
    ChangeType { id: String, kind: ComponentKind },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Target not found: {0}")]
    TargetNotFound(String),

    #[error("{container} does not accept a {child}")]
    IllegalChild { container: String, child: ComponentKind },

    #[error("Dialog {dialog} is the edit dialog of table {table}")]
    LinkedDialog { dialog: String, table: String },
}

impl Mutation {
    /// Short action name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Add { .. } => "add",
            Mutation::Dnd { .. } => "dnd",
            Mutation::Remove { .. } => "remove",
            Mutation::MoveUp { .. } => "moveUp",
            Mutation::MoveDown { .. } => "moveDown",
            Mutation::Paste { .. } => "paste",
            Mutation::ChangeType { .. } => "changeType",
        }
    }

    /// Apply in place and return the id of the node created, if any.
    ///
    /// On error the document is exactly as it was.
    pub fn apply(&self, doc: &mut FormDocument) -> Result<Option<String>, MutationError> {
        let nodes = &mut doc.components;
        match self {
            Mutation::Add { kind, create, target } => Self::apply_add(nodes, *kind, create.as_ref(), target),

            Mutation::Dnd { active, target, create } => match ComponentKind::from_str(active) {
                Ok(kind) => Self::apply_add(nodes, kind, create.as_ref(), target),
                Err(_) => Self::apply_move(nodes, active, target).map(|_| None),
            },

            Mutation::Remove { id } => Self::take(nodes, id).map(|_| None),

            Mutation::MoveUp { id } => Self::apply_shift(nodes, id, Shift::Up).map(|_| None),

            Mutation::MoveDown { id } => Self::apply_shift(nodes, id, Shift::Down).map(|_| None),

            Mutation::Paste { kind, clipboard, target } => Self::apply_paste(nodes, *kind, clipboard, target),

            Mutation::ChangeType { id, kind } => Self::apply_change_type(nodes, id, *kind),
        }
    }

    /// Validate without applying
    pub fn validate(&self, doc: &FormDocument) -> Result<(), MutationError> {
        match self {
            Mutation::Add { kind, target, .. } | Mutation::Paste { kind, target, .. } => {
                Self::locate_insert(&doc.components, target, *kind).map(|_| ())
            }
            Mutation::Remove { id } | Mutation::MoveUp { id } | Mutation::MoveDown { id } => {
                find_deep(&doc.components, id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::NodeNotFound(id.clone()))
            }
            // Relocation and type changes depend on the tree after excision
            Mutation::Dnd { .. } | Mutation::ChangeType { .. } => self.apply(&mut doc.clone()).map(|_| ()),
        }
    }

    fn apply_add(
        nodes: &mut Vec<Node>,
        kind: ComponentKind,
        create: Option<&CreateData>,
        target: &Address,
    ) -> Result<Option<String>, MutationError> {
        let location = Self::locate_insert(nodes, target, kind)?;
        let node = create_node(nodes, kind, create);
        let id = node.id.clone();
        Self::insert(nodes, &location, node)?;
        Ok(Some(id))
    }

    fn apply_paste(
        nodes: &mut Vec<Node>,
        kind: ComponentKind,
        clipboard: &Config,
        target: &Address,
    ) -> Result<Option<String>, MutationError> {
        let mut config = clipboard.clone();
        unlink_edit_dialogs(kind, &mut config);
        let create = CreateData::from_config(config);
        Self::apply_add(nodes, kind, Some(&create), target)
    }

    fn apply_move(nodes: &mut Vec<Node>, id: &str, target: &Address) -> Result<(), MutationError> {
        let origin = find_deep(nodes, id).ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        let node = Self::take(nodes, id)?;

        if *target == Address::Delete {
            return Ok(());
        }

        match Self::locate_insert(nodes, target, node.kind) {
            Ok(location) => Self::insert(nodes, &location, node),
            Err(error) => {
                // Put it back where it came from; the parent path is unaffected by the excision
                Self::insert(nodes, &origin, node)?;
                Err(error)
            }
        }
    }

    fn apply_shift(nodes: &mut Vec<Node>, id: &str, shift: Shift) -> Result<(), MutationError> {
        let location = find_deep(nodes, id).ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        let collection = collection_at_mut(nodes, &location.parent_path)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;

        let from = location.index;
        let to = match shift {
            Shift::Up => from.saturating_sub(1),
            Shift::Down => (from + 1).min(collection.len().saturating_sub(1)),
        };
        if from != to {
            let node = collection.remove(from);
            collection.insert(to, node);
        }
        Ok(())
    }

    fn apply_change_type(nodes: &mut [Node], id: &str, kind: ComponentKind) -> Result<Option<String>, MutationError> {
        let location = find_deep(nodes, id).ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        Self::check_child(parent_at(nodes, &location), kind)?;

        let path = location.node_path();
        let previous = node_at(nodes, &path).ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        if previous.kind == ComponentKind::Dialog && kind != ComponentKind::Dialog {
            if let Some(table) = table_linking_dialog(nodes, id) {
                return Err(MutationError::LinkedDialog {
                    dialog: id.to_string(),
                    table: table.id.clone(),
                });
            }
        }

        let mut current = Node::new(previous.id.clone(), kind, create_config(kind, None));
        apply_config_of_previous(previous, &mut current);

        if kind == ComponentKind::Dialog && current.config.buttons.as_ref().map_or(true, Vec::is_empty) {
            let mut ids = IdAllocator::for_nodes(nodes);
            current.config.buttons = Some(dialog_buttons(&mut ids));
        }

        let slot = node_at_mut(nodes, &path).ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        *slot = current;
        Ok(Some(id.to_string()))
    }

    /// Resolve `target` and check the container accepts `kind`
    fn locate_insert(nodes: &[Node], target: &Address, kind: ComponentKind) -> Result<Location, MutationError> {
        let location = resolve(nodes, target).ok_or_else(|| MutationError::TargetNotFound(target.to_string()))?;
        Self::check_child(parent_at(nodes, &location), kind)?;
        Ok(location)
    }

    fn check_child(container: Option<&Node>, child: ComponentKind) -> Result<(), MutationError> {
        if accepts_child(container, child) {
            return Ok(());
        }
        Err(MutationError::IllegalChild {
            container: container.map_or_else(|| "canvas".to_string(), |node| format!("{} {}", node.kind, node.id)),
            child,
        })
    }

    fn insert(nodes: &mut Vec<Node>, location: &Location, node: Node) -> Result<(), MutationError> {
        let collection = collection_at_mut(nodes, &location.parent_path)
            .ok_or_else(|| MutationError::TargetNotFound(node.id.clone()))?;
        let index = location.index.min(collection.len());
        collection.insert(index, node);
        Ok(())
    }

    /// Excise a node from its parent collection and return it
    fn take(nodes: &mut Vec<Node>, id: &str) -> Result<Node, MutationError> {
        let location = find_deep(nodes, id).ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        let collection = collection_at_mut(nodes, &location.parent_path)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        Ok(collection.remove(location.index))
    }
}

/// A pasted table must not share the source table's edit dialog
fn unlink_edit_dialogs(kind: ComponentKind, config: &mut Config) {
    if kind.is_table() && config.get_str("editDialogId").is_some_and(|id| !id.is_empty()) {
        config.set("editDialogId", "");
        config.set("isEditable", false);
    }
    for child in config.components.iter_mut().flatten() {
        unlink_edit_dialogs(child.kind, &mut child.config);
    }
}

#[derive(Debug, Clone, Copy)]
enum Shift {
    Up,
    Down,
}

/// Whether `container` (`None` = canvas root) may directly hold a `child`
pub fn accepts_child(container: Option<&Node>, child: ComponentKind) -> bool {
    match container {
        Some(node) if node.is_table() => child.is_column(),
        Some(node) if node.is_column() => child.is_button() && node.is_action_column(),
        _ => !child.is_column(),
    }
}

/// Result of a structural edit
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Independent post-edit document; equal to the input when the edit was refused
    pub document: FormDocument,

    /// Id of the node created by `Add`, `Paste` or a palette `Dnd`; the
    /// preserved id for `ChangeType`
    pub new_node_id: Option<String>,
}

/// Apply one mutation to a copy of `document`.
///
/// The input is never touched. Refused edits are logged and return an
/// unchanged copy with no new node id.
pub fn modify(document: &FormDocument, mutation: &Mutation) -> MutationResult {
    let mut next = document.clone();
    match mutation.apply(&mut next) {
        Ok(new_node_id) => {
            debug!(action = mutation.name(), new_node_id = ?new_node_id, "Applied mutation");
            MutationResult {
                document: next,
                new_node_id,
            }
        }
        Err(error) => {
            warn!(action = mutation.name(), %error, "Refused structural edit");
            MutationResult {
                document: document.clone(),
                new_node_id: None,
            }
        }
    }
}

pub fn add(document: &FormDocument, kind: ComponentKind, create: Option<CreateData>, target: Option<Address>) -> MutationResult {
    modify(
        document,
        &Mutation::Add {
            kind,
            create,
            target: target.unwrap_or_default(),
        },
    )
}

pub fn dnd(document: &FormDocument, active: &str, target: Address, create: Option<CreateData>) -> MutationResult {
    modify(
        document,
        &Mutation::Dnd {
            active: active.to_string(),
            target,
            create,
        },
    )
}

pub fn remove(document: &FormDocument, id: &str) -> MutationResult {
    modify(document, &Mutation::Remove { id: id.to_string() })
}

pub fn move_up(document: &FormDocument, id: &str) -> MutationResult {
    modify(document, &Mutation::MoveUp { id: id.to_string() })
}

pub fn move_down(document: &FormDocument, id: &str) -> MutationResult {
    modify(document, &Mutation::MoveDown { id: id.to_string() })
}

pub fn paste(document: &FormDocument, kind: ComponentKind, clipboard: Config, target: Address) -> MutationResult {
    modify(document, &Mutation::Paste { kind, clipboard, target })
}

pub fn change_type(document: &FormDocument, id: &str, kind: ComponentKind) -> MutationResult {
    modify(
        document,
        &Mutation::ChangeType {
            id: id.to_string(),
            kind,
        },
    )
}
