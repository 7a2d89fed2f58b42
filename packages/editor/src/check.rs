//! # Document checker
//!
//! The engine never produces an illegal tree, but documents also arrive
//! from disk and from older editors. `check_document` reports everything the
//! engine would have refused.

use crate::locator::{find_deep, node_at};
use crate::mutations::accepts_child;
use form_protocol::{ComponentKind, FormDocument, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// A finding about one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Offending node
    pub node_id: String,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, message: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            rule: rule.into(),
            message: message.into(),
            node_id: node_id.into(),
        }
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            rule: rule.into(),
            message: message.into(),
            node_id: node_id.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}

/// All structural problems of a document, in tree order
pub fn check_document(doc: &FormDocument) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen = HashMap::new();

    check_nodes(doc, &doc.components, None, &mut seen, &mut diagnostics);

    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, count)| *count > 1).collect();
    duplicates.sort();
    for (id, count) in duplicates {
        diagnostics.push(Diagnostic::error(
            "duplicate-id",
            format!("Id is used by {count} nodes"),
            id,
        ));
    }

    diagnostics
}

fn check_nodes<'a>(
    doc: &FormDocument,
    nodes: &'a [Node],
    parent: Option<&Node>,
    seen: &mut HashMap<&'a str, usize>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for node in nodes {
        *seen.entry(node.id.as_str()).or_default() += 1;

        if !accepts_child(parent, node.kind) {
            diagnostics.push(placement_error(parent, node));
        }
        if node.is_table() {
            check_edit_dialog(doc, node, diagnostics);
        }

        if let Some(children) = node.children() {
            check_nodes(doc, children, Some(node), seen, diagnostics);
        }
        if let Some(buttons) = &node.config.buttons {
            for button in buttons {
                *seen.entry(button.id.as_str()).or_default() += 1;
            }
        }
    }
}

fn placement_error(parent: Option<&Node>, node: &Node) -> Diagnostic {
    match parent {
        Some(table) if table.is_table() => Diagnostic::error(
            "table-child",
            format!("Table {} may only contain columns, found {}", table.id, node.kind),
            &node.id,
        ),
        Some(column) if column.is_action_column() => Diagnostic::error(
            "action-column-child",
            format!("Action column {} may only contain buttons, found {}", column.id, node.kind),
            &node.id,
        ),
        Some(column) if column.is_column() => Diagnostic::error(
            "column-child",
            format!("Column {} is not an action column and cannot hold children", column.id),
            &node.id,
        ),
        _ => Diagnostic::error("stray-column", "Columns may only be placed inside a table", &node.id),
    }
}

fn check_edit_dialog(doc: &FormDocument, table: &Node, diagnostics: &mut Vec<Diagnostic>) {
    let Some(dialog_id) = table.config.get_str("editDialogId").filter(|id| !id.is_empty()) else {
        return;
    };
    let Some(location) = find_deep(&doc.components, dialog_id) else {
        diagnostics.push(Diagnostic::warning(
            "edit-dialog",
            format!("editDialogId points to missing node {dialog_id}"),
            &table.id,
        ));
        return;
    };
    match node_at(&doc.components, &location.node_path()) {
        Some(node) if node.kind != ComponentKind::Dialog => diagnostics.push(Diagnostic::error(
            "edit-dialog",
            format!("editDialogId points to {} {dialog_id}, expected a Dialog", node.kind),
            &table.id,
        )),
        _ => {
            let table_parent = find_deep(&doc.components, &table.id).map(|table| table.parent_path);
            if table_parent.as_ref() != Some(&location.parent_path) {
                diagnostics.push(Diagnostic::warning(
                    "edit-dialog-placement",
                    format!("Edit dialog {dialog_id} is not a sibling of its table"),
                    &table.id,
                ));
            }
        }
    }
}
