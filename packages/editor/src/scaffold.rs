//! # Scaffolding
//!
//! Multi-step edits used by the data-class browser and the table settings.
//! Each is a sequence of ordinary engine calls, so every step obeys the same
//! legality rules and id allocation as a single edit.

use crate::address::Address;
use crate::factory::CreateData;
use crate::locator::{find_deep, node_at, node_at_mut};
use crate::mutations::{modify, Mutation};
use form_protocol::{ComponentKind, Config, FormDocument, Node};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const EDIT_BUTTON_TYPE: &str = "EDIT";
pub const DELETE_BUTTON_TYPE: &str = "DELETE";

/// One component of a generated form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitComponent {
    pub kind: ComponentKind,
    #[serde(default)]
    pub create: CreateData,
}

/// Append one column per creation entry to a table
pub fn create_init_table_columns(doc: &FormDocument, table_id: &str, creates: &[CreateData]) -> FormDocument {
    creates.iter().fold(doc.clone(), |doc, create| {
        let add = Mutation::Add {
            kind: ComponentKind::DataTableColumn,
            create: Some(create.clone()),
            target: Address::table(table_id),
        };
        modify(&doc, &add).document
    })
}

/// Insert a generated form at `target`, optionally followed by a right-aligned
/// row of workflow buttons (Cancel / Proceed).
pub fn create_init_form(
    doc: &FormDocument,
    creates: &[InitComponent],
    workflow_buttons: bool,
    target: &Address,
) -> FormDocument {
    let mut doc = doc.clone();
    for component in creates {
        let add = Mutation::Add {
            kind: component.kind,
            create: Some(component.create.clone()),
            target: target.clone(),
        };
        doc = modify(&doc, &add).document;
    }
    if !workflow_buttons {
        return doc;
    }

    let layout = modify(
        &doc,
        &Mutation::Add {
            kind: ComponentKind::Layout,
            create: Some(CreateData::from_config(
                Config::new().with("type", "FLEX").with("justifyContent", "END"),
            )),
            target: target.clone(),
        },
    );
    let Some(layout_id) = layout.new_node_id else {
        return doc;
    };

    let buttons = [
        CreateData::new("Cancel", "#{ivyWorkflowView.cancel()}").with_config(
            Config::new()
                .with("variant", "SECONDARY")
                .with("processOnlySelf", true)
                .with("style", "FLAT"),
        ),
        CreateData::new("Proceed", "#{logic.close}").with_config(
            Config::new()
                .with("variant", "PRIMARY")
                .with("type", "SUBMIT")
                .with("icon", "si si-check-1"),
        ),
    ];
    buttons.into_iter().fold(layout.document, |doc, create| {
        let add = Mutation::Add {
            kind: ComponentKind::Button,
            create: Some(create),
            target: Address::structure(layout_id.as_str()),
        };
        modify(&doc, &add).document
    })
}

pub fn edit_row_button() -> Config {
    Config::new()
        .with("name", "")
        .with("action", "editRow")
        .with("type", EDIT_BUTTON_TYPE)
        .with("icon", "pi pi-pencil")
}

pub fn delete_row_button() -> Config {
    Config::new()
        .with("name", "")
        .with("action", "deleteRow")
        .with("type", DELETE_BUTTON_TYPE)
        .with("icon", "pi pi-trash")
        .with("variant", "DANGER")
        .with("confirmDialog", true)
        .with("confirmHeader", "Delete Confirmation")
        .with("confirmMessage", "Are you sure you want to delete row: #{row}?")
        .with("confirmOkValue", "Yes")
        .with("confirmCancelValue", "No")
}

fn is_row_button(node: &Node) -> bool {
    node.is_button() && matches!(node.config.get_str("type"), Some(EDIT_BUTTON_TYPE | DELETE_BUTTON_TYPE))
}

fn table_at<'a>(doc: &'a FormDocument, table_id: &str) -> Option<&'a Node> {
    let location = find_deep(&doc.components, table_id)?;
    node_at(&doc.components, &location.node_path()).filter(|node| node.is_table())
}

fn table_at_mut<'a>(doc: &'a mut FormDocument, table_id: &str) -> Option<&'a mut Node> {
    let location = find_deep(&doc.components, table_id)?;
    node_at_mut(&mut doc.components, &location.node_path()).filter(|node| node.is_table())
}

/// Make a table row-editable.
///
/// Adds a linked "Edit Row" dialog right after the table, EDIT and DELETE
/// buttons in an action column (reusing an existing one), and records the
/// dialog in the table's `editDialogId`. Tables that already have a dialog
/// are left alone.
pub fn create_edit_components(doc: &FormDocument, table_id: &str) -> FormDocument {
    let Some(table) = table_at(doc, table_id) else {
        warn!(%table_id, "Cannot scaffold edit components: not a table");
        return doc.clone();
    };
    if table.config.get_str("editDialogId").is_some_and(|id| !id.is_empty()) {
        return doc.clone();
    }
    let action_column = table
        .children()
        .and_then(|columns| columns.iter().find(|column| column.is_action_column()))
        .map(|column| column.id.clone());

    // Insert before the table, then step past it
    let dialog = modify(
        doc,
        &Mutation::Add {
            kind: ComponentKind::Dialog,
            create: Some(CreateData::new("Edit Row", table_id)),
            target: Address::node(table_id),
        },
    );
    let Some(dialog_id) = dialog.new_node_id else {
        return doc.clone();
    };
    let mut next = modify(&dialog.document, &Mutation::MoveDown { id: dialog_id.clone() }).document;

    let column_id = match action_column {
        Some(id) => id,
        None => {
            let column = modify(
                &next,
                &Mutation::Add {
                    kind: ComponentKind::DataTableColumn,
                    create: Some(CreateData::from_config(
                        Config::new().with("header", "").with("asActionColumn", true),
                    )),
                    target: Address::table(table_id),
                },
            );
            let Some(id) = column.new_node_id else {
                return doc.clone();
            };
            next = column.document;
            id
        }
    };

    for config in [edit_row_button(), delete_row_button()] {
        next = modify(
            &next,
            &Mutation::Add {
                kind: ComponentKind::Button,
                create: Some(CreateData::from_config(config)),
                target: Address::column(column_id.as_str()),
            },
        )
        .document;
    }

    if let Some(table) = table_at_mut(&mut next, table_id) {
        table.config.set("editDialogId", dialog_id);
        table.config.set("isEditable", true);
    }
    next
}

/// Undo [`create_edit_components`]: drop the EDIT/DELETE buttons and the
/// linked dialog, and clear the table's flags. The action column stays.
pub fn delete_edit_components(doc: &FormDocument, table_id: &str) -> FormDocument {
    let Some(table) = table_at(doc, table_id) else {
        warn!(%table_id, "Cannot remove edit components: not a table");
        return doc.clone();
    };
    let dialog_id = table
        .config
        .get_str("editDialogId")
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    let mut next = doc.clone();
    if let Some(table) = table_at_mut(&mut next, table_id) {
        for column in table.children_mut().into_iter().flatten() {
            if let Some(buttons) = column.children_mut() {
                buttons.retain(|button| !is_row_button(button));
            }
        }
        table.config.set("editDialogId", "");
        table.config.set("isEditable", false);
    }

    match dialog_id {
        Some(id) => modify(&next, &Mutation::Remove { id }).document,
        None => next,
    }
}
