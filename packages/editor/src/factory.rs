//! # Component factory
//!
//! Builds new nodes from the per-kind defaults. Callers creating a node from
//! a data-class attribute or a palette entry only know a generic label and
//! value; this module maps that shorthand onto each kind's own field names.

use crate::ids::{regenerate_ids, IdAllocator};
use form_protocol::{instantiate, ComponentKind, Config, Node};
use serde::{Deserialize, Serialize};

/// Creation shorthand: generic label/value plus explicit config overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
}

impl CreateData {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: Some(value.into()),
            config: None,
        }
    }

    /// Clipboard form: only a config snapshot
    pub fn from_config(config: Config) -> Self {
        Self {
            label: None,
            value: None,
            config: Some(config),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field names the label/value shorthand maps onto for a kind
fn shorthand_keys(kind: ComponentKind) -> (Option<&'static str>, Option<&'static str>) {
    match kind {
        ComponentKind::Button => (Some("name"), Some("action")),
        ComponentKind::Checkbox
        | ComponentKind::Input
        | ComponentKind::Textarea
        | ComponentKind::Radio
        | ComponentKind::Select => (Some("label"), Some("value")),
        ComponentKind::Dialog => (Some("header"), Some("linkedComponent")),
        ComponentKind::Composite => (Some("name"), None),
        ComponentKind::DataTableColumn => (Some("header"), Some("value")),
        ComponentKind::Text => (None, Some("content")),
        _ => (None, None),
    }
}

/// Default config of `kind` with the creation shorthand applied
pub fn template_for(kind: ComponentKind, create: &CreateData) -> Config {
    let mut overrides = Config::new();
    let (label_key, value_key) = shorthand_keys(kind);

    if let (Some(key), Some(label)) = (label_key, &create.label) {
        overrides.set(key, label.as_str());
    }
    if let (Some(key), Some(value)) = (value_key, &create.value) {
        overrides.set(key, value.as_str());
    }
    if let Some(config) = &create.config {
        overrides.merge(config.clone());
    }

    instantiate(kind, Some(overrides))
}

/// Config for a new node, plain defaults when no creation data is given
pub fn create_config(kind: ComponentKind, create: Option<&CreateData>) -> Config {
    match create {
        Some(create) => template_for(kind, create),
        None => instantiate(kind, None),
    }
}

/// Build a node with fresh ids for insertion into `nodes`.
///
/// Dialogs always get their Cancel/Save footer buttons unless the creation
/// data already carries buttons (a pasted dialog). Any nodes carried in by
/// the creation data are re-identified along with the new node.
pub fn create_node(nodes: &[Node], kind: ComponentKind, create: Option<&CreateData>) -> Node {
    let mut node = Node::new(String::new(), kind, create_config(kind, create));
    if kind == ComponentKind::Dialog && node.config.buttons.as_ref().map_or(true, Vec::is_empty) {
        node.config.buttons = Some(blank_dialog_buttons());
    }
    regenerate_ids(nodes, &mut node);
    node
}

/// Cancel/Save footer buttons for a dialog, minted from `ids`
pub fn dialog_buttons(ids: &mut IdAllocator) -> Vec<Node> {
    let mut buttons = blank_dialog_buttons();
    for button in &mut buttons {
        button.id = ids.next(button.kind);
    }
    buttons
}

fn blank_dialog_buttons() -> Vec<Node> {
    vec![
        Node::new(String::new(), ComponentKind::Button, dialog_cancel_button()),
        Node::new(String::new(), ComponentKind::Button, dialog_save_button()),
    ]
}

pub fn dialog_cancel_button() -> Config {
    instantiate(
        ComponentKind::Button,
        Some(
            Config::new()
                .with("name", "Cancel")
                .with("action", "cancelEdit")
                .with("type", "DIALOGCANCEL")
                .with("variant", "SECONDARY")
                .with("style", "FLAT"),
        ),
    )
}

pub fn dialog_save_button() -> Config {
    instantiate(
        ComponentKind::Button,
        Some(
            Config::new()
                .with("name", "Save")
                .with("action", "saveEdit")
                .with("type", "DIALOGSAVE")
                .with("variant", "PRIMARY")
                .with("icon", "si si-check-1"),
        ),
    )
}

/// Component suggested for a data-class attribute type
pub fn component_for_data_type(data_type: &str) -> Option<(ComponentKind, Option<Config>)> {
    if data_type.starts_with("List<") && data_type.ends_with('>') {
        return Some((ComponentKind::DataTable, None));
    }

    match data_type {
        "String" => Some((ComponentKind::Input, None)),
        "Number" | "Byte" | "Short" | "Integer" | "Long" | "Float" | "Double" | "BigDecimal" => {
            Some((ComponentKind::Input, Some(Config::new().with("type", "NUMBER"))))
        }
        "Boolean" => Some((ComponentKind::Checkbox, None)),
        "Date" | "DateTime" | "java.util.Date" => Some((ComponentKind::DatePicker, None)),
        _ => None,
    }
}

fn same_container_family(a: ComponentKind, b: ComponentKind) -> bool {
    (a.is_structure() && b.is_structure()) || (a.is_table() && b.is_table()) || (a.is_column() && b.is_column())
}

/// Carry shared settings over when a node is replaced by another kind.
///
/// Every property of `current` that `previous` also has is copied. Child
/// lists only move between kinds of the same container family so a table's
/// columns never end up inside a layout. Table data sources and radio/select
/// dynamic item lists are mapped onto each other.
pub fn apply_config_of_previous(previous: &Node, current: &mut Node) {
    let keys: Vec<String> = current.config.props.keys().cloned().collect();
    for key in keys {
        if let Some(value) = previous.config.props.get(&key) {
            current.config.props.insert(key, value.clone());
        }
    }

    if same_container_family(previous.kind, current.kind) && current.config.components.is_some() {
        if let Some(children) = &previous.config.components {
            current.config.components = Some(children.clone());
        }
    }
    if current.config.buttons.is_some() {
        if let Some(buttons) = &previous.config.buttons {
            current.config.buttons = Some(buttons.clone());
        }
    }

    if current.kind.is_table() && previous.kind.is_radio_select() {
        if let Some(list) = previous.config.get("dynamicItemsList") {
            current.config.props.insert("value".to_string(), list.clone());
        }
    }
    if previous.kind.is_table() && current.kind.is_radio_select() {
        if let Some(value) = previous.config.get("value") {
            current.config.props.insert("dynamicItemsList".to_string(), value.clone());
        }
    }
}
