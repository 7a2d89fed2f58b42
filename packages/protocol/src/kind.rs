//! Component kinds and their structural capabilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of component kinds a form can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Button,
    Checkbox,
    Combobox,
    Composite,
    DataTable,
    DataTableColumn,
    DatePicker,
    Dialog,
    Fieldset,
    Input,
    Layout,
    Link,
    Panel,
    Radio,
    Select,
    Text,
    Textarea,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 17] = [
        ComponentKind::Button,
        ComponentKind::Checkbox,
        ComponentKind::Combobox,
        ComponentKind::Composite,
        ComponentKind::DataTable,
        ComponentKind::DataTableColumn,
        ComponentKind::DatePicker,
        ComponentKind::Dialog,
        ComponentKind::Fieldset,
        ComponentKind::Input,
        ComponentKind::Layout,
        ComponentKind::Link,
        ComponentKind::Panel,
        ComponentKind::Radio,
        ComponentKind::Select,
        ComponentKind::Text,
        ComponentKind::Textarea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "Button",
            ComponentKind::Checkbox => "Checkbox",
            ComponentKind::Combobox => "Combobox",
            ComponentKind::Composite => "Composite",
            ComponentKind::DataTable => "DataTable",
            ComponentKind::DataTableColumn => "DataTableColumn",
            ComponentKind::DatePicker => "DatePicker",
            ComponentKind::Dialog => "Dialog",
            ComponentKind::Fieldset => "Fieldset",
            ComponentKind::Input => "Input",
            ComponentKind::Layout => "Layout",
            ComponentKind::Link => "Link",
            ComponentKind::Panel => "Panel",
            ComponentKind::Radio => "Radio",
            ComponentKind::Select => "Select",
            ComponentKind::Text => "Text",
            ComponentKind::Textarea => "Textarea",
        }
    }

    /// Prefix used when minting ids for this kind (`datatablecolumn`, `button`, ...)
    pub fn id_prefix(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Generic layout-like containers: children may be any non-column kind
    pub fn is_structure(&self) -> bool {
        matches!(
            self,
            ComponentKind::Layout | ComponentKind::Fieldset | ComponentKind::Panel | ComponentKind::Dialog
        )
    }

    pub fn is_table(&self) -> bool {
        matches!(self, ComponentKind::DataTable)
    }

    pub fn is_column(&self) -> bool {
        matches!(self, ComponentKind::DataTableColumn)
    }

    pub fn is_button(&self) -> bool {
        matches!(self, ComponentKind::Button)
    }

    /// Kinds whose config holds a nested `components` list
    pub fn is_container(&self) -> bool {
        self.is_structure() || self.is_table() || self.is_column()
    }

    /// Radio and Select share the dynamic item list properties
    pub fn is_radio_select(&self) -> bool {
        matches!(self, ComponentKind::Radio | ComponentKind::Select)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a component kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown component kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
