//! # Drop-zone addresses
//!
//! Targets of structural edits are plain strings coming from the canvas:
//! either a bare node id ("insert at this node's position") or a reserved
//! prefix plus a container id ("append to this container").

use serde::{Deserialize, Serialize};
use std::fmt;

pub const CANVAS_DROPZONE_ID: &str = "canvas";
pub const DELETE_DROPZONE_ID: &str = "delete";
pub const STRUCTURE_DROPZONE_ID_PREFIX: &str = "layout-";
pub const TABLE_DROPZONE_ID_PREFIX: &str = "table-";
pub const COLUMN_DROPZONE_ID_PREFIX: &str = "column-";
pub const DIALOG_DROPZONE_ID_PREFIX: &str = "dialog-";

/// Serialized as the raw address string
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Address {
    /// Append to the root-level components
    #[default]
    Canvas,

    /// Remove without re-insertion
    Delete,

    /// Append to a layout, fieldset, panel or dialog
    Structure(String),

    /// Append a column to a data table
    Table(String),

    /// Append a button to an action column
    Column(String),

    /// Append to a dialog's content
    Dialog(String),

    /// The exact position of an existing node
    Node(String),
}

impl Address {
    /// An empty address means the canvas root
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == CANVAS_DROPZONE_ID {
            return Address::Canvas;
        }
        if raw == DELETE_DROPZONE_ID {
            return Address::Delete;
        }
        if let Some(id) = raw.strip_prefix(STRUCTURE_DROPZONE_ID_PREFIX) {
            return Address::Structure(id.to_string());
        }
        if let Some(id) = raw.strip_prefix(TABLE_DROPZONE_ID_PREFIX) {
            return Address::Table(id.to_string());
        }
        if let Some(id) = raw.strip_prefix(COLUMN_DROPZONE_ID_PREFIX) {
            return Address::Column(id.to_string());
        }
        if let Some(id) = raw.strip_prefix(DIALOG_DROPZONE_ID_PREFIX) {
            return Address::Dialog(id.to_string());
        }
        Address::Node(raw.to_string())
    }

    pub fn node(id: impl Into<String>) -> Self {
        Address::Node(id.into())
    }

    pub fn structure(id: impl Into<String>) -> Self {
        Address::Structure(id.into())
    }

    pub fn table(id: impl Into<String>) -> Self {
        Address::Table(id.into())
    }

    pub fn column(id: impl Into<String>) -> Self {
        Address::Column(id.into())
    }

    /// True for the reserved "append" forms, false for bare node ids
    pub fn is_drop_zone(&self) -> bool {
        !matches!(self, Address::Node(_))
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Address::parse(raw)
    }
}

impl From<String> for Address {
    fn from(raw: String) -> Self {
        Address::parse(&raw)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Canvas => f.write_str(CANVAS_DROPZONE_ID),
            Address::Delete => f.write_str(DELETE_DROPZONE_ID),
            Address::Structure(id) => write!(f, "{STRUCTURE_DROPZONE_ID_PREFIX}{id}"),
            Address::Table(id) => write!(f, "{TABLE_DROPZONE_ID_PREFIX}{id}"),
            Address::Column(id) => write!(f, "{COLUMN_DROPZONE_ID_PREFIX}{id}"),
            Address::Dialog(id) => write!(f, "{DIALOG_DROPZONE_ID_PREFIX}{id}"),
            Address::Node(id) => f.write_str(id),
        }
    }
}
