//! Form document: the root aggregate persisted by the editor.

use crate::error::ProtocolError;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Root-level form metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub renderer: String,
    #[serde(default)]
    pub theme: String,
    #[serde(rename = "type")]
    pub form_type: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            renderer: "JSF".to_string(),
            theme: String::new(),
            form_type: "FORM".to_string(),
        }
    }
}

/// A complete form: metadata plus the ordered root-level components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    pub id: String,

    #[serde(default)]
    pub config: FormConfig,

    #[serde(default)]
    pub components: Vec<Node>,
}

impl FormDocument {
    /// The empty form a new editor session starts from
    pub fn empty() -> Self {
        Self {
            id: "empty".to_string(),
            config: FormConfig::default(),
            components: Vec::new(),
        }
    }

    pub fn with_components(components: Vec<Node>) -> Self {
        Self {
            components,
            ..Self::empty()
        }
    }

    pub fn from_json(source: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::empty()
    }
}
