//! Component nodes and their property bags.

use crate::kind::ComponentKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One component of the form tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique across the whole document
    #[serde(rename = "cid")]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ComponentKind,

    #[serde(default)]
    pub config: Config,
}

/// Kind-specific property bag.
///
/// Scalar properties live in `props`; the two node lists are typed so the
/// tree can be walked without re-parsing JSON. On the wire all three share
/// one JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Children of container kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Node>>,

    /// Footer buttons of a dialog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Node>>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property setter
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.props.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.props.insert(key.to_string(), value.into());
    }

    /// Whether the key exists, counting the two node lists as keys
    pub fn has_key(&self, key: &str) -> bool {
        match key {
            "components" => self.components.is_some(),
            "buttons" => self.buttons.is_some(),
            _ => self.props.contains_key(key),
        }
    }

    /// Shallow merge: every top-level key present in `overrides` replaces ours
    pub fn merge(&mut self, overrides: Config) {
        if overrides.components.is_some() {
            self.components = overrides.components;
        }
        if overrides.buttons.is_some() {
            self.buttons = overrides.buttons;
        }
        for (key, value) in overrides.props {
            self.props.insert(key, value);
        }
    }
}

impl From<Map<String, Value>> for Config {
    fn from(props: Map<String, Value>) -> Self {
        Self {
            components: None,
            buttons: None,
            props,
        }
    }
}

impl Node {
    pub fn new(id: impl Into<String>, kind: ComponentKind, config: Config) -> Self {
        Self {
            id: id.into(),
            kind,
            config,
        }
    }

    pub fn is_structure(&self) -> bool {
        self.kind.is_structure()
    }

    pub fn is_table(&self) -> bool {
        self.kind.is_table()
    }

    pub fn is_column(&self) -> bool {
        self.kind.is_column()
    }

    pub fn is_button(&self) -> bool {
        self.kind.is_button()
    }

    pub fn is_action_column(&self) -> bool {
        self.is_column() && self.config.get_bool("asActionColumn")
    }

    /// Children of a container kind; `None` for every other kind
    pub fn children(&self) -> Option<&Vec<Node>> {
        if self.kind.is_container() {
            self.config.components.as_ref()
        } else {
            None
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        if self.kind.is_container() {
            self.config.components.as_mut()
        } else {
            None
        }
    }

    /// Children list of a container, created empty when the config lacks one
    pub fn children_mut_or_default(&mut self) -> Option<&mut Vec<Node>> {
        if self.kind.is_container() {
            Some(self.config.components.get_or_insert_with(Vec::new))
        } else {
            None
        }
    }
}
