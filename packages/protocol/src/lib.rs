//! # Form Protocol
//!
//! Document model shared by the form editor and everything that persists
//! or renders forms.
//!
//! A [`FormDocument`] holds an ordered list of [`Node`]s. Container kinds
//! (layouts, fieldsets, panels, dialogs, data tables and their columns)
//! nest further nodes inside `config.components`; dialogs additionally keep
//! their footer buttons in `config.buttons`.

pub mod defaults;
mod document;
mod error;
mod kind;
mod node;

pub use defaults::{defaults_for, instantiate};
pub use document::{FormConfig, FormDocument};
pub use error::ProtocolError;
pub use kind::{ComponentKind, UnknownKind};
pub use node::{Config, Node};
