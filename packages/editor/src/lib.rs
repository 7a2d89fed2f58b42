//! # Form Editor
//!
//! Structural editing engine for form documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ protocol: FormDocument / Node / defaults    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: structural edits                    │
//! │  - Resolve drop-zone addresses              │
//! │  - Mint ids from the tree                   │
//! │  - Apply mutations with legality checks     │
//! │  - Post-effects, undo history, sessions     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots in, snapshots out**: an edit never touches its input
//! 2. **No hidden state**: the next id is derived from the tree each time
//! 3. **Refuse, don't fail**: illegal edits return the document unchanged
//!
//! ## Usage
//!
//! ```rust,ignore
//! use form_editor::{modify, Address, Mutation};
//! use form_protocol::{ComponentKind, FormDocument};
//!
//! let doc = FormDocument::empty();
//! let result = modify(&doc, &Mutation::Add {
//!     kind: ComponentKind::Input,
//!     create: None,
//!     target: Address::Canvas,
//! });
//! assert_eq!(result.new_node_id.as_deref(), Some("input1"));
//! ```
//!
//! ### Sessions
//!
//! ```rust,ignore
//! use form_editor::{EditSession, Mutation};
//!
//! let mut session = EditSession::load("form.json")?;
//! session.apply(&Mutation::Remove { id: "datatable1".into() });
//! session.undo();
//! session.save()?;
//! ```

mod address;
mod check;
mod errors;
mod factory;
mod ids;
mod locator;
mod mutations;
mod post_effects;
mod queries;
mod scaffold;
mod session;
mod undo_stack;

pub use address::{
    Address, CANVAS_DROPZONE_ID, COLUMN_DROPZONE_ID_PREFIX, DELETE_DROPZONE_ID, DIALOG_DROPZONE_ID_PREFIX,
    STRUCTURE_DROPZONE_ID_PREFIX, TABLE_DROPZONE_ID_PREFIX,
};
pub use check::{check_document, Diagnostic, DiagnosticLevel};
pub use errors::EditorError;
pub use factory::{apply_config_of_previous, component_for_data_type, create_config, create_node, template_for, CreateData};
pub use ids::{collect_ids, next_id, regenerate_ids, IdAllocator};
pub use locator::{find_deep, resolve, Location};
pub use mutations::{
    accepts_child, add, change_type, dnd, modify, move_down, move_up, paste, remove, Mutation, MutationError,
    MutationResult,
};
pub use post_effects::{PostEffect, PostEffectEngine, RemoveLinkedEditDialog};
pub use queries::{creation_target_id, enclosing_table, find_element, is_editable_table, parent_of};
pub use scaffold::{
    create_edit_components, create_init_form, create_init_table_columns, delete_edit_components, InitComponent,
};
pub use session::EditSession;
pub use undo_stack::{HistoryEntry, UndoStack};

// Re-export the document model for convenience
pub use form_protocol::{ComponentKind, Config, FormDocument, Node};
