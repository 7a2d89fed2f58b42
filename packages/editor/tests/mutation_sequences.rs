//! Tests for chains of edits
//!
//! This tests:
//! - Move round-trips
//! - Two-step table/dialog removal
//! - Undo/redo through a session
//! - Document integrity after many operations

mod fixtures;

use fixtures::{filled, order, table};
use form_editor::{
    check_document, collect_ids, create_edit_components, delete_edit_components, is_editable_table, modify,
    move_down, move_up, remove, Address, ComponentKind, CreateData, EditSession, FormDocument, Mutation, Node,
    PostEffectEngine,
};

fn five_roots() -> FormDocument {
    let kinds = [
        ComponentKind::Input,
        ComponentKind::Text,
        ComponentKind::Button,
        ComponentKind::Checkbox,
        ComponentKind::Link,
    ];
    FormDocument::with_components(
        kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| Node::new((index + 1).to_string(), *kind, Default::default()))
            .collect(),
    )
}

#[test]
fn test_move_round_trip() {
    let doc = five_roots();
    let moved = move_down(&doc, "2").document;
    assert_eq!(order(&moved), ["1", "3", "2", "4", "5"]);

    let restored = move_up(&moved, "2").document;
    assert_eq!(restored, doc);
}

#[test]
fn test_remove_table_then_dialog() {
    let editable = create_edit_components(&table(), "1");
    let dialog_id = editable.components[0]
        .config
        .get_str("editDialogId")
        .unwrap()
        .to_string();

    // the engine alone leaves the dialog behind
    let without_table = remove(&editable, "1").document;
    assert_eq!(order(&without_table), [dialog_id.as_str()]);

    let clean = remove(&without_table, &dialog_id).document;
    assert!(clean.components.is_empty());
}

#[test]
fn test_post_effects_remove_linked_dialog() {
    let editable = create_edit_components(&table(), "1");
    let result = PostEffectEngine::new().apply_with_effects(&Mutation::Remove { id: "1".into() }, &editable);
    assert!(result.document.components.is_empty());
}

#[test]
fn test_editable_table_round_trip() {
    let editable = create_edit_components(&table(), "1");
    assert!(is_editable_table(&editable.components, "1"));
    assert!(check_document(&editable).is_empty());

    let plain = delete_edit_components(&editable, "1");
    assert!(!is_editable_table(&plain.components, "1"));
    assert_eq!(plain.components.len(), 1);
    assert!(check_document(&plain).is_empty());
}

#[test]
fn test_ids_stay_unique_across_paste_chain() {
    let mut doc = filled();
    for target in ["1", "3", "31", "4", "layout-5", "canvas"] {
        let source = &doc.components[2];
        let paste = Mutation::Paste {
            kind: source.kind,
            clipboard: source.config.clone(),
            target: Address::parse(target),
        };
        doc = modify(&doc, &paste).document;
    }

    let total = count_nodes(&doc.components);
    assert_eq!(collect_ids(&doc.components).len(), total);
    assert!(check_document(&doc).is_empty());
}

fn count_nodes(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| {
            1 + node.config.components.as_deref().map_or(0, count_nodes)
                + node.config.buttons.as_deref().map_or(0, count_nodes)
        })
        .sum()
}

#[test]
fn test_session_undo_redo_sequence() {
    let mut session = EditSession::new(FormDocument::empty());

    let layout = session
        .apply(&Mutation::Add {
            kind: ComponentKind::Layout,
            create: None,
            target: Address::Canvas,
        })
        .unwrap();
    let input = session
        .apply(&Mutation::Add {
            kind: ComponentKind::Input,
            create: Some(CreateData::new("Name", "#{data.name}")),
            target: Address::structure(layout.as_str()),
        })
        .unwrap();
    session.apply(&Mutation::Dnd {
        active: input.clone(),
        target: Address::Canvas,
        create: None,
    });

    assert_eq!(order(session.document()), [layout.as_str(), input.as_str()]);
    assert_eq!(session.version, 3);

    assert!(session.undo());
    assert_eq!(order(session.document()), [layout.as_str()]);
    assert_eq!(session.document().components[0].children().unwrap().len(), 1);

    assert!(session.undo());
    assert!(session.undo());
    assert!(session.document().components.is_empty());
    assert!(!session.undo());

    assert!(session.redo());
    assert_eq!(order(session.document()), [layout.as_str()]);
}

#[test]
fn test_session_cascades_table_removal() {
    let mut session = EditSession::new(table());
    session.replace(create_edit_components(session.document(), "1"), "make editable");
    assert_eq!(session.document().components.len(), 2);

    session.apply(&Mutation::Dnd {
        active: "1".into(),
        target: Address::Delete,
        create: None,
    });
    assert!(session.document().components.is_empty());

    // table and dialog come back together
    assert!(session.undo());
    assert_eq!(session.document().components.len(), 2);
}

#[test]
fn test_retyping_keeps_table_dialog_link_consistent() {
    let mut session = EditSession::new(table());
    session.replace(create_edit_components(session.document(), "1"), "make editable");
    let dialog_id = session.document().components[1].id.clone();

    // the linked dialog keeps its kind
    session.apply(&Mutation::ChangeType {
        id: dialog_id.clone(),
        kind: ComponentKind::Layout,
    });
    assert_eq!(session.document().components[1].kind, ComponentKind::Dialog);
    assert!(check_document(session.document()).is_empty());

    // retyping the table takes its dialog along
    session.apply(&Mutation::ChangeType {
        id: "1".into(),
        kind: ComponentKind::Layout,
    });
    assert_eq!(order(session.document()), ["1"]);
    assert_eq!(session.document().components[0].kind, ComponentKind::Layout);
    assert!(check_document(session.document()).is_empty());
}

#[test]
fn test_moving_edit_dialog_away_is_reported() {
    let mut session = EditSession::new(table());
    session.replace(create_edit_components(session.document(), "1"), "make editable");
    let dialog_id = session.document().components[1].id.clone();

    let layout = session
        .apply(&Mutation::Add {
            kind: ComponentKind::Layout,
            create: None,
            target: Address::Canvas,
        })
        .unwrap();
    session.apply(&Mutation::Dnd {
        active: dialog_id,
        target: Address::structure(layout.as_str()),
        create: None,
    });

    let diagnostics = check_document(session.document());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "edit-dialog-placement");
    assert!(!diagnostics[0].is_error());
}
