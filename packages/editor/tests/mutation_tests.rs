//! Structural edits against realistic documents

mod fixtures;

use fixtures::{filled, node, order, order_deep, table};
use form_editor::{
    add, change_type, dnd, move_down, move_up, paste, remove, Address, ComponentKind, CreateData, FormDocument,
};

fn clipboard_of(doc: &FormDocument, id: &str) -> (ComponentKind, form_editor::Config) {
    let copy = node(doc, id);
    (copy.kind, copy.config.clone())
}

// ---- drag and drop ----

#[test]
fn test_dnd_unknown_source_is_noop() {
    let doc = FormDocument::empty();
    assert_eq!(dnd(&doc, "unknown", Address::parse(""), None).document, doc);
}

#[test]
fn test_dnd_palette_adds() {
    let doc = dnd(&FormDocument::empty(), "Input", Address::parse(""), None).document;
    assert_eq!(doc.components.len(), 1);
    assert_eq!(doc.components[0].id, "input1");
    assert_eq!(doc.components[0].kind, ComponentKind::Input);
    assert!(!doc.components[0].config.props.is_empty());

    let doc = dnd(&doc, "Button", Address::Canvas, None).document;
    assert_eq!(doc.components[1].kind, ComponentKind::Button);
}

#[test]
fn test_dnd_palette_into_layout() {
    let doc = dnd(&FormDocument::empty(), "Layout", Address::Canvas, None).document;
    let layout = format!("layout-{}", doc.components[0].id);
    let doc = dnd(&doc, "Button", Address::parse(&layout), None).document;
    let doc = dnd(&doc, "Text", Address::parse(&layout), None).document;

    assert_eq!(doc.components.len(), 1);
    let children = doc.components[0].children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].kind, ComponentKind::Button);
    assert_eq!(children[1].kind, ComponentKind::Text);
}

#[test]
fn test_dnd_move_down() {
    let doc = filled();
    assert_eq!(order(&dnd(&doc, "1", Address::node("2"), None).document), ["1", "2", "3", "4", "5"]);
    assert_eq!(order(&dnd(&doc, "1", Address::node("3"), None).document), ["2", "1", "3", "4", "5"]);
    assert_eq!(order(&dnd(&doc, "1", Address::node("4"), None).document), ["2", "3", "1", "4", "5"]);
}

#[test]
fn test_dnd_move_down_deep() {
    let doc = dnd(&filled(), "31", Address::node("33"), None).document;
    assert_eq!(order(&doc), ["1", "2", "3", "4", "5"]);
    assert_eq!(order_deep(&doc, "3"), ["32", "31", "33"]);
}

#[test]
fn test_dnd_move_up() {
    let doc = filled();
    assert_eq!(order(&dnd(&doc, "3", Address::node("2"), None).document), ["1", "3", "2", "4", "5"]);
    assert_eq!(order(&dnd(&doc, "3", Address::node("1"), None).document), ["3", "1", "2", "4", "5"]);
}

#[test]
fn test_dnd_onto_itself_is_noop() {
    let doc = filled();
    assert_eq!(dnd(&doc, "3", Address::node("3"), None).document, doc);
}

#[test]
fn test_dnd_move_up_deep() {
    let doc = dnd(&filled(), "33", Address::node("32"), None).document;
    assert_eq!(order(&doc), ["1", "2", "3", "4", "5"]);
    assert_eq!(order_deep(&doc, "3"), ["31", "33", "32"]);
}

#[test]
fn test_dnd_into_and_out_of_structures() {
    let into = dnd(&filled(), "1", Address::node("32"), None).document;
    assert_eq!(order(&into), ["2", "3", "4", "5"]);
    assert_eq!(order_deep(&into, "3"), ["31", "1", "32", "33"]);

    let out = dnd(&filled(), "32", Address::node("2"), None).document;
    assert_eq!(order(&out), ["1", "32", "2", "3", "4", "5"]);
    assert_eq!(order_deep(&out, "3"), ["31", "33"]);
}

#[test]
fn test_dnd_to_delete() {
    let doc = dnd(&filled(), "1", Address::parse("delete"), None).document;
    assert_eq!(order(&doc), ["2", "3", "4", "5"]);
}

#[test]
fn test_dnd_column_between_tables_only() {
    let doc = table();
    // a column cannot leave its table for the canvas
    assert_eq!(dnd(&doc, "11", Address::Canvas, None).document, doc);

    let reordered = dnd(&doc, "13", Address::node("11"), None).document;
    assert_eq!(order_deep(&reordered, "1"), ["13", "11", "12"]);
}

// ---- remove ----

#[test]
fn test_remove_each_root() {
    let doc = filled();
    assert_eq!(order(&remove(&doc, "1").document), ["2", "3", "4", "5"]);
    assert_eq!(order(&remove(&doc, "3").document), ["1", "2", "4", "5"]);
    assert_eq!(order(&remove(&doc, "5").document), ["1", "2", "3", "4"]);
}

#[test]
fn test_remove_deep() {
    let doc = remove(&filled(), "32").document;
    assert_eq!(order(&doc), ["1", "2", "3", "4", "5"]);
    assert_eq!(order_deep(&doc, "3"), ["31", "33"]);
}

// ---- add ----

#[test]
fn test_add_with_create_data() {
    let doc = add(&FormDocument::empty(), ComponentKind::Input, Some(CreateData::new("Age", "age")), None).document;
    assert_eq!(doc.components.len(), 1);
    assert_eq!(doc.components[0].config.get_str("label"), Some("Age"));
    assert_eq!(doc.components[0].config.get_str("value"), Some("age"));
}

#[test]
fn test_add_into_structure_position() {
    let result = add(&filled(), ComponentKind::Input, Some(CreateData::new("Age", "age")), Some(Address::node("31")));
    assert_eq!(result.new_node_id.as_deref(), Some("input54"));
    assert_eq!(order(&result.document), ["1", "2", "3", "4", "5"]);
    assert_eq!(order_deep(&result.document, "3"), ["input54", "31", "32", "33"]);
}

#[test]
fn test_add_to_datatable_is_refused() {
    let doc = table();
    let result = add(&doc, ComponentKind::Input, Some(CreateData::new("Age", "age")), Some(Address::node("11")));
    assert_eq!(result.document, doc);
    assert_eq!(result.new_node_id, None);
    assert_eq!(order_deep(&result.document, "1"), ["11", "12", "13"]);
}

#[test]
fn test_add_dialog_synthesizes_buttons() {
    let doc = add(
        &FormDocument::empty(),
        ComponentKind::Dialog,
        Some(CreateData::new("Edit Row", "datatable1")),
        None,
    )
    .document;

    assert_eq!(doc.components.len(), 1);
    let buttons = doc.components[0].config.buttons.as_ref().unwrap();
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].config.get_str("name"), Some("Cancel"));
    assert_eq!(buttons[1].config.get_str("name"), Some("Save"));
}

// ---- paste ----

#[test]
fn test_paste_duplicate_before_source() {
    let (kind, clipboard) = clipboard_of(&filled(), "1");
    let doc = paste(&filled(), kind, clipboard, Address::node("1")).document;
    assert_eq!(order(&doc), ["input54", "1", "2", "3", "4", "5"]);
}

#[test]
fn test_paste_elsewhere() {
    let (kind, clipboard) = clipboard_of(&filled(), "1");
    let doc = paste(&filled(), kind, clipboard, Address::node("4")).document;
    assert_eq!(order(&doc), ["1", "2", "3", "input54", "4", "5"]);
}

#[test]
fn test_paste_table_column() {
    let (kind, clipboard) = clipboard_of(&table(), "11");
    let doc = paste(&table(), kind, clipboard, Address::node("11")).document;
    assert_eq!(order(&doc), ["1"]);
    assert_eq!(order_deep(&doc, "1"), ["datatablecolumn15", "11", "12", "13"]);
    assert_eq!(node(&doc, "datatablecolumn15").config.get_str("value"), Some("Hello"));
}

#[test]
fn test_paste_action_column_regenerates_buttons() {
    let (kind, clipboard) = clipboard_of(&table(), "13");
    let doc = paste(&table(), kind, clipboard, Address::node("13")).document;
    let columns = doc.components[0].children().unwrap();
    assert_eq!(columns.len(), 4);
    assert_eq!(columns[2].id, "datatablecolumn15");
    let buttons = columns[2].children().unwrap();
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].id, "button16");
}

#[test]
fn test_paste_non_column_into_table_is_refused() {
    let doc = table();
    let result = paste(&doc, ComponentKind::Button, Default::default(), Address::node("11"));
    assert_eq!(result.document, doc);
}

#[test]
fn test_paste_column_outside_table_is_refused() {
    let doc = table();
    let (kind, clipboard) = clipboard_of(&doc, "11");
    assert_eq!(paste(&doc, kind, clipboard, Address::node("1")).document, doc);
}

#[test]
fn test_paste_deep_keeps_content() {
    let (kind, clipboard) = clipboard_of(&filled(), "31");
    let doc = paste(&filled(), kind, clipboard, Address::node("31")).document;
    assert_eq!(doc.components.len(), 5);
    assert_eq!(order_deep(&doc, "3"), ["text54", "31", "32", "33"]);
    assert_eq!(node(&doc, "text54").config.get_str("content"), Some("Hello"));
}

#[test]
fn test_paste_layout_regenerates_descendants() {
    let (kind, clipboard) = clipboard_of(&filled(), "3");
    let doc = paste(&filled(), kind, clipboard, Address::node("3")).document;
    assert_eq!(doc.components.len(), 6);
    assert_eq!(order_deep(&doc, "layout54"), ["text55", "button56", "input57"]);
    assert_eq!(node(&doc, "text55").config.get_str("content"), Some("Hello"));
}

#[test]
fn test_paste_table_regenerates_columns() {
    let (kind, clipboard) = clipboard_of(&table(), "1");
    let doc = paste(&table(), kind, clipboard, Address::node("1")).document;
    assert_eq!(doc.components.len(), 2);
    assert_eq!(
        order_deep(&doc, "datatable15"),
        ["datatablecolumn16", "datatablecolumn17", "datatablecolumn18"]
    );
    assert_eq!(node(&doc, "datatablecolumn16").config.get_str("value"), Some("Hello"));
}

// ---- move ----

#[test]
fn test_move_down_and_up() {
    let doc = filled();
    assert_eq!(order(&move_down(&doc, "2").document), ["1", "3", "2", "4", "5"]);
    assert_eq!(order(&move_up(&doc, "2").document), ["2", "1", "3", "4", "5"]);
    assert_eq!(order(&move_down(&doc, "3").document), ["1", "2", "4", "3", "5"]);
}

#[test]
fn test_move_deep() {
    let doc = filled();
    assert_eq!(order_deep(&move_down(&doc, "31").document, "3"), ["32", "31", "33"]);
    assert_eq!(order_deep(&move_up(&doc, "33").document, "3"), ["31", "33", "32"]);
}

#[test]
fn test_move_at_bounds_is_noop() {
    let doc = filled();
    assert_eq!(move_up(&doc, "1").document, doc);
    assert_eq!(move_down(&doc, "5").document, doc);
    assert_eq!(move_up(&doc, "31").document, doc);
    assert_eq!(move_down(&doc, "53").document, doc);
}

// ---- change type ----

#[test]
fn test_change_type_in_place() {
    let result = change_type(&filled(), "33", ComponentKind::Textarea);
    assert_eq!(result.new_node_id.as_deref(), Some("33"));
    assert_eq!(order_deep(&result.document, "3"), ["31", "32", "33"]);
    assert_eq!(node(&result.document, "33").kind, ComponentKind::Textarea);
}

#[test]
fn test_change_type_fieldset_to_panel_keeps_children() {
    let doc = change_type(&filled(), "4", ComponentKind::Panel).document;
    assert_eq!(node(&doc, "4").kind, ComponentKind::Panel);
    assert_eq!(order_deep(&doc, "4"), ["41", "42", "43"]);
    assert!(node(&doc, "4").config.get_bool("collapsible"));
    assert_eq!(node(&doc, "4").config.get_str("title"), Some("Title"));
}

#[test]
fn test_change_type_unknown_id_is_noop() {
    let doc = filled();
    assert_eq!(change_type(&doc, "99", ComponentKind::Text).document, doc);
}
