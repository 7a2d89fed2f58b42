//! Read-only questions about a node's place in the tree.

use crate::address::Address;
use crate::locator::{find_deep, node_at, parent_at, resolve};
use form_protocol::Node;

/// Direct structural parent; `None` for root-level nodes and unknown ids
pub fn parent_of<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    let location = find_deep(nodes, id)?;
    parent_at(nodes, &location)
}

/// The table a node belongs to: a table itself, the table owning a column,
/// or the table owning the column a button sits in
pub fn enclosing_table<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    let location = find_deep(nodes, id)?;
    let mut node = node_at(nodes, &location.node_path())?;
    loop {
        if node.is_table() {
            return Some(node);
        }
        if !node.is_column() && !node.is_button() {
            return None;
        }
        node = parent_of(nodes, &node.id)?;
    }
}

/// Whether the node belongs to a table flagged `isEditable`
pub fn is_editable_table(nodes: &[Node], id: &str) -> bool {
    enclosing_table(nodes, id).is_some_and(|table| table.config.get_bool("isEditable"))
}

/// The table whose `editDialogId` names `dialog_id`
pub fn table_linking_dialog<'a>(nodes: &'a [Node], dialog_id: &str) -> Option<&'a Node> {
    nodes.iter().find_map(|node| {
        if node.is_table() && node.config.get_str("editDialogId") == Some(dialog_id) {
            return Some(node);
        }
        node.children().and_then(|children| table_linking_dialog(children, dialog_id))
    })
}

/// The addressed node and its parent.
///
/// Drop-zone addresses name their container, so the container itself is
/// returned. The canvas and delete addresses name no node.
pub fn find_element<'a>(nodes: &'a [Node], address: &Address) -> Option<(&'a Node, Option<&'a Node>)> {
    let location = match address {
        Address::Canvas | Address::Delete => return None,
        Address::Node(id) => find_deep(nodes, id)?,
        Address::Structure(id) | Address::Table(id) | Address::Column(id) | Address::Dialog(id) => {
            // validates the container kind before handing the container back
            resolve(nodes, address)?;
            find_deep(nodes, id)?
        }
    };
    let element = node_at(nodes, &location.node_path())?;
    Some((element, parent_at(nodes, &location)))
}

/// Where a palette click should insert, given the current selection.
///
/// A selected structure receives the new node as its last child; any other
/// selection gets the node inserted at its position.
pub fn creation_target_id(nodes: &[Node], selected: Option<&str>) -> Address {
    let Some(id) = selected else {
        return Address::Canvas;
    };
    match find_deep(nodes, id).and_then(|location| node_at(nodes, &location.node_path())) {
        Some(node) if node.is_structure() => Address::structure(id),
        _ => Address::node(id),
    }
}
