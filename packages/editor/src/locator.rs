//! # Tree Locator
//!
//! Resolves an [`Address`] to the collection it points into and the index
//! at which an insert (or the addressed node) sits.
//!
//! Locations are index paths rather than references so a caller can resolve
//! against a snapshot and then re-enter the same position mutably.
//!
//! Depth-first search only descends into container kinds (structures,
//! tables, columns); property bags of other kinds are never inspected, and
//! dialog footer buttons are not addressable.

use crate::address::Address;
use form_protocol::{ComponentKind, Node};

/// Position inside the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Index path from the root to the owning container; empty for the canvas root
    pub parent_path: Vec<usize>,

    /// Index of the addressed node, or the append position for drop-zones
    pub index: usize,
}

impl Location {
    fn root(index: usize) -> Self {
        Self {
            parent_path: Vec::new(),
            index,
        }
    }

    /// Path of the node sitting at this location
    pub fn node_path(&self) -> Vec<usize> {
        let mut path = self.parent_path.clone();
        path.push(self.index);
        path
    }
}

/// Resolve an address against the root-level components
pub fn resolve(nodes: &[Node], address: &Address) -> Option<Location> {
    let location = match address {
        Address::Canvas => Some(Location::root(nodes.len())),
        Address::Delete => None,
        Address::Structure(id) => append_into(nodes, id, |node| node.is_structure()),
        Address::Dialog(id) => append_into(nodes, id, |node| node.kind == ComponentKind::Dialog),
        Address::Table(id) => append_into(nodes, id, |node| node.is_table()),
        Address::Column(id) => find_column_container(nodes, id),
        Address::Node(id) => find_deep(nodes, id),
    };
    tracing::debug!(%address, resolved = location.is_some(), "Resolved address");
    location
}

/// Depth-first search for the exact position of `id`
pub fn find_deep(nodes: &[Node], id: &str) -> Option<Location> {
    let mut path = Vec::new();
    find_deep_in(nodes, id, &mut path)
}

fn find_deep_in(nodes: &[Node], id: &str, path: &mut Vec<usize>) -> Option<Location> {
    if let Some(index) = nodes.iter().position(|node| node.id == id) {
        return Some(Location {
            parent_path: path.clone(),
            index,
        });
    }

    for (index, node) in nodes.iter().enumerate() {
        if let Some(children) = node.children() {
            path.push(index);
            if let Some(found) = find_deep_in(children, id, path) {
                return Some(found);
            }
            path.pop();
        }
    }

    None
}

/// Find `id`, check it is the expected container, and point past its last child
fn append_into(nodes: &[Node], id: &str, accepts: impl Fn(&Node) -> bool) -> Option<Location> {
    let found = find_deep(nodes, id)?;
    let path = found.node_path();
    let container = node_at(nodes, &path)?;
    if !accepts(container) {
        return None;
    }

    Some(Location {
        index: container.children().map_or(0, Vec::len),
        parent_path: path,
    })
}

/// Columns are reached through their owning table
fn find_column_container(nodes: &[Node], id: &str) -> Option<Location> {
    let found = find_deep(nodes, id)?;
    let table = parent_at(nodes, &found)?;
    if !table.is_table() {
        return None;
    }

    let path = found.node_path();
    let column = node_at(nodes, &path)?;
    if !column.is_column() {
        return None;
    }

    Some(Location {
        index: column.children().map_or(0, Vec::len),
        parent_path: path,
    })
}

/// Node at an index path
pub fn node_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut node = nodes.get(*first)?;
    for &index in rest {
        node = node.children()?.get(index)?;
    }
    Some(node)
}

pub fn node_at_mut<'a>(nodes: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    let mut node = nodes.get_mut(*first)?;
    for &index in rest {
        node = node.children_mut()?.get_mut(index)?;
    }
    Some(node)
}

/// Container node owning a location; `None` at the canvas root
pub fn parent_at<'a>(nodes: &'a [Node], location: &Location) -> Option<&'a Node> {
    node_at(nodes, &location.parent_path)
}

/// The collection a location indexes into
pub fn collection_at_mut<'a>(nodes: &'a mut Vec<Node>, parent_path: &[usize]) -> Option<&'a mut Vec<Node>> {
    if parent_path.is_empty() {
        return Some(nodes);
    }
    node_at_mut(nodes, parent_path)?.children_mut_or_default()
}
