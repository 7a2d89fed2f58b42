//! # Identifier Allocator
//!
//! Fresh ids are derived from the tree itself: the highest trailing number
//! of any id in the document plus one, prefixed with the lowercased kind
//! (`input54`, `datatablecolumn15`). Nothing is stored between calls, so the
//! same document always yields the same next id.

use form_protocol::{ComponentKind, Node};
use std::collections::HashSet;

/// Every id in the tree: nested components and dialog footer buttons included
pub fn collect_ids(nodes: &[Node]) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_into(nodes, &mut ids);
    ids
}

fn collect_into(nodes: &[Node], ids: &mut HashSet<String>) {
    for node in nodes {
        ids.insert(node.id.clone());
        if let Some(children) = &node.config.components {
            collect_into(children, ids);
        }
        if let Some(buttons) = &node.config.buttons {
            collect_into(buttons, ids);
        }
    }
}

/// Trailing decimal suffix of an id (`"text31"` → 31)
fn trailing_number(id: &str) -> Option<u64> {
    let digits = id.len() - id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    id[id.len() - digits..].parse().ok()
}

/// Highest trailing number across all ids, 0 when none carries one
pub fn highest_id_number<'a>(ids: impl IntoIterator<Item = &'a String>) -> u64 {
    ids.into_iter()
        .filter_map(|id| trailing_number(id))
        .max()
        .unwrap_or(0)
}

/// Reservation set for minting several ids against one tree
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    taken: HashSet<String>,
}

impl IdAllocator {
    pub fn for_nodes(nodes: &[Node]) -> Self {
        Self {
            taken: collect_ids(nodes),
        }
    }

    /// Reserve the ids of `node` and its whole subtree
    pub fn reserve(&mut self, node: &Node) {
        collect_into(std::slice::from_ref(node), &mut self.taken);
    }

    /// Mint and reserve the next id for `kind`
    pub fn next(&mut self, kind: ComponentKind) -> String {
        let prefix = kind.id_prefix();
        let mut number = highest_id_number(self.taken.iter()).checked_add(1);
        loop {
            // past u64::MAX, fall back to the lowest free number
            let Some(n) = number else {
                return self.lowest_free(&prefix);
            };
            let candidate = format!("{prefix}{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            tracing::debug!(%candidate, "Generated id already taken, retrying");
            number = n.checked_add(1);
        }
    }

    fn lowest_free(&mut self, prefix: &str) -> String {
        let mut n: u64 = 1;
        loop {
            let candidate = format!("{prefix}{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Reassign ids depth-first: the node, its components, then its buttons
    pub fn regenerate(&mut self, node: &mut Node) {
        node.id = self.next(node.kind);
        if let Some(children) = node.config.components.as_mut() {
            for child in children {
                self.regenerate(child);
            }
        }
        if let Some(buttons) = node.config.buttons.as_mut() {
            for button in buttons {
                self.regenerate(button);
            }
        }
    }
}

/// Next free id for a node of `kind`
pub fn next_id(nodes: &[Node], kind: ComponentKind) -> String {
    IdAllocator::for_nodes(nodes).next(kind)
}

/// Give `node` and every descendant a fresh id.
///
/// `nodes` is the tree the node will live in. The node's own old ids stay
/// reserved too, so a copy never reuses the ids of its source.
pub fn regenerate_ids(nodes: &[Node], node: &mut Node) {
    let mut ids = IdAllocator::for_nodes(nodes);
    ids.reserve(node);
    ids.regenerate(node);
}
