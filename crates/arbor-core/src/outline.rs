use std::collections::HashMap;

use crate::model::{NodeId, OutlineNode};

/// Lookup structure over one parsed outline.
///
/// Nodes carry only weak references (`parent_id`, `children_ids`); the
/// index rebuilds the tree by following them. Dangling references are
/// skipped rather than treated as errors, since the node sequence is
/// replaced atomically and a reference can only dangle on a malformed
/// engine payload.
pub struct OutlineIndex<'a> {
    nodes: &'a [OutlineNode],
    by_id: HashMap<&'a NodeId, &'a OutlineNode>,
}

impl<'a> OutlineIndex<'a> {
    pub fn new(nodes: &'a [OutlineNode]) -> Self {
        let by_id = nodes.iter().map(|n| (&n.id, n)).collect();
        Self { nodes, by_id }
    }

    pub fn get(&self, id: &NodeId) -> Option<&'a OutlineNode> {
        self.by_id.get(id).copied()
    }

    pub fn parent(&self, node: &OutlineNode) -> Option<&'a OutlineNode> {
        node.parent_id.as_ref().and_then(|id| self.get(id))
    }

    /// Top-level nodes, in sequence order.
    pub fn roots(&self) -> Vec<&'a OutlineNode> {
        self.nodes
            .iter()
            .filter(|n| n.parent_id.as_ref().and_then(|id| self.by_id.get(id)).is_none())
            .collect()
    }

    /// Children of `id`, in the order the parent lists them.
    pub fn children(&self, id: &NodeId) -> Vec<&'a OutlineNode> {
        match self.get(id) {
            Some(node) => node
                .children_ids
                .iter()
                .filter_map(|child| self.get(child))
                .collect(),
            None => Vec::new(),
        }
    }
}
