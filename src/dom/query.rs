//! String-based queries over the tree.

use super::node::{NodeData, NodeId, NodeKind};
use super::tree::Tree;

impl Tree {
    /// Find the first node with the given string id.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all nodes carrying the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// Find all nodes of the given kind.
    pub fn query_by_kind(&self, kind: NodeKind) -> Vec<NodeId> {
        self.query_all(|data| data.kind == kind)
    }

    /// Find all nodes matching a predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }
}
