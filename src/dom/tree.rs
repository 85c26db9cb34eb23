//! Tree operations: insert, remove, reparent, duplicate, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The UI node tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is
/// O(1). Children own their position in the parent's child list; the parent
/// link is a non-owning back-reference for cascade/layout walks.
#[derive(Debug, Default)]
pub struct Tree {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as a child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(self.nodes.contains_key(parent), "parent node does not exist");
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Remove a node and all its descendants recursively.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't
    /// exist. Per-node registries elsewhere (animator, bindings, focus) must
    /// be purged by the caller; `UiTree::remove_node` does this.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from parent's children list.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        // Collect and remove the whole subtree (BFS).
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    to_remove.push_back(child);
                }
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Deep-copy the subtree rooted at `id` as a new sibling under the same
    /// parent. A root-level node duplicates to another root-level node.
    ///
    /// Returns the id of the copy, or `None` if `id` does not exist.
    pub fn duplicate(&mut self, id: NodeId) -> Option<NodeId> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        let parent = self.parent(id);
        Some(self.duplicate_under(id, parent))
    }

    fn duplicate_under(&mut self, source: NodeId, parent: Option<NodeId>) -> NodeId {
        let data = self.nodes[source].clone();
        let copy = match parent {
            Some(p) => self.insert_child(p, data),
            None => {
                let id = self.nodes.insert(data);
                self.children.insert(id, Vec::new());
                id
            }
        };

        let kids: Vec<NodeId> = self.children(source).to_vec();
        for child in kids {
            self.duplicate_under(child, Some(copy));
        }
        copy
    }

    /// Move `node` to become a child of `new_parent`, keeping its subtree.
    ///
    /// # Panics
    ///
    /// Panics (debug) if either `node` or `new_parent` does not exist.
    pub fn reparent(&mut self, node: NodeId, new_parent: NodeId) {
        debug_assert!(self.nodes.contains_key(node), "node does not exist");
        debug_assert!(self.nodes.contains_key(new_parent), "new_parent does not exist");

        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
        }

        self.parent.insert(node, new_parent);
        if let Some(siblings) = self.children.get_mut(new_parent) {
            siblings.push(node);
        }
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Mark `id` and every descendant layout-dirty.
    pub fn mark_layout_dirty(&mut self, id: NodeId) {
        for node in self.walk_depth_first(id) {
            if let Some(data) = self.nodes.get_mut(node) {
                data.layout_dirty = true;
            }
        }
    }

    /// Mark `id` and every descendant style-dirty.
    pub fn mark_style_dirty(&mut self, id: NodeId) {
        for node in self.walk_depth_first(id) {
            if let Some(data) = self.nodes.get_mut(node) {
                data.style_dirty = true;
            }
        }
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Breadth-first traversal starting from `start`.
    pub fn walk_breadth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current) {
                queue.push_back(child);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeKind;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Tree, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let root = tree.insert(NodeData::new(NodeKind::Container).with_id("root"));
        let a = tree.insert_child(root, NodeData::new(NodeKind::Panel).with_id("a").with_class("left"));
        let b = tree.insert_child(root, NodeData::new(NodeKind::Panel).with_id("b").with_class("right"));
        let c = tree.insert_child(a, NodeData::new(NodeKind::Button).with_id("c"));
        let d = tree.insert_child(a, NodeData::new(NodeKind::Text).with_id("d"));
        (tree, root, a, b, c, d)
    }

    #[test]
    fn insert_sets_root() {
        let mut tree = Tree::new();
        let id = tree.insert(NodeData::new(NodeKind::Panel));
        assert_eq!(tree.root(), Some(id));
    }

    #[test]
    fn insert_second_does_not_change_root() {
        let mut tree = Tree::new();
        let first = tree.insert(NodeData::new(NodeKind::Panel));
        let _second = tree.insert(NodeData::new(NodeKind::Panel));
        assert_eq!(tree.root(), Some(first));
    }

    #[test]
    fn parent_child_relationship() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.children(root), &[a, _b]);
        assert_eq!(tree.children(a), &[c, _d]);
    }

    #[test]
    fn ancestors() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.ancestors(c), vec![a, root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn remove_subtree() {
        let (mut tree, root, a, b, c, d) = build_tree();
        tree.remove(a);
        assert!(!tree.contains(a));
        assert!(!tree.contains(c));
        assert!(!tree.contains(d));
        assert!(tree.contains(root));
        assert!(tree.contains(b));
        assert_eq!(tree.children(root), &[b]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_root_clears_root() {
        let (mut tree, root, ..) = build_tree();
        tree.remove(root);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn remove_stale_id_is_none() {
        let mut tree = Tree::new();
        let id = tree.insert(NodeData::new(NodeKind::Panel));
        tree.remove(id);
        assert!(tree.remove(id).is_none());
    }

    #[test]
    fn duplicate_copies_subtree() {
        let (mut tree, root, a, _b, _c, _d) = build_tree();
        let copy = tree.duplicate(a).unwrap();

        assert_ne!(copy, a);
        assert_eq!(tree.parent(copy), Some(root));
        // Subtree shape preserved: two children, same kinds.
        assert_eq!(tree.children(copy).len(), 2);
        let kinds: Vec<NodeKind> = tree
            .children(copy)
            .iter()
            .map(|&k| tree.get(k).unwrap().kind)
            .collect();
        assert_eq!(kinds, vec![NodeKind::Button, NodeKind::Text]);
        // Original untouched, total count grew by 3.
        assert_eq!(tree.children(a).len(), 2);
        assert_eq!(tree.len(), 8);
    }

    #[test]
    fn duplicate_is_independent_of_source() {
        let (mut tree, _root, a, ..) = build_tree();
        let copy = tree.duplicate(a).unwrap();
        tree.get_mut(a).unwrap().text = "changed".into();
        assert_eq!(tree.get(copy).unwrap().text, "");
    }

    #[test]
    fn duplicate_missing_is_none() {
        let mut tree = Tree::new();
        let id = tree.insert(NodeData::new(NodeKind::Panel));
        tree.remove(id);
        assert!(tree.duplicate(id).is_none());
    }

    #[test]
    fn reparent_moves_subtree() {
        let (mut tree, root, a, b, c, _d) = build_tree();
        tree.reparent(c, b);
        assert_eq!(tree.parent(c), Some(b));
        assert!(!tree.children(a).contains(&c));
        assert!(tree.children(b).contains(&c));
        assert_eq!(tree.ancestors(c), vec![b, root]);
    }

    #[test]
    fn walk_depth_first_preorder() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
    }

    #[test]
    fn walk_breadth_first_levels() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.walk_breadth_first(root), vec![root, a, b, c, d]);
    }

    #[test]
    fn dirty_flags_propagate_to_descendants() {
        let (mut tree, _root, a, _b, c, d) = build_tree();
        for id in [a, c, d] {
            tree.get_mut(id).unwrap().layout_dirty = false;
            tree.get_mut(id).unwrap().style_dirty = false;
        }

        tree.mark_layout_dirty(a);
        assert!(tree.get(a).unwrap().layout_dirty);
        assert!(tree.get(c).unwrap().layout_dirty);
        assert!(tree.get(d).unwrap().layout_dirty);
        assert!(!tree.get(a).unwrap().style_dirty);

        tree.mark_style_dirty(a);
        assert!(tree.get(c).unwrap().style_dirty);
    }
}
