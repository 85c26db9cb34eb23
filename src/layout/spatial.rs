//! Spatial hit testing over resolved rectangles.

use crate::dom::node::NodeId;
use crate::dom::tree::Tree;
use crate::geometry::Vec2;

/// Find the topmost node containing `point`, starting from `root`.
///
/// Depth-first, children before self, in reverse child order so later ("on
/// top") siblings win. Skips `display: none` subtrees.
pub fn hit_test(tree: &Tree, root: NodeId, point: Vec2) -> Option<NodeId> {
    let data = tree.get(root)?;
    if !data.is_visible() {
        return None;
    }

    for &child in tree.children(root).iter().rev() {
        if let Some(hit) = hit_test(tree, child, point) {
            return Some(hit);
        }
    }

    if data.rect.contains(point) {
        Some(root)
    } else {
        None
    }
}
