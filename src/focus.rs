//! Focus chain and directional navigation.
//!
//! [`FocusChain`] maintains an ordered list of focusable nodes (visible,
//! enabled, interactive kinds) in depth-first tree order. Cyclic stepping
//! moves through that order; directional navigation picks the spatially
//! nearest candidate in a half-plane, falling back to cyclic stepping when
//! nothing qualifies.

use crate::dom::node::{NodeId, NodeState};
use crate::dom::tree::Tree;

/// A direction for spatial focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Weight of the cross-axis distance in directional scoring. The primary
/// axis dominates so navigation prefers candidates straight ahead.
const CROSS_AXIS_WEIGHT: f32 = 0.6;

/// Maintains an ordered list of focusable nodes for navigation.
///
/// Rebuilt from the tree each frame after arrange, so candidate rectangles
/// are current. If the previously focused node is still present, focus is
/// preserved; otherwise it is cleared.
#[derive(Debug, Default)]
pub struct FocusChain {
    /// Focusable nodes in depth-first order.
    nodes: Vec<NodeId>,
    /// Index of the currently focused node, or `None` if no focus.
    current: Option<usize>,
}

impl FocusChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the chain: depth-first from the root, keeping nodes that are
    /// visible, enabled, and of an interactive kind.
    pub fn rebuild(&mut self, tree: &Tree) {
        let old_focused = self.current_node();

        self.nodes.clear();
        self.current = None;

        let Some(root) = tree.root() else {
            return;
        };

        for id in tree.walk_depth_first(root) {
            if let Some(data) = tree.get(id) {
                if data.kind.is_interactive()
                    && data.is_visible()
                    && !data.state.contains(NodeState::DISABLED)
                {
                    self.nodes.push(id);
                }
            }
        }

        if let Some(old_id) = old_focused {
            if let Some(pos) = self.nodes.iter().position(|&n| n == old_id) {
                self.current = Some(pos);
            }
        }
    }

    /// The currently focused node, if any.
    pub fn current_node(&self) -> Option<NodeId> {
        self.current.and_then(|idx| self.nodes.get(idx).copied())
    }

    /// Move focus to the next node in the chain. Wraps around.
    pub fn focus_next(&mut self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }
        let next = match self.current {
            Some(idx) => (idx + 1) % self.nodes.len(),
            None => 0,
        };
        self.current = Some(next);
        self.nodes.get(next).copied()
    }

    /// Move focus to the previous node in the chain. Wraps around.
    pub fn focus_previous(&mut self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }
        let prev = match self.current {
            Some(0) | None => self.nodes.len() - 1,
            Some(idx) => idx - 1,
        };
        self.current = Some(prev);
        self.nodes.get(prev).copied()
    }

    /// Move focus spatially: the nearest candidate whose center lies strictly
    /// in the requested half-plane, scored by primary-axis distance plus a
    /// weighted cross-axis distance. Falls back to cyclic stepping if no
    /// candidate qualifies (or nothing is focused yet).
    pub fn focus_directional(&mut self, tree: &Tree, direction: FocusDirection) -> Option<NodeId> {
        let Some(current_id) = self.current_node() else {
            return match direction {
                FocusDirection::Right | FocusDirection::Down => self.focus_next(),
                FocusDirection::Left | FocusDirection::Up => self.focus_previous(),
            };
        };
        let Some(current) = tree.get(current_id) else {
            return self.focus_next();
        };
        let origin = current.rect.center();

        let mut best: Option<(f32, usize)> = None;
        for (idx, &candidate_id) in self.nodes.iter().enumerate() {
            if candidate_id == current_id {
                continue;
            }
            let Some(candidate) = tree.get(candidate_id) else {
                continue;
            };
            let center = candidate.rect.center();
            let dx = center.x - origin.x;
            let dy = center.y - origin.y;

            let (primary, cross) = match direction {
                FocusDirection::Left => (-dx, dy.abs()),
                FocusDirection::Right => (dx, dy.abs()),
                FocusDirection::Up => (-dy, dx.abs()),
                FocusDirection::Down => (dy, dx.abs()),
            };
            // Strictly inside the half-plane.
            if primary <= 0.0 {
                continue;
            }

            let score = primary + CROSS_AXIS_WEIGHT * cross;
            if best.is_none_or(|(best_score, _)| score < best_score) {
                best = Some((score, idx));
            }
        }

        match best {
            Some((_, idx)) => {
                self.current = Some(idx);
                self.nodes.get(idx).copied()
            }
            None => match direction {
                FocusDirection::Right | FocusDirection::Down => self.focus_next(),
                FocusDirection::Left | FocusDirection::Up => self.focus_previous(),
            },
        }
    }

    /// Focus a specific node. Returns `true` if the node is in the chain.
    pub fn focus_node(&mut self, id: NodeId) -> bool {
        if let Some(pos) = self.nodes.iter().position(|&n| n == id) {
            self.current = Some(pos);
            true
        } else {
            false
        }
    }

    /// Drop a node from the chain, clearing focus if it was focused. Called
    /// when a node is removed from the tree.
    pub fn purge(&mut self, id: NodeId) {
        let focused = self.current_node();
        self.nodes.retain(|&n| n != id);
        self.current = focused
            .filter(|&f| f != id)
            .and_then(|f| self.nodes.iter().position(|&n| n == f));
    }

    /// Clear focus (no node focused).
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Number of focusable nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
