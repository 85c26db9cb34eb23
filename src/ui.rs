//! The UI tree orchestrator.
//!
//! [`UiTree`] owns the node tree, compiled stylesheets, design tokens, the
//! animator, the focus chain, and the binding registry, and drives the
//! per-frame pipeline: style resolution, animation, measure, arrange, focus
//! rebuild. Rendering and raw input stay outside; the game reads resolved
//! rects and computed styles and feeds pointer events and state changes in.

use crate::anim::transition::Animator;
use crate::binding::BindingRegistry;
use crate::css::cascade::{resolve_style, CompiledStylesheet};
use crate::css::computed::ComputedStyle;
use crate::css::parser::{parse_stylesheet, ParseError};
use crate::css::tokens::{TokenCollection, TokenValue};
use crate::dom::node::{NodeData, NodeId, NodeKind, NodeState};
use crate::dom::tree::Tree;
use crate::focus::{FocusChain, FocusDirection};
use crate::geometry::{Rect, Vec2};
use crate::layout::props::LayoutProps;
use crate::layout::spatial::hit_test;
use crate::layout::{arrange, measure};

/// A retained UI tree with styling, animation, layout, and input routing.
#[derive(Debug)]
pub struct UiTree {
    tree: Tree,
    sheets: Vec<CompiledStylesheet>,
    tokens: TokenCollection,
    animator: Animator,
    focus: FocusChain,
    bindings: BindingRegistry,
    /// Virtual resolution. `vw`/`vh` dimensions resolve against this.
    viewport: Vec2,
    hovered: Option<NodeId>,
    pressed: Option<NodeId>,
}

impl UiTree {
    /// Create an empty tree with the given virtual resolution.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            tree: Tree::new(),
            sheets: Vec::new(),
            tokens: TokenCollection::new(),
            animator: Animator::new(),
            focus: FocusChain::new(),
            bindings: BindingRegistry::new(),
            viewport,
            hovered: None,
            pressed: None,
        }
    }

    // ── Ownership accessors ──────────────────────────────────────────

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    pub fn bindings_mut(&mut self) -> &mut BindingRegistry {
        &mut self.bindings
    }

    pub fn focus(&self) -> &FocusChain {
        &self.focus
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Change the virtual resolution. Takes effect on the next frame.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    // ── Stylesheets and tokens ───────────────────────────────────────

    /// Parse and append a stylesheet. Later sheets override earlier ones at
    /// equal specificity. Returns the sheet's index.
    pub fn add_stylesheet(&mut self, source: &str) -> Result<usize, ParseError> {
        let sheet = parse_stylesheet(source)?;
        self.sheets.push(CompiledStylesheet::compile(&sheet));
        Ok(self.sheets.len() - 1)
    }

    /// Drop all stylesheets.
    pub fn clear_stylesheets(&mut self) {
        self.sheets.clear();
    }

    /// Insert or replace a design token.
    pub fn set_token(&mut self, name: impl Into<String>, value: TokenValue) {
        self.tokens.set(name, value);
    }

    pub fn tokens(&self) -> &TokenCollection {
        &self.tokens
    }

    // ── Frame pipeline ───────────────────────────────────────────────

    /// Run one frame at time `now` (seconds, monotonic).
    ///
    /// Pipeline order: cascade (ancestors first, always from the dense
    /// baseline), animation tick and apply, bottom-up measure, top-down
    /// arrange, focus chain rebuild. No structural edits happen mid-pass.
    pub fn frame(&mut self, now: f32) {
        let Some(root) = self.tree.root() else {
            return;
        };

        for id in self.tree.walk_depth_first(root) {
            let styles = resolve_style(&self.tree, id, &self.sheets, &self.tokens);
            if let Some(data) = self.tree.get_mut(id) {
                data.layout = LayoutProps::default();
                data.layout.apply(&styles);
                data.computed = ComputedStyle::default();
                data.computed.apply(&styles);
                data.style_dirty = false;
            }
        }

        self.animator.tick(now);
        self.animator.apply(&mut self.tree);

        measure(&mut self.tree, root, self.viewport);
        arrange(
            &mut self.tree,
            root,
            Rect::new(0.0, 0.0, self.viewport.x, self.viewport.y),
            self.viewport,
        );

        self.focus.rebuild(&self.tree);
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Remove a node and its subtree, synchronously purging every per-node
    /// registry entry (animations, bindings, focus, pointer capture) so no
    /// stale key survives the removal.
    pub fn remove_node(&mut self, id: NodeId) -> Option<NodeData> {
        let subtree = self.tree.walk_depth_first(id);
        let removed = self.tree.remove(id)?;

        for node in subtree {
            self.animator.cancel_node(node);
            self.bindings.purge(node);
            self.focus.purge(node);
            if self.hovered == Some(node) {
                self.hovered = None;
            }
            if self.pressed == Some(node) {
                self.pressed = None;
            }
        }

        Some(removed)
    }

    // ── Pointer routing ──────────────────────────────────────────────

    /// Topmost node under `point`, if any.
    pub fn hit(&self, point: Vec2) -> Option<NodeId> {
        let root = self.tree.root()?;
        hit_test(&self.tree, root, point)
    }

    /// Route a pointer-move: updates the hovered node's HOVERED flag.
    /// Returns the node now under the pointer.
    pub fn pointer_move(&mut self, point: Vec2) -> Option<NodeId> {
        let hit = self.hit(point);
        if hit != self.hovered {
            if let Some(old) = self.hovered {
                if let Some(data) = self.tree.get_mut(old) {
                    data.set_state(NodeState::HOVERED, false);
                }
            }
            if let Some(new) = hit {
                if let Some(data) = self.tree.get_mut(new) {
                    data.set_state(NodeState::HOVERED, true);
                }
            }
            self.hovered = hit;
        }
        hit
    }

    /// Route a pointer-down: presses the interactive node under `point`.
    pub fn pointer_down(&mut self, point: Vec2) -> Option<NodeId> {
        let target = self.hit(point).and_then(|id| self.interactive_target(id))?;
        if let Some(data) = self.tree.get_mut(target) {
            data.set_state(NodeState::PRESSED, true);
        }
        self.pressed = Some(target);
        Some(target)
    }

    /// Route a pointer-up: releases the pressed node and, if the pointer is
    /// still over it, dispatches a click.
    pub fn pointer_up(&mut self, point: Vec2) -> Option<NodeId> {
        let pressed = self.pressed.take();
        if let Some(id) = pressed {
            if let Some(data) = self.tree.get_mut(id) {
                data.set_state(NodeState::PRESSED, false);
            }
        }

        let target = self.hit(point).and_then(|id| self.interactive_target(id));
        if pressed.is_some() && target == pressed {
            if let Some(id) = target {
                self.dispatch_click(id);
            }
        }
        target
    }

    /// Dispatch a click at `point` directly, without the press/release pair.
    pub fn click(&mut self, point: Vec2) -> Option<NodeId> {
        let target = self.hit(point).and_then(|id| self.interactive_target(id))?;
        self.dispatch_click(target);
        Some(target)
    }

    /// The nearest interactive, enabled node at or above `id`.
    fn interactive_target(&self, id: NodeId) -> Option<NodeId> {
        let accepts = |id: NodeId| {
            self.tree
                .get(id)
                .is_some_and(|d| d.kind.is_interactive() && !d.state.contains(NodeState::DISABLED))
        };
        if accepts(id) {
            return Some(id);
        }
        self.tree.ancestors(id).into_iter().find(|&a| accepts(a))
    }

    fn dispatch_click(&mut self, target: NodeId) {
        // Toggles flip their checked state on click.
        if let Some(data) = self.tree.get_mut(target) {
            if data.kind == NodeKind::Toggle {
                let checked = data.state.contains(NodeState::CHECKED);
                data.set_state(NodeState::CHECKED, !checked);
            }
        }

        let old = self.focus.current_node();
        if self.focus.focus_node(target) {
            self.finish_focus_change(old, Some(target));
        }
        self.bindings.emit_click(target);
    }

    // ── Focus ────────────────────────────────────────────────────────

    /// Advance focus to the next node in the chain.
    pub fn focus_next(&mut self) -> Option<NodeId> {
        let old = self.focus.current_node();
        let new = self.focus.focus_next();
        self.finish_focus_change(old, new);
        new
    }

    /// Move focus to the previous node in the chain.
    pub fn focus_previous(&mut self) -> Option<NodeId> {
        let old = self.focus.current_node();
        let new = self.focus.focus_previous();
        self.finish_focus_change(old, new);
        new
    }

    /// Move focus spatially (gamepad / arrow-key navigation).
    pub fn focus_directional(&mut self, direction: FocusDirection) -> Option<NodeId> {
        let old = self.focus.current_node();
        let new = self.focus.focus_directional(&self.tree, direction);
        self.finish_focus_change(old, new);
        new
    }

    /// Focus a node by its string id. Returns `false` if the node is missing
    /// or not in the focus chain.
    pub fn focus_by_id(&mut self, id: &str) -> bool {
        let Some(node_id) = self.tree.query_by_id(id) else {
            return false;
        };
        let old = self.focus.current_node();
        if self.focus.focus_node(node_id) {
            self.finish_focus_change(old, Some(node_id));
            true
        } else {
            false
        }
    }

    /// The currently focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focus.current_node()
    }

    /// Sync FOCUSED flags and fire focus/blur callbacks after a focus move.
    fn finish_focus_change(&mut self, old: Option<NodeId>, new: Option<NodeId>) {
        if old == new {
            return;
        }
        if let Some(id) = old {
            if let Some(data) = self.tree.get_mut(id) {
                data.set_state(NodeState::FOCUSED, false);
            }
            self.bindings.emit_blur(id);
        }
        if let Some(id) = new {
            if let Some(data) = self.tree.get_mut(id) {
                data.set_state(NodeState::FOCUSED, true);
            }
            self.bindings.emit_focus(id);
        }
    }

    // ── Game-facing state accessors (by string id) ───────────────────

    /// Set a node's checked flag. Returns `false` if the id is unknown.
    pub fn set_checked(&mut self, id: &str, on: bool) -> bool {
        let Some(node_id) = self.tree.query_by_id(id) else {
            return false;
        };
        if let Some(data) = self.tree.get_mut(node_id) {
            data.set_state(NodeState::CHECKED, on);
        }
        true
    }

    /// Read a node's checked flag.
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        let node_id = self.tree.query_by_id(id)?;
        self.tree.get(node_id).map(|d| d.state.contains(NodeState::CHECKED))
    }

    /// Set a node's value, clamped to `[0, 1]`. Fires the node's
    /// value-changed callback when the value actually changes. Returns
    /// `true` if it did.
    pub fn set_value(&mut self, id: &str, value: f32) -> bool {
        let Some(node_id) = self.tree.query_by_id(id) else {
            return false;
        };
        let value = value.clamp(0.0, 1.0);
        let changed = match self.tree.get_mut(node_id) {
            Some(data) if data.value != value => {
                data.value = value;
                true
            }
            _ => false,
        };
        if changed {
            self.bindings.emit_value_changed(node_id, value);
        }
        changed
    }

    /// Read a node's value.
    pub fn value(&self, id: &str) -> Option<f32> {
        let node_id = self.tree.query_by_id(id)?;
        self.tree.get(node_id).map(|d| d.value)
    }

    /// Set a node's text content, invalidating its layout.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        let Some(node_id) = self.tree.query_by_id(id) else {
            return false;
        };
        if let Some(data) = self.tree.get_mut(node_id) {
            data.text = text.into();
            data.layout_dirty = true;
        }
        self.tree.mark_layout_dirty(node_id);
        true
    }

    /// Read a node's text content.
    pub fn text(&self, id: &str) -> Option<&str> {
        let node_id = self.tree.query_by_id(id)?;
        self.tree.get(node_id).map(|d| d.text.as_str())
    }

    /// Read a node's resolved outer rectangle from the last frame.
    pub fn node_rect(&self, id: &str) -> Option<Rect> {
        let node_id = self.tree.query_by_id(id)?;
        self.tree.get(node_id).map(|d| d.rect)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::anim::easing::Easing;
    use crate::anim::transition::AnimProperty;
    use crate::anim::value::StyleValue;

    const VIEWPORT: Vec2 = Vec2::new(400.0, 300.0);

    /// Root panel with two buttons side by side via absolute sizing.
    fn build_ui() -> (UiTree, NodeId, NodeId, NodeId) {
        let mut ui = UiTree::new(VIEWPORT);
        let root = ui.tree_mut().insert(NodeData::new(NodeKind::Panel).with_id("root"));
        let a = ui
            .tree_mut()
            .insert_child(root, NodeData::new(NodeKind::Button).with_id("a").with_text("A"));
        let b = ui
            .tree_mut()
            .insert_child(root, NodeData::new(NodeKind::Button).with_id("b").with_text("B"));
        (ui, root, a, b)
    }

    #[test]
    fn frame_resolves_styles_and_rects() {
        let (mut ui, _root, a, _b) = build_ui();
        ui.add_stylesheet(
            "#root { display: flex; flex-direction: row; } \
             Button { width: 100px; height: 40px; }",
        )
        .unwrap();

        ui.frame(0.0);

        let data = ui.tree().get(a).unwrap();
        assert_eq!(data.rect, Rect::new(0.0, 0.0, 100.0, 40.0));
        let b_rect = ui.node_rect("b").unwrap();
        assert_eq!(b_rect.x, 100.0);
    }

    #[test]
    fn frame_applies_running_animation() {
        let (mut ui, _root, a, _b) = build_ui();
        ui.frame(0.0);
        ui.animator_mut().start(
            a,
            AnimProperty::Opacity,
            StyleValue::Float(1.0),
            StyleValue::Float(0.0),
            2.0,
            Easing::Linear,
        );

        ui.frame(1.0);
        let opacity = ui.tree().get(a).unwrap().computed.opacity;
        assert!((opacity - 0.5).abs() < 1e-4);

        // Once evicted, the cascade value returns.
        ui.frame(3.0);
        ui.frame(4.0);
        assert_eq!(ui.tree().get(a).unwrap().computed.opacity, 1.0);
    }

    #[test]
    fn click_focuses_and_fires_binding() {
        let (mut ui, _root, a, b) = build_ui();
        ui.add_stylesheet(
            "#root { display: flex; } Button { width: 100px; height: 40px; }",
        )
        .unwrap();
        ui.frame(0.0);

        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        ui.bindings_mut().on_click(a, move |_| counter.set(counter.get() + 1));

        assert_eq!(ui.click(Vec2::new(50.0, 20.0)), Some(a));
        assert_eq!(clicks.get(), 1);
        assert_eq!(ui.focused(), Some(a));
        assert!(ui.tree().get(a).unwrap().state.contains(NodeState::FOCUSED));

        // Clicking the second button moves focus and clears the first flag.
        assert_eq!(ui.click(Vec2::new(150.0, 20.0)), Some(b));
        assert!(!ui.tree().get(a).unwrap().state.contains(NodeState::FOCUSED));
        assert!(ui.tree().get(b).unwrap().state.contains(NodeState::FOCUSED));
    }

    #[test]
    fn press_release_over_same_node_is_a_click() {
        let (mut ui, _root, a, _b) = build_ui();
        ui.add_stylesheet(
            "#root { display: flex; } Button { width: 100px; height: 40px; }",
        )
        .unwrap();
        ui.frame(0.0);

        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        ui.bindings_mut().on_click(a, move |_| counter.set(counter.get() + 1));

        let inside = Vec2::new(50.0, 20.0);
        assert_eq!(ui.pointer_down(inside), Some(a));
        assert!(ui.tree().get(a).unwrap().state.contains(NodeState::PRESSED));
        ui.pointer_up(inside);
        assert!(!ui.tree().get(a).unwrap().state.contains(NodeState::PRESSED));
        assert_eq!(clicks.get(), 1);

        // Release off the node: press clears, no click.
        ui.pointer_down(inside);
        ui.pointer_up(Vec2::new(390.0, 290.0));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn pointer_move_routes_hover_state() {
        let (mut ui, root, a, _b) = build_ui();
        ui.add_stylesheet(
            "#root { display: flex; } Button { width: 100px; height: 40px; }",
        )
        .unwrap();
        ui.frame(0.0);

        ui.pointer_move(Vec2::new(50.0, 20.0));
        assert!(ui.tree().get(a).unwrap().state.contains(NodeState::HOVERED));

        ui.pointer_move(Vec2::new(390.0, 290.0));
        assert!(!ui.tree().get(a).unwrap().state.contains(NodeState::HOVERED));
        assert!(ui.tree().get(root).unwrap().state.contains(NodeState::HOVERED));
    }

    #[test]
    fn toggle_flips_checked_on_click() {
        let mut ui = UiTree::new(VIEWPORT);
        let root = ui.tree_mut().insert(NodeData::new(NodeKind::Panel).with_id("root"));
        ui.tree_mut()
            .insert_child(root, NodeData::new(NodeKind::Toggle).with_id("t"));
        ui.add_stylesheet("Toggle { width: 40px; height: 20px; }").unwrap();
        ui.frame(0.0);

        assert_eq!(ui.is_checked("t"), Some(false));
        ui.click(Vec2::new(10.0, 10.0));
        assert_eq!(ui.is_checked("t"), Some(true));
        ui.click(Vec2::new(10.0, 10.0));
        assert_eq!(ui.is_checked("t"), Some(false));
    }

    #[test]
    fn set_value_clamps_and_fires_callback() {
        let mut ui = UiTree::new(VIEWPORT);
        let root = ui.tree_mut().insert(NodeData::new(NodeKind::Panel));
        let slider = ui
            .tree_mut()
            .insert_child(root, NodeData::new(NodeKind::Slider).with_id("volume"));

        let seen = Rc::new(Cell::new(-1.0f32));
        let slot = Rc::clone(&seen);
        ui.bindings_mut().on_value_changed(slider, move |_, v| slot.set(v));

        assert!(ui.set_value("volume", 2.5));
        assert_eq!(ui.value("volume"), Some(1.0));
        assert_eq!(seen.get(), 1.0);

        // Same value again: no change, no callback.
        seen.set(-1.0);
        assert!(!ui.set_value("volume", 1.0));
        assert_eq!(seen.get(), -1.0);

        assert!(!ui.set_value("missing", 0.5));
    }

    #[test]
    fn text_accessors_roundtrip() {
        let (mut ui, _root, _a, _b) = build_ui();
        assert_eq!(ui.text("a"), Some("A"));
        assert!(ui.set_text("a", "Start"));
        assert_eq!(ui.text("a"), Some("Start"));
        assert_eq!(ui.text("missing"), None);
    }

    #[test]
    fn remove_node_purges_all_registries() {
        let (mut ui, _root, a, b) = build_ui();
        ui.add_stylesheet(
            "#root { display: flex; } Button { width: 100px; height: 40px; }",
        )
        .unwrap();
        ui.frame(0.0);

        ui.bindings_mut().on_click(a, |_| {});
        ui.animator_mut().start(
            a,
            AnimProperty::Opacity,
            StyleValue::Float(1.0),
            StyleValue::Float(0.0),
            10.0,
            Easing::Linear,
        );
        ui.click(Vec2::new(50.0, 20.0));
        assert_eq!(ui.focused(), Some(a));

        ui.remove_node(a);
        assert!(ui.animator().is_empty());
        assert_eq!(ui.focused(), None);
        assert!(!ui.bindings_mut().emit_click(a));
        assert!(!ui.tree().contains(a));

        // The survivor is still focusable.
        ui.frame(1.0);
        assert_eq!(ui.focus_next(), Some(b));
    }

    #[test]
    fn focus_wrappers_sync_flags_and_callbacks() {
        let (mut ui, _root, a, b) = build_ui();
        ui.add_stylesheet(
            "#root { display: flex; } Button { width: 100px; height: 40px; }",
        )
        .unwrap();
        ui.frame(0.0);

        let blurs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&blurs);
        ui.bindings_mut().on_blur(a, move |_| counter.set(counter.get() + 1));

        assert_eq!(ui.focus_next(), Some(a));
        assert!(ui.tree().get(a).unwrap().state.contains(NodeState::FOCUSED));

        assert_eq!(ui.focus_next(), Some(b));
        assert_eq!(blurs.get(), 1);
        assert!(!ui.tree().get(a).unwrap().state.contains(NodeState::FOCUSED));

        assert!(ui.focus_by_id("a"));
        assert_eq!(ui.focused(), Some(a));
    }

    #[test]
    fn directional_focus_moves_spatially() {
        let (mut ui, _root, a, b) = build_ui();
        ui.add_stylesheet(
            "#root { display: flex; } Button { width: 100px; height: 40px; }",
        )
        .unwrap();
        ui.frame(0.0);
        ui.focus_by_id("a");

        assert_eq!(ui.focus_directional(FocusDirection::Right), Some(b));
        assert_eq!(ui.focus_directional(FocusDirection::Left), Some(a));
    }

    #[test]
    fn empty_tree_frame_is_a_no_op() {
        let mut ui = UiTree::new(VIEWPORT);
        ui.frame(0.0);
        assert!(ui.tree().is_empty());
        assert_eq!(ui.hit(Vec2::ZERO), None);
    }
}
