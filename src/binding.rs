//! Per-node callback registry.
//!
//! [`BindingRegistry`] maps node ids to game-side callbacks for clicks,
//! value changes, and focus transitions. The registry owns the callbacks;
//! `UiTree` fires them when input routing or state accessors trigger the
//! corresponding event, and purges a node's entries when it is removed.

use std::collections::HashMap;

use crate::dom::node::NodeId;

/// Callback fired when a node is clicked.
pub type ClickHandler = Box<dyn FnMut(NodeId)>;
/// Callback fired when a node's value changes. Receives the new value.
pub type ValueHandler = Box<dyn FnMut(NodeId, f32)>;
/// Callback fired when a node gains or loses focus.
pub type FocusHandler = Box<dyn FnMut(NodeId)>;

/// Registry of per-node event callbacks.
#[derive(Default)]
pub struct BindingRegistry {
    click: HashMap<NodeId, ClickHandler>,
    value_changed: HashMap<NodeId, ValueHandler>,
    focus: HashMap<NodeId, FocusHandler>,
    blur: HashMap<NodeId, FocusHandler>,
}

impl std::fmt::Debug for BindingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingRegistry")
            .field("click", &self.click.len())
            .field("value_changed", &self.value_changed.len())
            .field("focus", &self.focus.len())
            .field("blur", &self.blur.len())
            .finish()
    }
}

impl BindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click callback. Replaces any existing one for the node.
    pub fn on_click(&mut self, id: NodeId, handler: impl FnMut(NodeId) + 'static) {
        self.click.insert(id, Box::new(handler));
    }

    /// Register a value-changed callback. Replaces any existing one.
    pub fn on_value_changed(&mut self, id: NodeId, handler: impl FnMut(NodeId, f32) + 'static) {
        self.value_changed.insert(id, Box::new(handler));
    }

    /// Register a focus-gained callback. Replaces any existing one.
    pub fn on_focus(&mut self, id: NodeId, handler: impl FnMut(NodeId) + 'static) {
        self.focus.insert(id, Box::new(handler));
    }

    /// Register a focus-lost callback. Replaces any existing one.
    pub fn on_blur(&mut self, id: NodeId, handler: impl FnMut(NodeId) + 'static) {
        self.blur.insert(id, Box::new(handler));
    }

    /// Fire the click callback for `id`. Returns `true` if one was bound.
    pub fn emit_click(&mut self, id: NodeId) -> bool {
        if let Some(handler) = self.click.get_mut(&id) {
            handler(id);
            true
        } else {
            false
        }
    }

    /// Fire the value-changed callback for `id` with the new value.
    pub fn emit_value_changed(&mut self, id: NodeId, value: f32) -> bool {
        if let Some(handler) = self.value_changed.get_mut(&id) {
            handler(id, value);
            true
        } else {
            false
        }
    }

    /// Fire the focus-gained callback for `id`.
    pub fn emit_focus(&mut self, id: NodeId) -> bool {
        if let Some(handler) = self.focus.get_mut(&id) {
            handler(id);
            true
        } else {
            false
        }
    }

    /// Fire the focus-lost callback for `id`.
    pub fn emit_blur(&mut self, id: NodeId) -> bool {
        if let Some(handler) = self.blur.get_mut(&id) {
            handler(id);
            true
        } else {
            false
        }
    }

    /// Drop every callback bound to `id`. Called on node removal.
    pub fn purge(&mut self, id: NodeId) {
        self.click.remove(&id);
        self.value_changed.remove(&id);
        self.focus.remove(&id);
        self.blur.remove(&id);
    }

    /// Total number of bound callbacks across all event kinds.
    pub fn len(&self) -> usize {
        self.click.len() + self.value_changed.len() + self.focus.len() + self.blur.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
