//! The animation registry: per (node, property) transitions.
//!
//! `tick` advances the shared clock and purges transitions that had already
//! completed on the previous tick, so a finished transition is sampleable at
//! exactly its end value for one frame before eviction.

use std::collections::HashMap;

use crate::anim::easing::Easing;
use crate::anim::value::StyleValue;
use crate::css::scalar::Dimension;
use crate::dom::node::NodeId;
use crate::dom::tree::Tree;

/// The animatable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimProperty {
    Opacity,
    BackgroundColor,
    TextColor,
    StrokeColor,
    CornerRadius,
    /// Absolute-placement pixel offset.
    Offset,
    /// Width/height as a pixel pair.
    Size,
}

/// One running transition.
#[derive(Debug, Clone)]
struct Transition {
    start_time: f32,
    duration: f32,
    easing: Easing,
    start: StyleValue,
    end: StyleValue,
}

impl Transition {
    fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    fn sample(&self, now: f32) -> StyleValue {
        let t = self.progress(now);
        if t >= 1.0 {
            // Exact end value, independent of easing float noise.
            return self.end;
        }
        self.start.lerp(self.end, self.easing.sample(t))
    }

    fn is_complete(&self, now: f32) -> bool {
        now - self.start_time >= self.duration
    }
}

/// Registry of running transitions, keyed by (node, property).
///
/// Times are seconds on a caller-supplied monotonic clock.
#[derive(Debug, Default)]
pub struct Animator {
    transitions: HashMap<(NodeId, AnimProperty), Transition>,
    now: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a transition toward `to`.
    ///
    /// `from` is the property's current live value; if a transition is already
    /// running on this key its current sample replaces `from`, so retargeting
    /// mid-flight continues from the on-screen value rather than jumping back
    /// to the static base.
    pub fn start(
        &mut self,
        node: NodeId,
        property: AnimProperty,
        from: StyleValue,
        to: StyleValue,
        duration: f32,
        easing: Easing,
    ) {
        let key = (node, property);
        let start = match self.transitions.get(&key) {
            Some(running) => running.sample(self.now),
            None => from,
        };

        self.transitions.insert(
            key,
            Transition {
                start_time: self.now,
                duration: duration.max(0.0),
                easing,
                start,
                end: to,
            },
        );
    }

    /// Advance the clock to `now`, first evicting transitions that had
    /// already completed as of the previous tick.
    pub fn tick(&mut self, now: f32) {
        let prev = self.now;
        self.transitions.retain(|_, t| !t.is_complete(prev));
        self.now = now;
    }

    /// Sample the current value for a (node, property), if a transition
    /// exists for it.
    pub fn sample(&self, node: NodeId, property: AnimProperty) -> Option<StyleValue> {
        self.transitions.get(&(node, property)).map(|t| t.sample(self.now))
    }

    /// Whether a transition exists for the given key.
    pub fn is_animating(&self, node: NodeId, property: AnimProperty) -> bool {
        self.transitions.contains_key(&(node, property))
    }

    /// Remove the transition for one (node, property) pair.
    pub fn cancel_property(&mut self, node: NodeId, property: AnimProperty) {
        self.transitions.remove(&(node, property));
    }

    /// Remove every transition targeting `node`. Called when a node is
    /// destroyed.
    pub fn cancel_node(&mut self, node: NodeId) {
        self.transitions.retain(|(id, _), _| *id != node);
    }

    /// Number of running transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Write every current sample onto its node's computed style or layout
    /// props. Runs after the cascade so animated values override cascaded
    /// ones for the rest of the frame.
    pub fn apply(&self, tree: &mut Tree) {
        for (&(node, property), transition) in &self.transitions {
            let Some(data) = tree.get_mut(node) else {
                continue;
            };
            let value = transition.sample(self.now);
            match (property, value) {
                (AnimProperty::Opacity, StyleValue::Float(v)) => {
                    data.computed.opacity = v.clamp(0.0, 1.0);
                }
                (AnimProperty::BackgroundColor, StyleValue::Color(c)) => {
                    data.computed.background_color = c;
                }
                (AnimProperty::TextColor, StyleValue::Color(c)) => {
                    data.computed.text_color = c;
                }
                (AnimProperty::StrokeColor, StyleValue::Color(c)) => {
                    data.computed.stroke_color = c;
                }
                (AnimProperty::CornerRadius, StyleValue::Float(v)) => {
                    data.computed.corner_radius = v.max(0.0);
                }
                (AnimProperty::Offset, StyleValue::Vec2(v)) => {
                    data.layout.offset = v;
                }
                (AnimProperty::Size, StyleValue::Vec2(v)) => {
                    data.layout.width = Dimension::Px(v.x.max(1.0));
                    data.layout.height = Dimension::Px(v.y.max(1.0));
                }
                // Wrong-typed value for the target property: skip.
                _ => {}
            }
        }
    }
}
