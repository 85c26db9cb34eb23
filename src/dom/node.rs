//! Node data: kind, classes, runtime state, per-node style and geometry.

use bitflags::bitflags;
use slotmap::new_key_type;

use crate::css::computed::ComputedStyle;
use crate::css::styles::Styles;
use crate::geometry::{Rect, Vec2};
use crate::layout::props::LayoutProps;

new_key_type! {
    /// Stable arena key for a node in the tree.
    pub struct NodeId;
}

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    #[default]
    Panel,
    Text,
    Button,
    Image,
    Shape,
    Slider,
    Toggle,
    ScrollView,
    TextInput,
    ProgressBar,
    Spacer,
    Container,
}

impl NodeKind {
    /// Parse a kind name. Unknown names fall back to `Panel` so malformed
    /// documents still produce a renderable tree.
    pub fn parse(name: &str) -> Self {
        match name {
            "panel" | "Panel" => Self::Panel,
            "text" | "Text" | "label" | "Label" => Self::Text,
            "button" | "Button" => Self::Button,
            "image" | "Image" => Self::Image,
            "shape" | "Shape" => Self::Shape,
            "slider" | "Slider" => Self::Slider,
            "toggle" | "Toggle" => Self::Toggle,
            "scroll-view" | "ScrollView" => Self::ScrollView,
            "text-input" | "TextInput" => Self::TextInput,
            "progress-bar" | "ProgressBar" => Self::ProgressBar,
            "spacer" | "Spacer" => Self::Spacer,
            "container" | "Container" => Self::Container,
            _ => Self::Panel,
        }
    }

    /// The name used for type selectors in stylesheets.
    pub fn name(self) -> &'static str {
        match self {
            Self::Panel => "Panel",
            Self::Text => "Text",
            Self::Button => "Button",
            Self::Image => "Image",
            Self::Shape => "Shape",
            Self::Slider => "Slider",
            Self::Toggle => "Toggle",
            Self::ScrollView => "ScrollView",
            Self::TextInput => "TextInput",
            Self::ProgressBar => "ProgressBar",
            Self::Spacer => "Spacer",
            Self::Container => "Container",
        }
    }

    /// Text-like nodes prefer their intrinsic content size over cross-axis
    /// stretch and never shrink below their estimated text size.
    pub fn is_text_like(self) -> bool {
        matches!(self, Self::Text | Self::Button | Self::TextInput)
    }

    /// Kinds that can receive focus and participate in directional navigation.
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            Self::Button | Self::Slider | Self::Toggle | Self::TextInput | Self::ScrollView
        )
    }
}

bitflags! {
    /// Runtime interaction state, matched by pseudo-class selectors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeState: u8 {
        const HOVERED  = 1 << 0;
        const PRESSED  = 1 << 1;
        const FOCUSED  = 1 << 2;
        const DISABLED = 1 << 3;
        const SELECTED = 1 << 4;
        const CHECKED  = 1 << 5;
    }
}

impl NodeState {
    /// Map a pseudo-class name to its state flag.
    pub fn from_pseudo_class(name: &str) -> Option<Self> {
        match name {
            "hover" => Some(Self::HOVERED),
            "pressed" => Some(Self::PRESSED),
            "focus" => Some(Self::FOCUSED),
            "disabled" => Some(Self::DISABLED),
            "selected" => Some(Self::SELECTED),
            "checked" => Some(Self::CHECKED),
            _ => None,
        }
    }
}

/// All data carried by a single node.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Optional stable string identifier, used for lookup and bindings.
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub state: NodeState,

    /// Widget value in `[0, 1]` (slider position, progress, toggle blend).
    pub value: f32,
    pub text: String,
    pub scroll: Vec2,

    /// Inline style overrides. Applied after every stylesheet rule.
    pub inline: Styles,

    /// Dense layout properties resolved by the cascade.
    pub layout: LayoutProps,
    /// Dense visual style resolved by the cascade (plus animation).
    pub computed: ComputedStyle,

    /// Intrinsic size from the measure pass.
    pub measured: Vec2,
    /// Final outer rectangle from the arrange pass.
    pub rect: Rect,
    /// Outer rect inset by resolved padding.
    pub content_rect: Rect,

    /// Recompute gates. Pure optimization: results must be identical when
    /// recomputing unconditionally.
    pub layout_dirty: bool,
    pub style_dirty: bool,
}

impl NodeData {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: 0.0,
            layout_dirty: true,
            style_dirty: true,
            ..Default::default()
        }
    }

    /// Builder: set the string id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: add a single class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Builder: add multiple classes.
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            self = self.with_class(class);
        }
        self
    }

    /// Builder: set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: set inline style overrides.
    pub fn with_inline(mut self, inline: Styles) -> Self {
        self.inline = inline;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class at runtime (no-op if already present).
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
            self.style_dirty = true;
        }
    }

    /// Remove a class at runtime.
    pub fn remove_class(&mut self, class: &str) {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        if self.classes.len() != before {
            self.style_dirty = true;
        }
    }

    /// Toggle a class at runtime.
    pub fn toggle_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    /// Set or clear a state flag, marking style dirty on change.
    pub fn set_state(&mut self, flag: NodeState, on: bool) {
        let next = if on { self.state | flag } else { self.state - flag };
        if next != self.state {
            self.state = next;
            self.style_dirty = true;
        }
    }

    /// Whether this node participates in layout and hit testing at all.
    pub fn is_visible(&self) -> bool {
        self.layout.display != crate::css::styles::Display::None
    }
}
