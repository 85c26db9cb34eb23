//! # ember-ui
//!
//! A CSS-styled, retained-mode UI core for real-time games.
//!
//! ember-ui keeps a slotmap-backed node tree alive across frames, resolves a
//! CSS-like cascade with design tokens over it, animates style properties on
//! a caller-supplied clock, and lays nodes out with block, flex, and grid
//! containers in a virtual-resolution coordinate space. Rendering and raw
//! input stay outside the crate: the game reads resolved rectangles and
//! computed styles each frame and feeds pointer and focus events back in.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed node tree: kinds, classes, runtime state
//! - **[`css`]** — Style engine: tokenizer, parser, specificity, cascade, tokens
//! - **[`anim`]** — Property transitions with easing on a monotonic clock
//! - **[`layout`]** — Measure/arrange passes: block, flex, grid, absolute
//! - **[`focus`]** — Focus chain with cyclic and directional navigation
//! - **[`binding`]** — Per-node click/value/focus callbacks
//! - **[`ui`]** — [`UiTree`](ui::UiTree), the per-frame orchestrator
//! - **[`geometry`]** — Vec2, Rect, Insets primitives
//!
//! ## Quick start
//!
//! ```
//! use ember_ui::dom::{NodeData, NodeKind};
//! use ember_ui::geometry::Vec2;
//! use ember_ui::ui::UiTree;
//!
//! let mut ui = UiTree::new(Vec2::new(1280.0, 720.0));
//! let root = ui.tree_mut().insert(NodeData::new(NodeKind::Panel).with_id("hud"));
//! ui.tree_mut()
//!     .insert_child(root, NodeData::new(NodeKind::Button).with_text("Start"));
//! ui.add_stylesheet("#hud { display: flex; } Button { height: 48px; }")
//!     .expect("stylesheet parses");
//!
//! ui.frame(0.0);
//! let rect = ui.tree().get(root).map(|n| n.rect);
//! assert!(rect.is_some());
//! ```

// Foundation
pub mod geometry;

// Core systems
pub mod css;
pub mod dom;
pub mod layout;

// Animation
pub mod anim;

// Input routing
pub mod binding;
pub mod focus;

// Orchestration
pub mod ui;
