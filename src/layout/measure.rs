//! Measure pass: bottom-up intrinsic sizing.
//!
//! Each node's `measured` is its natural size before container constraints:
//! text estimate for text-like nodes, zero for spacers, and the union of flow
//! children for containers. Fixed px/viewport sizes win outright; percent
//! values cannot resolve bottom-up and fall back to content size.

use crate::css::scalar::Dimension;
use crate::css::styles::Display;
use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Tree;
use crate::geometry::Vec2;

/// Estimated glyph advance as a fraction of font size. A heuristic, not a
/// font metric: the renderer owns real shaping.
const CHAR_WIDTH_FACTOR: f32 = 0.6;
/// Line height as a fraction of font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Estimate the pixel size of a text block from its longest line and line
/// count.
pub fn estimate_text_size(text: &str, font_size: f32) -> Vec2 {
    if text.is_empty() {
        return Vec2::new(0.0, font_size * LINE_HEIGHT_FACTOR);
    }
    let mut max_chars = 0usize;
    let mut lines = 0usize;
    for line in text.lines() {
        max_chars = max_chars.max(line.chars().count());
        lines += 1;
    }
    lines = lines.max(1);
    Vec2::new(
        max_chars as f32 * font_size * CHAR_WIDTH_FACTOR,
        lines as f32 * font_size * LINE_HEIGHT_FACTOR,
    )
}

/// Whether a child participates in flow sizing and placement.
pub(crate) fn is_flow_child(data: &NodeData) -> bool {
    data.is_visible() && data.layout.position == crate::css::styles::Position::Relative
}

/// Resolve a dimension against a basis, treating `Auto` and unresolvable
/// percent (zero basis) as `None`.
pub(crate) fn resolve_dim(dim: Dimension, basis: f32, viewport: Vec2) -> Option<f32> {
    match dim {
        Dimension::Percent(_) if basis <= 0.0 => None,
        other => other.resolve(basis, viewport),
    }
}

/// Measure the subtree rooted at `node`, writing each node's `measured`.
///
/// Children are measured before their parents (strict bottom-up).
pub fn measure(tree: &mut Tree, node: NodeId, viewport: Vec2) {
    let children: Vec<NodeId> = tree.children(node).to_vec();
    for child in &children {
        measure(tree, *child, viewport);
    }

    let Some(data) = tree.get(node) else {
        return;
    };

    if data.layout.display == Display::None {
        if let Some(data) = tree.get_mut(node) {
            data.measured = Vec2::ZERO;
        }
        return;
    }

    let content = intrinsic_content_size(tree, node, &children, viewport);

    let Some(data) = tree.get(node) else {
        return;
    };
    let props = &data.layout;

    // Padding with percent sides left unresolved during measure.
    let padding = props.padding.resolve(Vec2::ZERO, viewport);

    let mut size = Vec2::new(
        content.x + padding.horizontal(),
        content.y + padding.vertical(),
    );

    // Fixed sizes win over content.
    if let Some(w) = resolve_dim(props.width, 0.0, viewport) {
        size.x = w;
    }
    if let Some(h) = resolve_dim(props.height, 0.0, viewport) {
        size.y = h;
    }

    // One fixed axis plus an aspect ratio derives the other axis.
    if let Some(ratio) = props.aspect_ratio.filter(|r| *r > 0.0) {
        let w_fixed = resolve_dim(props.width, 0.0, viewport).is_some();
        let h_fixed = resolve_dim(props.height, 0.0, viewport).is_some();
        if w_fixed && !h_fixed {
            size.y = size.x / ratio;
        } else if h_fixed && !w_fixed {
            size.x = size.y * ratio;
        }
    }

    // Clamp against fixed min/max.
    if let Some(min_w) = resolve_dim(props.min_width, 0.0, viewport) {
        size.x = size.x.max(min_w);
    }
    if let Some(min_h) = resolve_dim(props.min_height, 0.0, viewport) {
        size.y = size.y.max(min_h);
    }
    if let Some(max_w) = resolve_dim(props.max_width, 0.0, viewport) {
        size.x = size.x.min(max_w);
    }
    if let Some(max_h) = resolve_dim(props.max_height, 0.0, viewport) {
        size.y = size.y.min(max_h);
    }

    if let Some(data) = tree.get_mut(node) {
        data.measured = size;
    }
}

/// Intrinsic content size by node kind and display mode, before padding and
/// fixed-size overrides.
fn intrinsic_content_size(
    tree: &Tree,
    node: NodeId,
    children: &[NodeId],
    viewport: Vec2,
) -> Vec2 {
    let Some(data) = tree.get(node) else {
        return Vec2::ZERO;
    };

    if data.kind == crate::dom::node::NodeKind::Spacer {
        return Vec2::ZERO;
    }

    if data.kind.is_text_like() {
        return estimate_text_size(&data.text, data.computed.font_size);
    }

    let flow: Vec<Vec2> = children
        .iter()
        .filter_map(|&child| tree.get(child))
        .filter(|child| is_flow_child(child))
        .map(|child| child_contribution(child, viewport))
        .collect();

    if flow.is_empty() {
        // Leaf containers contribute their own text, if any.
        if !data.text.is_empty() {
            return estimate_text_size(&data.text, data.computed.font_size);
        }
        return Vec2::ZERO;
    }

    let props = &data.layout;
    match props.display {
        Display::Flex => {
            let gaps = props.gap * (flow.len().saturating_sub(1)) as f32;
            if props.flex_direction.is_row() {
                let width: f32 = flow.iter().map(|s| s.x).sum::<f32>() + gaps;
                let height = flow.iter().map(|s| s.y).fold(0.0, f32::max);
                Vec2::new(width, height)
            } else {
                let width = flow.iter().map(|s| s.x).fold(0.0, f32::max);
                let height: f32 = flow.iter().map(|s| s.y).sum::<f32>() + gaps;
                Vec2::new(width, height)
            }
        }
        Display::Grid => {
            let cols = if props.grid_columns > 0 {
                props.grid_columns as usize
            } else {
                flow.len().max(1)
            };
            let rows = flow.len().div_ceil(cols).max(1);
            let cell_w = flow.iter().map(|s| s.x).fold(0.0, f32::max);
            let cell_h = flow.iter().map(|s| s.y).fold(0.0, f32::max);
            Vec2::new(
                cell_w * cols as f32 + props.column_gap * (cols.saturating_sub(1)) as f32,
                cell_h * rows as f32 + props.row_gap * (rows.saturating_sub(1)) as f32,
            )
        }
        // Block: vertical stack.
        _ => {
            let gaps = props.gap * (flow.len().saturating_sub(1)) as f32;
            let width = flow.iter().map(|s| s.x).fold(0.0, f32::max);
            let height: f32 = flow.iter().map(|s| s.y).sum::<f32>() + gaps;
            Vec2::new(width, height)
        }
    }
}

/// A flow child's contribution to its container's intrinsic size: its own
/// measured size, overridden by fixed px/viewport dimensions, plus margin.
/// Percent margin cannot resolve bottom-up and contributes nothing here.
fn child_contribution(child: &NodeData, viewport: Vec2) -> Vec2 {
    let mut size = child.measured;
    if let Some(w) = resolve_dim(child.layout.width, 0.0, viewport) {
        size.x = w;
    }
    if let Some(h) = resolve_dim(child.layout.height, 0.0, viewport) {
        size.y = h;
    }
    let margin = child.layout.margin.resolve(Vec2::ZERO, viewport);
    size.x += margin.horizontal();
    size.y += margin.vertical();
    size
}
