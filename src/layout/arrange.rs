//! Arrange pass: top-down final placement.
//!
//! Given a node's final rectangle, resolves its content box and places each
//! flow child according to the container's display mode (block stacking,
//! flex distribution, or grid tracks), then docks absolutely positioned
//! children against the content box. Every final rectangle is floored at 1px
//! on both axes.

use crate::css::scalar::Dimension;
use crate::css::styles::{AlignItems, Display, JustifyContent, Position};
use crate::dom::node::NodeId;
use crate::dom::tree::Tree;
use crate::geometry::{Insets, Rect, Vec2};
use crate::layout::grid::{GridPlacement, GridTemplate, Occupancy};
use crate::layout::measure::resolve_dim;

/// Floor a rect so neither axis collapses below 1px.
fn floor_rect(rect: Rect) -> Rect {
    Rect::new(rect.x, rect.y, rect.width.max(1.0), rect.height.max(1.0))
}

/// Snapshot of the child fields the arrange math needs, taken up front so the
/// tree can be mutated while placing.
#[derive(Debug, Clone)]
struct ChildInfo {
    id: NodeId,
    measured: Vec2,
    text_like: bool,
    width: Dimension,
    height: Dimension,
    margin: Insets,
    flex_grow: f32,
    flex_shrink: f32,
    flex_basis: Dimension,
    grid_area: Option<String>,
    grid_column_start: u32,
    grid_row_start: u32,
    grid_column_span: u32,
    grid_row_span: u32,
}

/// Arrange the subtree rooted at `node` into `rect`.
pub fn arrange(tree: &mut Tree, node: NodeId, rect: Rect, viewport: Vec2) {
    let Some(data) = tree.get(node) else {
        return;
    };

    if data.layout.display == Display::None {
        // Zero footprint: excluded from hit testing and drawing.
        if let Some(data) = tree.get_mut(node) {
            data.rect = Rect::ZERO;
            data.content_rect = Rect::ZERO;
        }
        return;
    }

    let rect = floor_rect(rect);
    let padding = data.layout.padding.resolve(rect.size(), viewport);
    let content = rect.inset(padding);
    let display = data.layout.display;

    if let Some(data) = tree.get_mut(node) {
        data.rect = rect;
        data.content_rect = content;
        data.layout_dirty = false;
    }

    let children: Vec<NodeId> = tree.children(node).to_vec();
    let mut flow = Vec::new();
    let mut floating = Vec::new();

    for child in children {
        let Some(child_data) = tree.get(child) else {
            continue;
        };
        if !child_data.is_visible() {
            // Still recurse so hidden subtrees get zeroed rects.
            arrange(tree, child, Rect::ZERO, viewport);
            continue;
        }
        if child_data.layout.position == Position::Absolute {
            floating.push(child);
        } else {
            flow.push(ChildInfo {
                id: child,
                measured: child_data.measured,
                text_like: child_data.kind.is_text_like(),
                width: child_data.layout.width,
                height: child_data.layout.height,
                margin: child_data.layout.margin.resolve(content.size(), viewport),
                flex_grow: child_data.layout.flex_grow,
                flex_shrink: child_data.layout.flex_shrink,
                flex_basis: child_data.layout.flex_basis,
                grid_area: child_data.layout.grid_area.clone(),
                grid_column_start: child_data.layout.grid_column_start,
                grid_row_start: child_data.layout.grid_row_start,
                grid_column_span: child_data.layout.grid_column_span,
                grid_row_span: child_data.layout.grid_row_span,
            });
        }
    }

    match display {
        Display::Flex => arrange_flex(tree, node, &flow, content, viewport),
        Display::Grid => arrange_grid(tree, node, &flow, content, viewport),
        _ => arrange_block(tree, node, &flow, content, viewport),
    }

    for child in floating {
        arrange_absolute(tree, child, content, viewport);
    }
}

/// Block: stack flow children vertically from the content origin.
fn arrange_block(
    tree: &mut Tree,
    container: NodeId,
    flow: &[ChildInfo],
    content: Rect,
    viewport: Vec2,
) {
    let gap = tree.get(container).map(|d| d.layout.gap).unwrap_or(0.0);

    let mut cursor_y = content.y;
    for child in flow {
        let margin = child.margin;
        let height = resolve_dim(child.height, content.height, viewport)
            .unwrap_or(child.measured.y)
            .max(1.0);
        let width = resolve_dim(child.width, content.width, viewport)
            .unwrap_or(if child.text_like {
                child.measured.x
            } else {
                content.width - margin.horizontal()
            })
            .max(1.0);

        arrange(
            tree,
            child.id,
            Rect::new(content.x + margin.left, cursor_y + margin.top, width, height),
            viewport,
        );
        cursor_y += margin.vertical() + height + gap;
    }
}

/// Flex: resolve each child's main-axis basis, distribute free space by grow
/// (or deficit by shrink x basis), then place along the main axis honoring
/// justification and direction reversal, with cross-axis alignment.
fn arrange_flex(
    tree: &mut Tree,
    container: NodeId,
    flow: &[ChildInfo],
    content: Rect,
    viewport: Vec2,
) {
    if flow.is_empty() {
        return;
    }

    let Some(data) = tree.get(container) else {
        return;
    };
    let direction = data.layout.flex_direction;
    let justify = data.layout.justify_content;
    let align = data.layout.align_items;
    let gap = data.layout.gap;

    let is_row = direction.is_row();
    let main_size = if is_row { content.width } else { content.height };
    let cross_size = if is_row { content.height } else { content.width };

    let n = flow.len();
    let gaps_total = gap * (n - 1) as f32;

    // Basis resolution: explicit basis, else the main-axis size value, else
    // the measured size.
    let main_dim = |c: &ChildInfo| if is_row { c.width } else { c.height };
    let main_measured = |c: &ChildInfo| if is_row { c.measured.x } else { c.measured.y };
    let main_margin = |c: &ChildInfo| {
        if is_row {
            c.margin.horizontal()
        } else {
            c.margin.vertical()
        }
    };

    let basis: Vec<f32> = flow
        .iter()
        .map(|c| {
            resolve_dim(c.flex_basis, main_size, viewport)
                .or_else(|| resolve_dim(main_dim(c), main_size, viewport))
                .unwrap_or_else(|| main_measured(c))
                .max(0.0)
        })
        .collect();

    let total_basis: f32 = basis.iter().sum();
    let total_margin: f32 = flow.iter().map(main_margin).sum();
    let free = main_size - total_basis - total_margin - gaps_total;

    let mut final_main = basis.clone();
    if free > 0.0 {
        let total_grow: f32 = flow.iter().map(|c| c.flex_grow).sum();
        if total_grow > 0.0 {
            for (i, c) in flow.iter().enumerate() {
                final_main[i] += free * c.flex_grow / total_grow;
            }
        }
    } else if free < 0.0 {
        let weights: Vec<f32> = flow
            .iter()
            .zip(&basis)
            .map(|(c, &b)| c.flex_shrink * b)
            .collect();
        let total_weight: f32 = weights.iter().sum();
        if total_weight > 0.0 {
            let deficit = -free;
            for (i, w) in weights.iter().enumerate() {
                final_main[i] = (basis[i] - deficit * w / total_weight).max(0.0);
            }
        }
    }

    // Text-like children never drop below their estimated size.
    for (i, c) in flow.iter().enumerate() {
        if c.text_like {
            final_main[i] = final_main[i].max(main_measured(c));
        }
    }

    let used: f32 = final_main.iter().sum::<f32>() + total_margin + gaps_total;
    let leftover = (main_size - used).max(0.0);

    let (lead, spacing) = match justify {
        JustifyContent::Start => (0.0, gap),
        JustifyContent::End => (leftover, gap),
        JustifyContent::Center => (leftover / 2.0, gap),
        JustifyContent::SpaceBetween => {
            if n > 1 {
                (0.0, gap + leftover / (n - 1) as f32)
            } else {
                (0.0, gap)
            }
        }
        JustifyContent::SpaceAround => {
            let share = leftover / n as f32;
            (share / 2.0, gap + share)
        }
        JustifyContent::SpaceEvenly => {
            let share = leftover / (n + 1) as f32;
            (share, gap + share)
        }
    };

    let main_start = if is_row { content.x } else { content.y };
    let cross_start = if is_row { content.y } else { content.x };

    let mut cursor = lead;
    for (i, c) in flow.iter().enumerate() {
        let main = final_main[i].max(1.0);
        let outer = main + main_margin(c);
        let main_lead = if is_row { c.margin.left } else { c.margin.top };

        let cross_dim = if is_row { c.height } else { c.width };
        let cross_measured = if is_row { c.measured.y } else { c.measured.x };
        let cross_margin = if is_row {
            c.margin.vertical()
        } else {
            c.margin.horizontal()
        };
        let cross_avail = (cross_size - cross_margin).max(0.0);
        let cross = resolve_dim(cross_dim, cross_size, viewport)
            .unwrap_or(if align == AlignItems::Stretch && !c.text_like {
                cross_avail
            } else {
                cross_measured
            })
            .max(1.0);

        let cross_lead = if is_row { c.margin.top } else { c.margin.left };
        let cross_pos = cross_start
            + cross_lead
            + match align {
                AlignItems::Start | AlignItems::Stretch => 0.0,
                AlignItems::End => cross_avail - cross,
                AlignItems::Center => (cross_avail - cross) / 2.0,
            };

        // Reversed directions walk backward from the far edge.
        let main_pos = if direction.is_reverse() {
            main_start + main_size - cursor - outer + main_lead
        } else {
            main_start + cursor + main_lead
        };

        let child_rect = if is_row {
            Rect::new(main_pos, cross_pos, main, cross)
        } else {
            Rect::new(cross_pos, main_pos, cross, main)
        };
        arrange(tree, c.id, child_rect, viewport);

        cursor += outer + spacing;
    }
}

/// Grid: resolve tracks, place each child (named area, explicit cell, or
/// row-major auto-placement), and align items inside their slots.
fn arrange_grid(
    tree: &mut Tree,
    container: NodeId,
    flow: &[ChildInfo],
    content: Rect,
    viewport: Vec2,
) {
    if flow.is_empty() {
        return;
    }

    let Some(data) = tree.get(container) else {
        return;
    };
    let explicit_cols = data.layout.grid_columns as usize;
    let explicit_rows = data.layout.grid_rows as usize;
    let justify_items = data.layout.grid_justify_items;
    let align_items = data.layout.grid_align_items;
    let col_gap = data.layout.column_gap;
    let row_gap = data.layout.row_gap;

    let template = data
        .layout
        .grid_template_areas
        .as_deref()
        .map(GridTemplate::parse)
        .filter(|t| !t.is_empty());

    let cols = if explicit_cols > 0 {
        explicit_cols
    } else if let Some(t) = &template {
        t.cols
    } else {
        flow.len()
    }
    .max(1);

    let mut occupancy = Occupancy::new(cols);
    // Bounded row scan for auto-placement before falling back to a fresh row.
    let scan_rows = flow.len() + explicit_rows;

    let placements: Vec<GridPlacement> = flow
        .iter()
        .map(|c| {
            // (a) named template area
            if let (Some(area), Some(t)) = (c.grid_area.as_deref(), &template) {
                if let Some(slot) = t.area(area) {
                    if occupancy.try_place(slot) {
                        return slot;
                    }
                }
            }
            // (b) explicit 1-based cell
            if c.grid_column_start > 0 || c.grid_row_start > 0 {
                let slot = GridPlacement {
                    col: (c.grid_column_start as usize).saturating_sub(1),
                    row: (c.grid_row_start as usize).saturating_sub(1),
                    col_span: (c.grid_column_span as usize).max(1),
                    row_span: (c.grid_row_span as usize).max(1),
                };
                if occupancy.try_place(slot) {
                    return slot;
                }
            }
            // (c) first unoccupied cell, row-major
            occupancy.auto_place(
                (c.grid_column_span as usize).max(1),
                (c.grid_row_span as usize).max(1),
                scan_rows,
            )
        })
        .collect();

    let rows = explicit_rows
        .max(template.as_ref().map(|t| t.rows).unwrap_or(0))
        .max(occupancy.rows())
        .max(1);

    // Even division of the content box minus gaps.
    let cell_w = ((content.width - col_gap * (cols - 1) as f32) / cols as f32).max(1.0);
    let cell_h = ((content.height - row_gap * (rows - 1) as f32) / rows as f32).max(1.0);

    for (c, slot) in flow.iter().zip(&placements) {
        // The item's margin shrinks the slot it aligns inside.
        let slot_x = content.x + slot.col as f32 * (cell_w + col_gap) + c.margin.left;
        let slot_y = content.y + slot.row as f32 * (cell_h + row_gap) + c.margin.top;
        let slot_w = (cell_w * slot.col_span as f32 + col_gap * (slot.col_span - 1) as f32
            - c.margin.horizontal())
        .max(1.0);
        let slot_h = (cell_h * slot.row_span as f32 + row_gap * (slot.row_span - 1) as f32
            - c.margin.vertical())
        .max(1.0);

        let (x, w) = align_in_track(
            justify_items,
            slot_x,
            slot_w,
            resolve_dim(c.width, slot_w, viewport),
            c.measured.x,
            c.text_like,
        );
        let (y, h) = align_in_track(
            align_items,
            slot_y,
            slot_h,
            resolve_dim(c.height, slot_h, viewport),
            c.measured.y,
            c.text_like,
        );

        arrange(tree, c.id, Rect::new(x, y, w, h), viewport);
    }
}

/// Position and size an item along one axis of its grid slot.
fn align_in_track(
    align: AlignItems,
    slot_start: f32,
    slot_size: f32,
    explicit: Option<f32>,
    measured: f32,
    text_like: bool,
) -> (f32, f32) {
    let size = explicit
        .unwrap_or(if align == AlignItems::Stretch && !text_like {
            slot_size
        } else {
            measured
        })
        .max(1.0);

    let pos = slot_start
        + match align {
            AlignItems::Start | AlignItems::Stretch => 0.0,
            AlignItems::End => slot_size - size,
            AlignItems::Center => (slot_size - size) / 2.0,
        };

    (pos, size)
}

/// Absolute placement: anchor fraction of the parent's content box plus a
/// pixel offset, shifted back by a pivot fraction of the child's own size.
fn arrange_absolute(tree: &mut Tree, child: NodeId, content: Rect, viewport: Vec2) {
    let Some(data) = tree.get(child) else {
        return;
    };
    let props = &data.layout;

    let width = resolve_dim(props.width, content.width, viewport)
        .unwrap_or(data.measured.x)
        .max(1.0);
    let height = resolve_dim(props.height, content.height, viewport)
        .unwrap_or(data.measured.y)
        .max(1.0);

    let x = content.x + props.anchor.x * content.width + props.offset.x - props.pivot.x * width;
    let y = content.y + props.anchor.y * content.height + props.offset.y - props.pivot.y * height;

    arrange(tree, child, Rect::new(x, y, width, height), viewport);
}
