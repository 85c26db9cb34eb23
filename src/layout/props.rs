//! Dense layout properties resolved from the cascade.

use crate::css::scalar::{DimBox, Dimension};
use crate::css::styles::{
    AlignItems, Display, FlexDirection, JustifyContent, Overflow, Position, Styles,
};
use crate::geometry::Vec2;

/// Every layout-relevant property, with defaults filled in. Rebuilt from the
/// baseline each frame by folding the cascaded sparse [`Styles`] through
/// [`LayoutProps::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProps {
    pub display: Display,
    pub position: Position,
    pub overflow: Overflow,

    // Flex container
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    /// Inter-child gap along the main axis (flex/block).
    pub gap: f32,
    /// Grid row gap; tracks `gap` unless set explicitly.
    pub row_gap: f32,
    /// Grid column gap; tracks `gap` unless set explicitly.
    pub column_gap: f32,

    // Grid container (0 = auto)
    pub grid_columns: u32,
    pub grid_rows: u32,
    pub grid_template_areas: Option<String>,
    pub grid_justify_items: AlignItems,
    pub grid_align_items: AlignItems,

    // Grid item placement (starts 1-based, 0 = auto)
    pub grid_area: Option<String>,
    pub grid_column_start: u32,
    pub grid_row_start: u32,
    pub grid_column_span: u32,
    pub grid_row_span: u32,

    // Sizing
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
    pub aspect_ratio: Option<f32>,

    // Box model
    pub padding: DimBox,
    pub margin: DimBox,

    // Flex item
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,

    // Absolute placement: parent-size fraction, pixel offset, self-size
    // fraction.
    pub anchor: Vec2,
    pub offset: Vec2,
    pub pivot: Vec2,
}

impl Default for LayoutProps {
    fn default() -> Self {
        Self {
            display: Display::Block,
            position: Position::Relative,
            overflow: Overflow::Visible,

            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::Start,
            align_items: AlignItems::Stretch,
            gap: 0.0,
            row_gap: 0.0,
            column_gap: 0.0,

            grid_columns: 0,
            grid_rows: 0,
            grid_template_areas: None,
            grid_justify_items: AlignItems::Stretch,
            grid_align_items: AlignItems::Stretch,

            grid_area: None,
            grid_column_start: 0,
            grid_row_start: 0,
            grid_column_span: 1,
            grid_row_span: 1,

            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            min_height: Dimension::Auto,
            max_width: Dimension::Auto,
            max_height: Dimension::Auto,
            aspect_ratio: None,

            padding: DimBox::default(),
            margin: DimBox::default(),

            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Auto,

            anchor: Vec2::ZERO,
            offset: Vec2::ZERO,
            pivot: Vec2::ZERO,
        }
    }
}

impl LayoutProps {
    /// Overwrite fields that `styles` explicitly sets.
    ///
    /// The `gap` shorthand also drives `row_gap`/`column_gap`, with the
    /// specific properties winning when set alongside it.
    pub fn apply(&mut self, styles: &Styles) {
        if let Some(v) = styles.display {
            self.display = v;
        }
        if let Some(v) = styles.position {
            self.position = v;
        }
        if let Some(v) = styles.overflow {
            self.overflow = v;
        }

        if let Some(v) = styles.flex_direction {
            self.flex_direction = v;
        }
        if let Some(v) = styles.justify_content {
            self.justify_content = v;
        }
        if let Some(v) = styles.align_items {
            self.align_items = v;
        }
        if let Some(v) = styles.gap {
            self.gap = v;
            self.row_gap = v;
            self.column_gap = v;
        }
        if let Some(v) = styles.row_gap {
            self.row_gap = v;
        }
        if let Some(v) = styles.column_gap {
            self.column_gap = v;
        }

        if let Some(v) = styles.grid_columns {
            self.grid_columns = v;
        }
        if let Some(v) = styles.grid_rows {
            self.grid_rows = v;
        }
        if let Some(v) = &styles.grid_template_areas {
            self.grid_template_areas = Some(v.clone());
        }
        if let Some(v) = styles.grid_justify_items {
            self.grid_justify_items = v;
        }
        if let Some(v) = styles.grid_align_items {
            self.grid_align_items = v;
        }

        if let Some(v) = &styles.grid_area {
            self.grid_area = Some(v.clone());
        }
        if let Some(v) = styles.grid_column_start {
            self.grid_column_start = v;
        }
        if let Some(v) = styles.grid_row_start {
            self.grid_row_start = v;
        }
        if let Some(v) = styles.grid_column_span {
            self.grid_column_span = v.max(1);
        }
        if let Some(v) = styles.grid_row_span {
            self.grid_row_span = v.max(1);
        }

        if let Some(v) = styles.width {
            self.width = v;
        }
        if let Some(v) = styles.height {
            self.height = v;
        }
        if let Some(v) = styles.min_width {
            self.min_width = v;
        }
        if let Some(v) = styles.min_height {
            self.min_height = v;
        }
        if let Some(v) = styles.max_width {
            self.max_width = v;
        }
        if let Some(v) = styles.max_height {
            self.max_height = v;
        }
        if let Some(v) = styles.aspect_ratio {
            self.aspect_ratio = Some(v);
        }

        if let Some(v) = styles.padding {
            self.padding = v;
        }
        if let Some(v) = styles.margin {
            self.margin = v;
        }

        if let Some(v) = styles.flex_grow {
            self.flex_grow = v.max(0.0);
        }
        if let Some(v) = styles.flex_shrink {
            self.flex_shrink = v.max(0.0);
        }
        if let Some(v) = styles.flex_basis {
            self.flex_basis = v;
        }

        if let Some(v) = styles.anchor {
            self.anchor = v;
        }
        if let Some(v) = styles.offset {
            self.offset = v;
        }
        if let Some(v) = styles.pivot {
            self.pivot = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let props = LayoutProps::default();
        assert_eq!(props.display, Display::Block);
        assert_eq!(props.width, Dimension::Auto);
        assert_eq!(props.flex_grow, 0.0);
        assert_eq!(props.flex_shrink, 1.0);
        assert_eq!(props.grid_column_span, 1);
        assert_eq!(props.align_items, AlignItems::Stretch);
    }

    #[test]
    fn apply_overwrites_only_set_fields() {
        let mut props = LayoutProps::default();
        props.apply(&Styles {
            display: Some(Display::Flex),
            flex_grow: Some(2.0),
            ..Default::default()
        });

        assert_eq!(props.display, Display::Flex);
        assert_eq!(props.flex_grow, 2.0);
        assert_eq!(props.flex_shrink, 1.0);
    }

    #[test]
    fn gap_shorthand_drives_both_axes() {
        let mut props = LayoutProps::default();
        props.apply(&Styles { gap: Some(8.0), ..Default::default() });
        assert_eq!(props.gap, 8.0);
        assert_eq!(props.row_gap, 8.0);
        assert_eq!(props.column_gap, 8.0);

        props.apply(&Styles { gap: Some(4.0), row_gap: Some(12.0), ..Default::default() });
        assert_eq!(props.row_gap, 12.0);
        assert_eq!(props.column_gap, 4.0);
    }

    #[test]
    fn spans_floor_at_one() {
        let mut props = LayoutProps::default();
        props.apply(&Styles { grid_column_span: Some(0), ..Default::default() });
        assert_eq!(props.grid_column_span, 1);
    }
}
