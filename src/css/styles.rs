//! Styles struct with typed Option<T> fields for all style properties.
//!
//! This is the central sparse style representation used by the cascade and by
//! inline per-node overrides. Every property has a typed `Option<T>` field.
//! `None` means "not set" (the dense defaults in [`crate::layout::props`] and
//! [`crate::css::computed`] apply).

use crate::css::color::Color;
use crate::css::scalar::{DimBox, Dimension};
use crate::geometry::Vec2;

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    Flex,
    Grid,
    #[default]
    Block,
    /// Excluded from layout and hit testing entirely.
    None,
}

impl Display {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "flex" => Some(Self::Flex),
            "grid" => Some(Self::Grid),
            "block" => Some(Self::Block),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Position mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Relative,
    /// Out of flow, placed by anchor/offset/pivot against the parent.
    Absolute,
}

impl Position {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "relative" => Some(Self::Relative),
            "absolute" => Some(Self::Absolute),
            _ => None,
        }
    }
}

/// Flex main-axis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "row" => Some(Self::Row),
            "column" => Some(Self::Column),
            "row-reverse" => Some(Self::RowReverse),
            "column-reverse" => Some(Self::ColumnReverse),
            _ => None,
        }
    }

    /// Whether the main axis is horizontal.
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether children are laid out from the far edge backwards.
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Main-axis distribution of free space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" | "flex-start" => Some(Self::Start),
            "end" | "flex-end" => Some(Self::End),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "space-evenly" => Some(Self::SpaceEvenly),
            _ => None,
        }
    }
}

/// Cross-axis alignment of items (also used for grid item alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    Start,
    End,
    Center,
    #[default]
    Stretch,
}

impl AlignItems {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" | "flex-start" => Some(Self::Start),
            "end" | "flex-end" => Some(Self::End),
            "center" => Some(Self::Center),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }
}

/// Overflow behavior for content exceeding the content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

impl Overflow {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "visible" => Some(Self::Visible),
            "hidden" => Some(Self::Hidden),
            "scroll" => Some(Self::Scroll),
            _ => None,
        }
    }
}

/// A drop shadow: offset, blur radius, color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur: f32,
    pub color: Color,
}

/// All style properties for a node. Each field is `Option<T>`; `None` means
/// unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styles {
    // Display & positioning
    pub display: Option<Display>,
    pub position: Option<Position>,
    pub overflow: Option<Overflow>,

    // Flex container
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub gap: Option<f32>,
    pub row_gap: Option<f32>,
    pub column_gap: Option<f32>,

    // Grid container (0 columns/rows means auto)
    pub grid_columns: Option<u32>,
    pub grid_rows: Option<u32>,
    pub grid_template_areas: Option<String>,
    pub grid_justify_items: Option<AlignItems>,
    pub grid_align_items: Option<AlignItems>,

    // Grid item placement (starts are 1-based, 0 means auto)
    pub grid_area: Option<String>,
    pub grid_column_start: Option<u32>,
    pub grid_row_start: Option<u32>,
    pub grid_column_span: Option<u32>,
    pub grid_row_span: Option<u32>,

    // Sizing
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub aspect_ratio: Option<f32>,

    // Box model
    pub padding: Option<DimBox>,
    pub margin: Option<DimBox>,

    // Flex item
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<Dimension>,

    // Absolute placement
    pub anchor: Option<Vec2>,
    pub offset: Option<Vec2>,
    pub pivot: Option<Vec2>,

    // Visual
    pub background_color: Option<Color>,
    pub text_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: Option<f32>,
    pub opacity: Option<f32>,
    pub corner_radius: Option<f32>,
    pub shadow: Option<Shadow>,
    pub font: Option<String>,
    pub font_size: Option<f32>,
}

impl Styles {
    /// Create an empty (all-unset) style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` on top of `self`: `other`'s set fields win, unset fields
    /// fall through to `self`.
    pub fn merge(&self, other: &Styles) -> Styles {
        fn merge_opt<T: Clone>(base: &Option<T>, over: &Option<T>) -> Option<T> {
            over.clone().or_else(|| base.clone())
        }

        Styles {
            display: merge_opt(&self.display, &other.display),
            position: merge_opt(&self.position, &other.position),
            overflow: merge_opt(&self.overflow, &other.overflow),

            flex_direction: merge_opt(&self.flex_direction, &other.flex_direction),
            justify_content: merge_opt(&self.justify_content, &other.justify_content),
            align_items: merge_opt(&self.align_items, &other.align_items),
            gap: merge_opt(&self.gap, &other.gap),
            row_gap: merge_opt(&self.row_gap, &other.row_gap),
            column_gap: merge_opt(&self.column_gap, &other.column_gap),

            grid_columns: merge_opt(&self.grid_columns, &other.grid_columns),
            grid_rows: merge_opt(&self.grid_rows, &other.grid_rows),
            grid_template_areas: merge_opt(&self.grid_template_areas, &other.grid_template_areas),
            grid_justify_items: merge_opt(&self.grid_justify_items, &other.grid_justify_items),
            grid_align_items: merge_opt(&self.grid_align_items, &other.grid_align_items),

            grid_area: merge_opt(&self.grid_area, &other.grid_area),
            grid_column_start: merge_opt(&self.grid_column_start, &other.grid_column_start),
            grid_row_start: merge_opt(&self.grid_row_start, &other.grid_row_start),
            grid_column_span: merge_opt(&self.grid_column_span, &other.grid_column_span),
            grid_row_span: merge_opt(&self.grid_row_span, &other.grid_row_span),

            width: merge_opt(&self.width, &other.width),
            height: merge_opt(&self.height, &other.height),
            min_width: merge_opt(&self.min_width, &other.min_width),
            min_height: merge_opt(&self.min_height, &other.min_height),
            max_width: merge_opt(&self.max_width, &other.max_width),
            max_height: merge_opt(&self.max_height, &other.max_height),
            aspect_ratio: merge_opt(&self.aspect_ratio, &other.aspect_ratio),

            padding: merge_opt(&self.padding, &other.padding),
            margin: merge_opt(&self.margin, &other.margin),

            flex_grow: merge_opt(&self.flex_grow, &other.flex_grow),
            flex_shrink: merge_opt(&self.flex_shrink, &other.flex_shrink),
            flex_basis: merge_opt(&self.flex_basis, &other.flex_basis),

            anchor: merge_opt(&self.anchor, &other.anchor),
            offset: merge_opt(&self.offset, &other.offset),
            pivot: merge_opt(&self.pivot, &other.pivot),

            background_color: merge_opt(&self.background_color, &other.background_color),
            text_color: merge_opt(&self.text_color, &other.text_color),
            stroke_color: merge_opt(&self.stroke_color, &other.stroke_color),
            stroke_width: merge_opt(&self.stroke_width, &other.stroke_width),
            opacity: merge_opt(&self.opacity, &other.opacity),
            corner_radius: merge_opt(&self.corner_radius, &other.corner_radius),
            shadow: merge_opt(&self.shadow, &other.shadow),
            font: merge_opt(&self.font, &other.font),
            font_size: merge_opt(&self.font_size, &other.font_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_other_wins_on_set_fields() {
        let base = Styles {
            opacity: Some(0.5),
            background_color: Some(Color::BLACK),
            ..Default::default()
        };
        let over = Styles { opacity: Some(1.0), ..Default::default() };

        let merged = base.merge(&over);
        assert_eq!(merged.opacity, Some(1.0));
        // Unset in `over`, falls through to base.
        assert_eq!(merged.background_color, Some(Color::BLACK));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let base = Styles {
            width: Some(Dimension::Px(100.0)),
            flex_grow: Some(2.0),
            ..Default::default()
        };
        assert_eq!(base.merge(&Styles::new()), base);
        assert_eq!(Styles::new().merge(&base), base);
    }

    #[test]
    fn enum_parsing() {
        assert_eq!(Display::parse("flex"), Some(Display::Flex));
        assert_eq!(Display::parse("nope"), None);
        assert_eq!(FlexDirection::parse("row-reverse"), Some(FlexDirection::RowReverse));
        assert_eq!(JustifyContent::parse("space-between"), Some(JustifyContent::SpaceBetween));
        assert_eq!(JustifyContent::parse("flex-end"), Some(JustifyContent::End));
        assert_eq!(AlignItems::parse("stretch"), Some(AlignItems::Stretch));
        assert_eq!(Position::parse("absolute"), Some(Position::Absolute));
        assert_eq!(Overflow::parse("scroll"), Some(Overflow::Scroll));
    }

    #[test]
    fn flex_direction_axes() {
        assert!(FlexDirection::Row.is_row());
        assert!(FlexDirection::RowReverse.is_row());
        assert!(!FlexDirection::Column.is_row());
        assert!(FlexDirection::ColumnReverse.is_reverse());
        assert!(!FlexDirection::Row.is_reverse());
    }

    #[test]
    fn defaults_match_dense_baseline() {
        assert_eq!(Display::default(), Display::Block);
        assert_eq!(Position::default(), Position::Relative);
        assert_eq!(FlexDirection::default(), FlexDirection::Row);
        assert_eq!(JustifyContent::default(), JustifyContent::Start);
        assert_eq!(AlignItems::default(), AlignItems::Stretch);
        assert_eq!(Overflow::default(), Overflow::Visible);
    }
}
