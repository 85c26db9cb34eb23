//! Sizing values: Dimension (px, %, vw, vh, auto) and DimBox.

use crate::geometry::{Insets, Vec2};

/// A sizing value with a unit, e.g. `10`, `50%`, `100vw`, `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Content-driven size.
    #[default]
    Auto,
    /// Absolute pixels in the virtual resolution.
    Px(f32),
    /// Percentage of the parent's resolved content size on the same axis.
    Percent(f32),
    /// Percentage of the virtual viewport width.
    Vw(f32),
    /// Percentage of the virtual viewport height.
    Vh(f32),
}

impl Dimension {
    /// Returns `true` if this dimension is auto-sized.
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// Resolve to pixels against a reference axis length and the viewport.
    ///
    /// `basis` is the parent's content size on the matching axis. Returns
    /// `None` for `Auto`, which the layout engine resolves from content.
    pub fn resolve(self, basis: f32, viewport: Vec2) -> Option<f32> {
        match self {
            Dimension::Auto => None,
            Dimension::Px(v) => Some(v),
            Dimension::Percent(v) => Some(basis * v / 100.0),
            Dimension::Vw(v) => Some(viewport.x * v / 100.0),
            Dimension::Vh(v) => Some(viewport.y * v / 100.0),
        }
    }
}

/// Four-sided dimension values (top, right, bottom, left) like CSS
/// margin/padding shorthands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimBox {
    pub top: Dimension,
    pub right: Dimension,
    pub bottom: Dimension,
    pub left: Dimension,
}

impl DimBox {
    /// The same dimension on all four sides.
    pub fn all(v: Dimension) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// Symmetric vertical and horizontal values.
    pub fn symmetric(vertical: Dimension, horizontal: Dimension) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Explicit values for all four sides.
    pub fn new(top: Dimension, right: Dimension, bottom: Dimension, left: Dimension) -> Self {
        Self { top, right, bottom, left }
    }

    /// Resolve to pixel [`Insets`] against the parent's content size.
    ///
    /// Horizontal sides resolve against the parent width, vertical sides
    /// against the parent height. `Auto` sides resolve to zero.
    pub fn resolve(self, parent: Vec2, viewport: Vec2) -> Insets {
        Insets {
            top: self.top.resolve(parent.y, viewport).unwrap_or(0.0),
            right: self.right.resolve(parent.x, viewport).unwrap_or(0.0),
            bottom: self.bottom.resolve(parent.y, viewport).unwrap_or(0.0),
            left: self.left.resolve(parent.x, viewport).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Vec2 = Vec2::new(1920.0, 1080.0);

    #[test]
    fn auto_resolves_to_none() {
        assert!(Dimension::Auto.is_auto());
        assert_eq!(Dimension::Auto.resolve(100.0, VP), None);
    }

    #[test]
    fn px_resolves_directly() {
        assert_eq!(Dimension::Px(42.0).resolve(100.0, VP), Some(42.0));
    }

    #[test]
    fn percent_resolves_against_basis() {
        assert_eq!(Dimension::Percent(50.0).resolve(200.0, VP), Some(100.0));
        assert_eq!(Dimension::Percent(25.0).resolve(400.0, VP), Some(100.0));
    }

    #[test]
    fn viewport_units_resolve_against_viewport() {
        // Viewport units ignore the basis entirely.
        assert_eq!(Dimension::Vw(50.0).resolve(0.0, VP), Some(960.0));
        assert_eq!(Dimension::Vh(10.0).resolve(0.0, VP), Some(108.0));
    }

    #[test]
    fn default_is_auto() {
        assert!(Dimension::default().is_auto());
    }

    #[test]
    fn dimbox_all() {
        let b = DimBox::all(Dimension::Px(5.0));
        assert_eq!(b.top, Dimension::Px(5.0));
        assert_eq!(b.left, Dimension::Px(5.0));
    }

    #[test]
    fn dimbox_symmetric() {
        let b = DimBox::symmetric(Dimension::Px(1.0), Dimension::Px(2.0));
        assert_eq!(b.top, Dimension::Px(1.0));
        assert_eq!(b.bottom, Dimension::Px(1.0));
        assert_eq!(b.right, Dimension::Px(2.0));
        assert_eq!(b.left, Dimension::Px(2.0));
    }

    #[test]
    fn dimbox_resolve_axes() {
        let b = DimBox::new(
            Dimension::Percent(10.0), // top: 10% of height
            Dimension::Percent(10.0), // right: 10% of width
            Dimension::Px(3.0),
            Dimension::Auto,
        );
        let insets = b.resolve(Vec2::new(200.0, 100.0), VP);
        assert_eq!(insets.top, 10.0);
        assert_eq!(insets.right, 20.0);
        assert_eq!(insets.bottom, 3.0);
        assert_eq!(insets.left, 0.0);
    }
}
