//! Dense computed visual style.
//!
//! The cascade folds sparse [`Styles`] into this struct each frame, starting
//! from `ComputedStyle::default()` rather than the previous frame's values, so
//! toggling a pseudo-state off restores exactly the baseline result.

use crate::css::color::Color;
use crate::css::styles::{Shadow, Styles};

/// Resolved visual properties after the cascade. One per node, rebuilt from
/// the baseline every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub background_color: Color,
    pub text_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub opacity: f32,
    pub corner_radius: f32,
    pub shadow: Option<Shadow>,
    pub font: Option<String>,
    pub font_size: f32,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            background_color: Color::TRANSPARENT,
            text_color: Color::WHITE,
            stroke_color: Color::TRANSPARENT,
            stroke_width: 0.0,
            opacity: 1.0,
            corner_radius: 0.0,
            shadow: None,
            font: None,
            font_size: 16.0,
        }
    }
}

impl ComputedStyle {
    /// Overwrite fields that `styles` explicitly sets; leave the rest as-is.
    pub fn apply(&mut self, styles: &Styles) {
        if let Some(c) = styles.background_color {
            self.background_color = c;
        }
        if let Some(c) = styles.text_color {
            self.text_color = c;
        }
        if let Some(c) = styles.stroke_color {
            self.stroke_color = c;
        }
        if let Some(w) = styles.stroke_width {
            self.stroke_width = w;
        }
        if let Some(o) = styles.opacity {
            self.opacity = o.clamp(0.0, 1.0);
        }
        if let Some(r) = styles.corner_radius {
            self.corner_radius = r.max(0.0);
        }
        if let Some(s) = styles.shadow {
            self.shadow = Some(s);
        }
        if let Some(f) = &styles.font {
            self.font = Some(f.clone());
        }
        if let Some(s) = styles.font_size {
            self.font_size = s.max(1.0);
        }
    }
}
