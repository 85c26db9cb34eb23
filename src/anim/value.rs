//! Animatable style values and interpolation.

use crate::css::color::Color;
use crate::geometry::Vec2;

/// A value an animation can carry: scalar, 2D vector, or RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Float(f32),
    Vec2(Vec2),
    Color(Color),
}

impl StyleValue {
    /// Interpolate between two values of the same variant.
    ///
    /// Mismatched variants cannot blend: the result snaps to `self` below
    /// `t = 1` and to `end` at or past it. `t` may leave `[0, 1]` for
    /// overshooting easings.
    pub fn lerp(self, end: StyleValue, t: f32) -> StyleValue {
        match (self, end) {
            (Self::Float(a), Self::Float(b)) => Self::Float(a + (b - a) * t),
            (Self::Vec2(a), Self::Vec2(b)) => Self::Vec2(a.lerp(b, t)),
            (Self::Color(a), Self::Color(b)) => Self::Color(a.lerp(b, t)),
            _ => {
                if t >= 1.0 {
                    end
                } else {
                    self
                }
            }
        }
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<Vec2> for StyleValue {
    fn from(v: Vec2) -> Self {
        Self::Vec2(v)
    }
}

impl From<Color> for StyleValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_lerp() {
        let a = StyleValue::Float(0.0);
        let b = StyleValue::Float(10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5), StyleValue::Float(5.0));
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_extrapolates_for_overshoot() {
        let a = StyleValue::Float(0.0);
        let b = StyleValue::Float(10.0);
        assert_eq!(a.lerp(b, 1.2), StyleValue::Float(12.0));
        assert_eq!(a.lerp(b, -0.1), StyleValue::Float(-1.0));
    }

    #[test]
    fn vec2_and_color_lerp() {
        let a = StyleValue::Vec2(Vec2::ZERO);
        let b = StyleValue::Vec2(Vec2::new(4.0, 8.0));
        assert_eq!(a.lerp(b, 0.25), StyleValue::Vec2(Vec2::new(1.0, 2.0)));

        let c = StyleValue::Color(Color::BLACK);
        let d = StyleValue::Color(Color::WHITE);
        assert_eq!(
            c.lerp(d, 0.5),
            StyleValue::Color(Color::rgb(0.5, 0.5, 0.5))
        );
    }

    #[test]
    fn mismatched_variants_snap() {
        let a = StyleValue::Float(3.0);
        let b = StyleValue::Color(Color::WHITE);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.999), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 1.5), b);
    }

    #[test]
    fn from_impls() {
        assert_eq!(StyleValue::from(2.0), StyleValue::Float(2.0));
        assert_eq!(StyleValue::from(Vec2::ZERO), StyleValue::Vec2(Vec2::ZERO));
        assert_eq!(StyleValue::from(Color::BLACK), StyleValue::Color(Color::BLACK));
    }
}
