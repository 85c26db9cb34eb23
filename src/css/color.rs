//! RGBA color type and literal parsing.
//!
//! Recognized syntaxes: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`,
//! `rgba(r,g,b,a)` (components 0-255, alpha 0-1), and a fixed named-color
//! table. Unparseable literals are reported as `None` and the cascade leaves
//! the property at its prior value.

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// An opaque color from rgb components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// A color from rgba components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A color from 8-bit components.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse a hex color string without the leading `#`.
    ///
    /// Accepts 3 (`rgb`), 4 (`rgba`), 6 (`rrggbb`), or 8 (`rrggbbaa`) hex
    /// digits. Returns `None` for any other shape.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let expand = |nibble: u8| nibble << 4 | nibble;
        let digit = |c: u8| (c as char).to_digit(16).map(|d| d as u8);

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 | 4 => {
                let mut parts = [255u8; 4];
                for (i, &c) in bytes.iter().enumerate() {
                    parts[i] = expand(digit(c)?);
                }
                Some(Self::from_u8(parts[0], parts[1], parts[2], parts[3]))
            }
            6 | 8 => {
                let mut parts = [255u8; 4];
                for (i, pair) in bytes.chunks(2).enumerate() {
                    parts[i] = digit(pair[0])? << 4 | digit(pair[1])?;
                }
                Some(Self::from_u8(parts[0], parts[1], parts[2], parts[3]))
            }
            _ => None,
        }
    }

    /// Look up a color in the fixed named-color table.
    pub fn from_name(name: &str) -> Option<Self> {
        let c = match name {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::rgb(1.0, 0.0, 0.0),
            "green" => Color::rgb(0.0, 1.0, 0.0),
            "blue" => Color::rgb(0.0, 0.0, 1.0),
            "yellow" => Color::rgb(1.0, 1.0, 0.0),
            "cyan" => Color::rgb(0.0, 1.0, 1.0),
            "magenta" => Color::rgb(1.0, 0.0, 1.0),
            "gray" | "grey" => Color::rgb(0.5, 0.5, 0.5),
            "orange" => Color::rgb(1.0, 0.65, 0.0),
            "purple" => Color::rgb(0.5, 0.0, 0.5),
            "transparent" => Color::TRANSPARENT,
            _ => return None,
        };
        Some(c)
    }

    /// Linearly interpolate between `self` and `other` by `t`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}
