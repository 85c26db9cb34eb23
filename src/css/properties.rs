//! Property parsing: declaration values → typed fields on [`Styles`].
//!
//! `var(name)` references resolve through the [`TokenCollection`] here; a
//! missing token is reported as an error, which the cascade swallows so the
//! property keeps its prior computed value.

use crate::css::color::Color;
use crate::css::model::DeclarationValue;
use crate::css::scalar::{DimBox, Dimension};
use crate::css::styles::*;
use crate::css::tokens::TokenCollection;
use crate::geometry::Vec2;

/// Errors from property parsing.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
    #[error("unknown token: {0}")]
    UnknownToken(String),
}

fn invalid(property: &str, message: impl Into<String>) -> PropertyError {
    PropertyError::InvalidValue { property: property.into(), message: message.into() }
}

/// Parse a single declaration value into a plain number. `var(name)` resolves
/// to a scalar token.
pub fn parse_number(
    value: &DeclarationValue,
    tokens: &TokenCollection,
) -> Result<f32, PropertyError> {
    match value {
        DeclarationValue::Number(n) => Ok(*n),
        DeclarationValue::Dimension(n, unit) if unit == "px" => Ok(*n),
        DeclarationValue::VarRef(name) => tokens
            .scalar(name)
            .ok_or_else(|| PropertyError::UnknownToken(name.clone())),
        other => Err(invalid("number", format!("expected number, got: {other:?}"))),
    }
}

/// Parse a single declaration value into a [`Dimension`].
///
/// Bare numbers and `px` dimensions are pixels; `%`, `vw`, `vh` keep their
/// unit; `auto` is [`Dimension::Auto`]; `var(name)` resolves to a pixel value.
pub fn parse_dimension(
    value: &DeclarationValue,
    tokens: &TokenCollection,
) -> Result<Dimension, PropertyError> {
    match value {
        DeclarationValue::Number(n) => Ok(Dimension::Px(*n)),
        DeclarationValue::Dimension(n, unit) => match unit.as_str() {
            "px" => Ok(Dimension::Px(*n)),
            "%" => Ok(Dimension::Percent(*n)),
            "vw" => Ok(Dimension::Vw(*n)),
            "vh" => Ok(Dimension::Vh(*n)),
            other => Err(invalid("dimension", format!("unknown unit: {other}"))),
        },
        DeclarationValue::Ident(name) if name.eq_ignore_ascii_case("auto") => Ok(Dimension::Auto),
        DeclarationValue::VarRef(name) => tokens
            .scalar(name)
            .map(Dimension::Px)
            .ok_or_else(|| PropertyError::UnknownToken(name.clone())),
        other => Err(invalid("dimension", format!("expected number, dimension, or 'auto', got: {other:?}"))),
    }
}

/// Parse 1-4 dimension values into a [`DimBox`] (CSS shorthand).
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn parse_dim_box(
    values: &[DeclarationValue],
    tokens: &TokenCollection,
) -> Result<DimBox, PropertyError> {
    match values.len() {
        1 => {
            let v = parse_dimension(&values[0], tokens)?;
            Ok(DimBox::all(v))
        }
        2 => {
            let vertical = parse_dimension(&values[0], tokens)?;
            let horizontal = parse_dimension(&values[1], tokens)?;
            Ok(DimBox::symmetric(vertical, horizontal))
        }
        3 => {
            let top = parse_dimension(&values[0], tokens)?;
            let horizontal = parse_dimension(&values[1], tokens)?;
            let bottom = parse_dimension(&values[2], tokens)?;
            Ok(DimBox::new(top, horizontal, bottom, horizontal))
        }
        4 => {
            let top = parse_dimension(&values[0], tokens)?;
            let right = parse_dimension(&values[1], tokens)?;
            let bottom = parse_dimension(&values[2], tokens)?;
            let left = parse_dimension(&values[3], tokens)?;
            Ok(DimBox::new(top, right, bottom, left))
        }
        n => Err(invalid("margin/padding", format!("expected 1-4 values, got {n}"))),
    }
}

/// Parse a single declaration value into a [`Color`].
pub fn parse_color(
    value: &DeclarationValue,
    tokens: &TokenCollection,
) -> Result<Color, PropertyError> {
    match value {
        DeclarationValue::Color(hex) => Color::from_hex(hex)
            .ok_or_else(|| invalid("color", format!("invalid hex color: #{hex}"))),
        DeclarationValue::Rgb { r, g, b, a } => Ok(Color::rgba(*r, *g, *b, *a)),
        DeclarationValue::Ident(name) => Color::from_name(name)
            .ok_or_else(|| invalid("color", format!("unknown color name: {name}"))),
        DeclarationValue::VarRef(name) => tokens
            .color(name)
            .ok_or_else(|| PropertyError::UnknownToken(name.clone())),
        other => Err(invalid("color", format!("expected color, got: {other:?}"))),
    }
}

/// Extract a single identifier, using the given property name in errors.
fn require_single_ident<'a>(
    values: &'a [DeclarationValue],
    property: &str,
) -> Result<&'a str, PropertyError> {
    if values.len() != 1 {
        return Err(invalid(property, format!("expected 1 value, got {}", values.len())));
    }
    match &values[0] {
        DeclarationValue::Ident(name) => Ok(name),
        other => Err(invalid(property, format!("expected identifier, got: {other:?}"))),
    }
}

fn require_single_number(
    values: &[DeclarationValue],
    property: &str,
    tokens: &TokenCollection,
) -> Result<f32, PropertyError> {
    if values.len() != 1 {
        return Err(invalid(property, format!("expected 1 value, got {}", values.len())));
    }
    parse_number(&values[0], tokens)
}

fn require_single_dimension(
    values: &[DeclarationValue],
    property: &str,
    tokens: &TokenCollection,
) -> Result<Dimension, PropertyError> {
    if values.len() != 1 {
        return Err(invalid(property, format!("expected 1 value, got {}", values.len())));
    }
    parse_dimension(&values[0], tokens)
}

fn require_single_color(
    values: &[DeclarationValue],
    property: &str,
    tokens: &TokenCollection,
) -> Result<Color, PropertyError> {
    if values.len() != 1 {
        return Err(invalid(property, format!("expected 1 value, got {}", values.len())));
    }
    parse_color(&values[0], tokens)
}

/// Parse a non-negative integer (for grid counts, spans, 1-based starts).
fn require_single_uint(values: &[DeclarationValue], property: &str) -> Result<u32, PropertyError> {
    if values.len() != 1 {
        return Err(invalid(property, format!("expected 1 value, got {}", values.len())));
    }
    match &values[0] {
        DeclarationValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Ok(*n as u32),
        DeclarationValue::Ident(name) if name.eq_ignore_ascii_case("auto") => Ok(0),
        other => Err(invalid(property, format!("expected non-negative integer, got: {other:?}"))),
    }
}

/// Parse 1 or 2 numbers into a [`Vec2`] (one value applies to both axes).
fn parse_vec2(
    values: &[DeclarationValue],
    property: &str,
    tokens: &TokenCollection,
) -> Result<Vec2, PropertyError> {
    match values.len() {
        1 => {
            let v = parse_number(&values[0], tokens)?;
            Ok(Vec2::splat(v))
        }
        2 => Ok(Vec2::new(
            parse_number(&values[0], tokens)?,
            parse_number(&values[1], tokens)?,
        )),
        n => Err(invalid(property, format!("expected 1-2 values, got {n}"))),
    }
}

/// Parse `shadow: <dx> <dy> <blur> <color>`.
fn parse_shadow(
    values: &[DeclarationValue],
    tokens: &TokenCollection,
) -> Result<Shadow, PropertyError> {
    if values.len() != 4 {
        return Err(invalid("shadow", format!("expected 4 values, got {}", values.len())));
    }
    Ok(Shadow {
        offset: Vec2::new(
            parse_number(&values[0], tokens)?,
            parse_number(&values[1], tokens)?,
        ),
        blur: parse_number(&values[2], tokens)?.max(0.0),
        color: parse_color(&values[3], tokens)?,
    })
}

/// Parse `grid-template-areas`: one quoted string per row, e.g.
/// `grid-template-areas: "hud hud" "map inv";`. Joined with newlines for
/// line-by-line parsing in the grid layout pass.
fn parse_template_areas(values: &[DeclarationValue]) -> Result<String, PropertyError> {
    if values.is_empty() {
        return Err(invalid("grid-template-areas", "expected at least 1 row string"));
    }
    let mut rows = Vec::with_capacity(values.len());
    for value in values {
        match value {
            DeclarationValue::Str(row) => rows.push(row.as_str()),
            other => {
                return Err(invalid(
                    "grid-template-areas",
                    format!("expected quoted row string, got: {other:?}"),
                ));
            }
        }
    }
    Ok(rows.join("\n"))
}

fn parse_align(name: &str, property: &str) -> Result<AlignItems, PropertyError> {
    AlignItems::parse(name)
        .ok_or_else(|| invalid(property, format!("expected start|end|center|stretch, got: {name}")))
}

/// Apply one parsed declaration onto a sparse [`Styles`].
///
/// On error nothing is written, so the field keeps whatever an earlier rule
/// set (or stays unset).
pub fn apply_declaration(
    styles: &mut Styles,
    property: &str,
    values: &[DeclarationValue],
    tokens: &TokenCollection,
) -> Result<(), PropertyError> {
    match property {
        // Display & positioning
        "display" => {
            let name = require_single_ident(values, "display")?;
            styles.display = Some(Display::parse(name).ok_or_else(|| {
                invalid("display", format!("expected flex|grid|block|none, got: {name}"))
            })?);
        }
        "position" => {
            let name = require_single_ident(values, "position")?;
            styles.position = Some(Position::parse(name).ok_or_else(|| {
                invalid("position", format!("expected relative|absolute, got: {name}"))
            })?);
        }
        "overflow" => {
            let name = require_single_ident(values, "overflow")?;
            styles.overflow = Some(Overflow::parse(name).ok_or_else(|| {
                invalid("overflow", format!("expected visible|hidden|scroll, got: {name}"))
            })?);
        }

        // Flex container
        "flex-direction" => {
            let name = require_single_ident(values, "flex-direction")?;
            styles.flex_direction = Some(FlexDirection::parse(name).ok_or_else(|| {
                invalid(
                    "flex-direction",
                    format!("expected row|column|row-reverse|column-reverse, got: {name}"),
                )
            })?);
        }
        "justify-content" => {
            let name = require_single_ident(values, "justify-content")?;
            styles.justify_content = Some(JustifyContent::parse(name).ok_or_else(|| {
                invalid("justify-content", format!("unknown justification: {name}"))
            })?);
        }
        "align-items" => {
            let name = require_single_ident(values, "align-items")?;
            styles.align_items = Some(parse_align(name, "align-items")?);
        }
        "gap" => styles.gap = Some(require_single_number(values, "gap", tokens)?.max(0.0)),
        "row-gap" => styles.row_gap = Some(require_single_number(values, "row-gap", tokens)?.max(0.0)),
        "column-gap" => {
            styles.column_gap = Some(require_single_number(values, "column-gap", tokens)?.max(0.0));
        }

        // Grid container
        "grid-columns" => styles.grid_columns = Some(require_single_uint(values, "grid-columns")?),
        "grid-rows" => styles.grid_rows = Some(require_single_uint(values, "grid-rows")?),
        "grid-template-areas" => {
            styles.grid_template_areas = Some(parse_template_areas(values)?);
        }
        "grid-justify-items" => {
            let name = require_single_ident(values, "grid-justify-items")?;
            styles.grid_justify_items = Some(parse_align(name, "grid-justify-items")?);
        }
        "grid-align-items" => {
            let name = require_single_ident(values, "grid-align-items")?;
            styles.grid_align_items = Some(parse_align(name, "grid-align-items")?);
        }

        // Grid item placement
        "grid-area" => {
            let name = require_single_ident(values, "grid-area")?;
            styles.grid_area = Some(name.to_string());
        }
        "grid-column-start" => {
            styles.grid_column_start = Some(require_single_uint(values, "grid-column-start")?);
        }
        "grid-row-start" => {
            styles.grid_row_start = Some(require_single_uint(values, "grid-row-start")?);
        }
        "grid-column-span" => {
            styles.grid_column_span =
                Some(require_single_uint(values, "grid-column-span")?.max(1));
        }
        "grid-row-span" => {
            styles.grid_row_span = Some(require_single_uint(values, "grid-row-span")?.max(1));
        }

        // Sizing
        "width" => styles.width = Some(require_single_dimension(values, "width", tokens)?),
        "height" => styles.height = Some(require_single_dimension(values, "height", tokens)?),
        "min-width" => {
            styles.min_width = Some(require_single_dimension(values, "min-width", tokens)?);
        }
        "min-height" => {
            styles.min_height = Some(require_single_dimension(values, "min-height", tokens)?);
        }
        "max-width" => {
            styles.max_width = Some(require_single_dimension(values, "max-width", tokens)?);
        }
        "max-height" => {
            styles.max_height = Some(require_single_dimension(values, "max-height", tokens)?);
        }
        "aspect-ratio" => {
            let ratio = require_single_number(values, "aspect-ratio", tokens)?;
            if ratio <= 0.0 {
                return Err(invalid("aspect-ratio", "must be positive"));
            }
            styles.aspect_ratio = Some(ratio);
        }

        // Box model
        "padding" => styles.padding = Some(parse_dim_box(values, tokens)?),
        "margin" => styles.margin = Some(parse_dim_box(values, tokens)?),

        // Flex item
        "flex-grow" => {
            styles.flex_grow = Some(require_single_number(values, "flex-grow", tokens)?.max(0.0));
        }
        "flex-shrink" => {
            styles.flex_shrink =
                Some(require_single_number(values, "flex-shrink", tokens)?.max(0.0));
        }
        "flex-basis" => {
            styles.flex_basis = Some(require_single_dimension(values, "flex-basis", tokens)?);
        }

        // Absolute placement
        "anchor" => styles.anchor = Some(parse_vec2(values, "anchor", tokens)?),
        "offset" => styles.offset = Some(parse_vec2(values, "offset", tokens)?),
        "pivot" => styles.pivot = Some(parse_vec2(values, "pivot", tokens)?),

        // Visual
        "background" | "background-color" => {
            styles.background_color = Some(require_single_color(values, property, tokens)?);
        }
        "color" | "text-color" => {
            styles.text_color = Some(require_single_color(values, property, tokens)?);
        }
        "stroke-color" | "border-color" => {
            styles.stroke_color = Some(require_single_color(values, property, tokens)?);
        }
        "stroke-width" | "border-width" => {
            styles.stroke_width =
                Some(require_single_number(values, property, tokens)?.max(0.0));
        }
        "opacity" => styles.opacity = Some(require_single_number(values, "opacity", tokens)?),
        "corner-radius" | "border-radius" => {
            styles.corner_radius = Some(require_single_number(values, property, tokens)?);
        }
        "shadow" => styles.shadow = Some(parse_shadow(values, tokens)?),
        "font" => {
            if values.len() != 1 {
                return Err(invalid("font", format!("expected 1 value, got {}", values.len())));
            }
            styles.font = Some(match &values[0] {
                DeclarationValue::Str(s) => s.clone(),
                DeclarationValue::Ident(s) => s.clone(),
                other => {
                    return Err(invalid("font", format!("expected font name, got: {other:?}")));
                }
            });
        }
        "font-size" => {
            styles.font_size = Some(require_single_number(values, "font-size", tokens)?.max(1.0));
        }

        // Unknown
        other => return Err(PropertyError::UnknownProperty(other.to_string())),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::tokens::TokenValue;

    fn apply(styles: &mut Styles, prop: &str, values: Vec<DeclarationValue>) {
        apply_declaration(styles, prop, &values, &TokenCollection::new())
            .unwrap_or_else(|e| panic!("apply {prop} failed: {e}"));
    }

    // ── parse_dimension ──────────────────────────────────────────────

    #[test]
    fn dimension_units() {
        let t = TokenCollection::new();
        assert_eq!(
            parse_dimension(&DeclarationValue::Number(10.0), &t).unwrap(),
            Dimension::Px(10.0)
        );
        assert_eq!(
            parse_dimension(&DeclarationValue::Dimension(50.0, "%".into()), &t).unwrap(),
            Dimension::Percent(50.0)
        );
        assert_eq!(
            parse_dimension(&DeclarationValue::Dimension(10.0, "vw".into()), &t).unwrap(),
            Dimension::Vw(10.0)
        );
        assert_eq!(
            parse_dimension(&DeclarationValue::Ident("auto".into()), &t).unwrap(),
            Dimension::Auto
        );
        assert!(parse_dimension(&DeclarationValue::Dimension(1.0, "em".into()), &t).is_err());
    }

    #[test]
    fn dimension_from_scalar_token() {
        let mut t = TokenCollection::new();
        t.set("spacing-md", TokenValue::Scalar(16.0));
        assert_eq!(
            parse_dimension(&DeclarationValue::VarRef("spacing-md".into()), &t).unwrap(),
            Dimension::Px(16.0)
        );
        assert!(matches!(
            parse_dimension(&DeclarationValue::VarRef("missing".into()), &t),
            Err(PropertyError::UnknownToken(_))
        ));
    }

    // ── parse_color ──────────────────────────────────────────────────

    #[test]
    fn color_syntaxes() {
        let t = TokenCollection::new();
        assert_eq!(
            parse_color(&DeclarationValue::Color("ff0000".into()), &t).unwrap(),
            Color::rgb(1.0, 0.0, 0.0)
        );
        assert_eq!(
            parse_color(&DeclarationValue::Ident("red".into()), &t).unwrap(),
            Color::rgb(1.0, 0.0, 0.0)
        );
        assert_eq!(
            parse_color(&DeclarationValue::Rgb { r: 0.0, g: 1.0, b: 0.0, a: 0.5 }, &t).unwrap(),
            Color::rgba(0.0, 1.0, 0.0, 0.5)
        );
        assert!(parse_color(&DeclarationValue::Ident("mauve-ish".into()), &t).is_err());
    }

    #[test]
    fn color_from_token() {
        let mut t = TokenCollection::new();
        t.set("accent", TokenValue::Color(Color::rgb(0.0, 0.0, 1.0)));
        assert_eq!(
            parse_color(&DeclarationValue::VarRef("accent".into()), &t).unwrap(),
            Color::rgb(0.0, 0.0, 1.0)
        );
    }

    // ── shorthand box ────────────────────────────────────────────────

    #[test]
    fn dim_box_shorthands() {
        let t = TokenCollection::new();
        let one = parse_dim_box(&[DeclarationValue::Number(4.0)], &t).unwrap();
        assert_eq!(one, DimBox::all(Dimension::Px(4.0)));

        let two = parse_dim_box(
            &[DeclarationValue::Number(4.0), DeclarationValue::Number(8.0)],
            &t,
        )
        .unwrap();
        assert_eq!(two.top, Dimension::Px(4.0));
        assert_eq!(two.left, Dimension::Px(8.0));

        let four = parse_dim_box(
            &[
                DeclarationValue::Number(1.0),
                DeclarationValue::Number(2.0),
                DeclarationValue::Number(3.0),
                DeclarationValue::Number(4.0),
            ],
            &t,
        )
        .unwrap();
        assert_eq!(four.right, Dimension::Px(2.0));
        assert_eq!(four.left, Dimension::Px(4.0));

        assert!(parse_dim_box(&[], &t).is_err());
    }

    // ── apply_declaration ────────────────────────────────────────────

    #[test]
    fn apply_display_and_position() {
        let mut s = Styles::new();
        apply(&mut s, "display", vec![DeclarationValue::Ident("flex".into())]);
        apply(&mut s, "position", vec![DeclarationValue::Ident("absolute".into())]);
        assert_eq!(s.display, Some(Display::Flex));
        assert_eq!(s.position, Some(Position::Absolute));
    }

    #[test]
    fn apply_flex_container() {
        let mut s = Styles::new();
        apply(&mut s, "flex-direction", vec![DeclarationValue::Ident("column".into())]);
        apply(&mut s, "justify-content", vec![DeclarationValue::Ident("space-between".into())]);
        apply(&mut s, "align-items", vec![DeclarationValue::Ident("center".into())]);
        apply(&mut s, "gap", vec![DeclarationValue::Number(8.0)]);
        assert_eq!(s.flex_direction, Some(FlexDirection::Column));
        assert_eq!(s.justify_content, Some(JustifyContent::SpaceBetween));
        assert_eq!(s.align_items, Some(AlignItems::Center));
        assert_eq!(s.gap, Some(8.0));
    }

    #[test]
    fn apply_grid_placement() {
        let mut s = Styles::new();
        apply(&mut s, "grid-columns", vec![DeclarationValue::Number(3.0)]);
        apply(&mut s, "grid-column-start", vec![DeclarationValue::Number(2.0)]);
        apply(&mut s, "grid-column-span", vec![DeclarationValue::Number(2.0)]);
        apply(&mut s, "grid-row-start", vec![DeclarationValue::Ident("auto".into())]);
        assert_eq!(s.grid_columns, Some(3));
        assert_eq!(s.grid_column_start, Some(2));
        assert_eq!(s.grid_column_span, Some(2));
        assert_eq!(s.grid_row_start, Some(0));
    }

    #[test]
    fn apply_template_areas_joins_rows() {
        let mut s = Styles::new();
        apply(
            &mut s,
            "grid-template-areas",
            vec![
                DeclarationValue::Str("hud hud".into()),
                DeclarationValue::Str("map inv".into()),
            ],
        );
        assert_eq!(s.grid_template_areas.as_deref(), Some("hud hud\nmap inv"));
    }

    #[test]
    fn apply_visual_aliases() {
        let mut s = Styles::new();
        apply(&mut s, "background", vec![DeclarationValue::Color("222222".into())]);
        apply(&mut s, "border-radius", vec![DeclarationValue::Number(4.0)]);
        apply(&mut s, "border-color", vec![DeclarationValue::Ident("white".into())]);
        assert!(s.background_color.is_some());
        assert_eq!(s.corner_radius, Some(4.0));
        assert_eq!(s.stroke_color, Some(Color::WHITE));
    }

    #[test]
    fn apply_shadow() {
        let mut s = Styles::new();
        apply(
            &mut s,
            "shadow",
            vec![
                DeclarationValue::Number(2.0),
                DeclarationValue::Number(2.0),
                DeclarationValue::Number(4.0),
                DeclarationValue::Color("00000080".into()),
            ],
        );
        let shadow = s.shadow.unwrap();
        assert_eq!(shadow.offset, Vec2::new(2.0, 2.0));
        assert_eq!(shadow.blur, 4.0);
    }

    #[test]
    fn apply_anchor_offset_pivot() {
        let mut s = Styles::new();
        apply(&mut s, "anchor", vec![DeclarationValue::Number(1.0), DeclarationValue::Number(0.0)]);
        apply(&mut s, "pivot", vec![DeclarationValue::Number(0.5)]);
        assert_eq!(s.anchor, Some(Vec2::new(1.0, 0.0)));
        assert_eq!(s.pivot, Some(Vec2::splat(0.5)));
    }

    #[test]
    fn unknown_property_is_error() {
        let mut s = Styles::new();
        let err = apply_declaration(
            &mut s,
            "blink-rate",
            &[DeclarationValue::Number(1.0)],
            &TokenCollection::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PropertyError::UnknownProperty(_)));
    }

    #[test]
    fn error_leaves_field_untouched() {
        let mut s = Styles::new();
        s.width = Some(Dimension::Px(10.0));
        let result = apply_declaration(
            &mut s,
            "width",
            &[DeclarationValue::Ident("wide".into())],
            &TokenCollection::new(),
        );
        assert!(result.is_err());
        assert_eq!(s.width, Some(Dimension::Px(10.0)));
    }

    #[test]
    fn negative_gap_and_grow_floor_at_zero() {
        let mut s = Styles::new();
        apply(&mut s, "gap", vec![DeclarationValue::Number(-5.0)]);
        apply(&mut s, "flex-grow", vec![DeclarationValue::Number(-1.0)]);
        assert_eq!(s.gap, Some(0.0));
        assert_eq!(s.flex_grow, Some(0.0));
    }
}
