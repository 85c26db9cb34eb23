//! Style-sheet AST: Selector, RuleSet, Declaration.

/// A single selector component.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Type selector: matches a node kind name (e.g. `Button`).
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class(String),
    /// ID selector: `#id`.
    Id(String),
    /// Pseudo-class: `:hover`, `:pressed`, `:focus`, etc.
    PseudoClass(String),
}

/// A combinator between selector components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// A single compound selector (sequence of components without combinators).
///
/// For example, `Button.primary:hover` is one `CompoundSelector` with three
/// components: `Type("Button")`, `Class("primary")`, `PseudoClass("hover")`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

impl CompoundSelector {
    /// Create an empty compound selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component to this compound selector.
    pub fn push(&mut self, component: SelectorComponent) {
        self.components.push(component);
    }
}

/// One element in a selector chain: either a compound selector or a combinator.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorPart {
    /// A compound selector (one or more simple selectors).
    Compound(CompoundSelector),
    /// A combinator between compound selectors.
    Combinator(Combinator),
}

/// A full selector: chain of compound selectors joined by combinators.
///
/// For example, `Panel > Button.primary:hover` is a `Selector` with parts:
/// `[Compound(Panel), Combinator(Child), Compound(Button.primary:hover)]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    /// Alternating compound selectors and combinators.
    /// Always starts and ends with a `SelectorPart::Compound`.
    pub parts: Vec<SelectorPart>,
}

impl Selector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A value token within a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationValue {
    /// An identifier like `red`, `flex`, `center`.
    Ident(String),
    /// A bare number like `10`, `3.14`.
    Number(f32),
    /// A number with a unit suffix like `50%`, `80vh`, `12px`.
    Dimension(f32, String),
    /// A hex color string (without the `#` prefix), e.g. `"ff00aa"`.
    Color(String),
    /// An `rgb()`/`rgba()` function value, components already normalized to 0-1.
    Rgb { r: f32, g: f32, b: f32, a: f32 },
    /// A quoted string value.
    Str(String),
    /// A design-token reference: `var(name)` (stores just `name`).
    VarRef(String),
}

/// A single property declaration, e.g. `background: #222` or `padding: 4 8`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, e.g. `"background"`, `"padding"`.
    pub property: String,
    /// The declaration values.
    pub values: Vec<DeclarationValue>,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: String, values: Vec<DeclarationValue>) -> Self {
        Self { property, values }
    }
}

/// A style rule: one or more selectors paired with declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    /// The selectors for this rule (comma-separated in source).
    pub selectors: Vec<Selector>,
    /// The property declarations inside the `{ ... }` block.
    pub declarations: Vec<Declaration>,
}

/// A parsed stylesheet: a list of rule sets.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    pub rules: Vec<RuleSet>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_selector_push() {
        let mut cs = CompoundSelector::new();
        cs.push(SelectorComponent::Type("Button".into()));
        cs.push(SelectorComponent::Class("primary".into()));
        assert_eq!(cs.components.len(), 2);
    }

    #[test]
    fn selector_with_parts() {
        let mut panel = CompoundSelector::new();
        panel.push(SelectorComponent::Type("Panel".into()));

        let mut button = CompoundSelector::new();
        button.push(SelectorComponent::Type("Button".into()));
        button.push(SelectorComponent::Class("primary".into()));

        let selector = Selector {
            parts: vec![
                SelectorPart::Compound(panel),
                SelectorPart::Combinator(Combinator::Child),
                SelectorPart::Compound(button),
            ],
        };

        assert_eq!(selector.parts.len(), 3);
        assert!(matches!(&selector.parts[1], SelectorPart::Combinator(Combinator::Child)));
    }

    #[test]
    fn declaration_new() {
        let decl = Declaration::new(
            "background".into(),
            vec![DeclarationValue::Ident("red".into())],
        );
        assert_eq!(decl.property, "background");
        assert_eq!(decl.values.len(), 1);
    }

    #[test]
    fn declaration_value_variants() {
        // Verify all variants can be constructed
        let _ident = DeclarationValue::Ident("stretch".into());
        let _num = DeclarationValue::Number(42.0);
        let _dim = DeclarationValue::Dimension(100.0, "vw".into());
        let _color = DeclarationValue::Color("aabbcc".into());
        let _rgb = DeclarationValue::Rgb { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
        let _string = DeclarationValue::Str("hello world".into());
        let _var = DeclarationValue::VarRef("accent".into());
    }

    #[test]
    fn stylesheet_default_is_empty() {
        assert!(StyleSheet::new().rules.is_empty());
        assert!(StyleSheet::default().rules.is_empty());
    }
}
