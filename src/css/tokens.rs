//! Design tokens: a flat name → value map resolved via `var(name)`.

use std::collections::HashMap;

use crate::css::color::Color;

/// A single design-token value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Color(Color),
    Scalar(f32),
    Text(String),
}

/// A flat collection of named design tokens.
///
/// Style rules reference tokens indirectly with `var(name)`; a lookup miss
/// leaves the referencing property at its prior computed value.
#[derive(Debug, Clone, Default)]
pub struct TokenCollection {
    values: HashMap<String, TokenValue>,
}

impl TokenCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a token.
    pub fn set(&mut self, name: impl Into<String>, value: TokenValue) {
        self.values.insert(name.into(), value);
    }

    /// Look up a token by name.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.values.get(name)
    }

    /// Look up a color token. Returns `None` for missing or non-color tokens.
    pub fn color(&self, name: &str) -> Option<Color> {
        match self.values.get(name) {
            Some(TokenValue::Color(c)) => Some(*c),
            _ => None,
        }
    }

    /// Look up a scalar token. Returns `None` for missing or non-scalar tokens.
    pub fn scalar(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(TokenValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Remove a token. Returns the removed value, if any.
    pub fn remove(&mut self, name: &str) -> Option<TokenValue> {
        self.values.remove(name)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
