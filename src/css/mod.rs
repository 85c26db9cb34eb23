//! CSS-like style engine: tokenizer, parser, specificity, cascade, tokens.

pub mod cascade;
pub mod color;
pub mod computed;
pub mod model;
pub mod parser;
pub mod properties;
pub mod scalar;
pub mod specificity;
pub mod styles;
pub mod tokenizer;
pub mod tokens;
