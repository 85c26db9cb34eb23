//! Recursive descent stylesheet parser.
//!
//! Parses stylesheet text into a [`StyleSheet`] (a vector of [`RuleSet`]s).
//! Uses the logos-based tokenizer from [`crate::css::tokenizer`].

use logos::Logos;

use crate::css::model::*;
use crate::css::tokenizer::Token;

/// Errors from stylesheet parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A positioned token with byte-level span information for whitespace detection.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    /// Index in the token stream (for error reporting).
    pos: usize,
    /// Byte offset where this token starts in the source.
    byte_start: usize,
    /// Byte offset where this token ends in the source.
    byte_end: usize,
}

/// Strip block comments (`/* ... */`) from the input, replacing each comment
/// with a single space.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    // Start of the current non-comment run. Runs are copied whole so
    // multi-byte characters pass through untouched; the `/*` and `*/`
    // delimiters are ASCII, so every run boundary is a char boundary.
    let mut run_start = 0;

    while i < len {
        if i + 1 < len && bytes[i] == b'/' && bytes[i + 1] == b'*' {
            result.push_str(&input[run_start..i]);
            i += 2;
            let mut found_end = false;
            while i + 1 < len {
                if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                    i += 2;
                    found_end = true;
                    break;
                }
                i += 1;
            }
            if !found_end {
                // Unterminated comment consumes the rest of the input.
                i = len;
            }
            result.push(' ');
            run_start = i;
        } else {
            i += 1;
        }
    }
    result.push_str(&input[run_start..]);

    result
}

/// Tokenize input using logos with span information preserved.
fn tokenize_with_spans(input: &str) -> Vec<PToken> {
    let lexer = Token::lexer(input);
    let mut tokens = Vec::new();
    let mut idx = 0;

    for (result, span) in lexer.spanned() {
        if let Ok(token) = result {
            tokens.push(PToken {
                text: input[span.clone()].to_string(),
                token,
                pos: idx,
                byte_start: span.start,
                byte_end: span.end,
            });
            idx += 1;
        }
    }

    tokens
}

/// Parse a stylesheet string into a [`StyleSheet`].
pub fn parse_stylesheet(input: &str) -> Result<StyleSheet, ParseError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize_with_spans(&cleaned);

    let mut parser = Parser { tokens, cursor: 0 };

    let mut rules = Vec::new();
    while !parser.is_eof() {
        rules.push(parser.parse_rule()?);
    }

    Ok(StyleSheet { rules })
}

/// Recursive descent parser state.
struct Parser {
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&PToken> {
        if self.cursor < self.tokens.len() {
            let tok = &self.tokens[self.cursor];
            self.cursor += 1;
            Some(tok)
        } else {
            None
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if &tok.token == expected => Ok(tok.clone()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {:?}, got {:?} '{}'", expected, tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    fn current_pos(&self) -> usize {
        self.peek().map(|t| t.pos).unwrap_or(self.tokens.len())
    }

    /// Returns `true` if the current token is immediately adjacent (no
    /// whitespace) to the previous token.
    fn is_adjacent(&self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = &self.tokens[self.cursor - 1];
        match self.peek() {
            Some(curr) => curr.byte_start == prev.byte_end,
            None => false,
        }
    }

    /// Parse a single rule: selector(s) `{` declarations `}`.
    fn parse_rule(&mut self) -> Result<RuleSet, ParseError> {
        let selectors = self.parse_selector_list()?;
        self.expect(&Token::BraceOpen)?;
        let declarations = self.parse_declarations()?;
        self.expect(&Token::BraceClose)?;

        Ok(RuleSet { selectors, declarations })
    }

    /// Parse a comma-separated list of selectors (before `{`).
    fn parse_selector_list(&mut self) -> Result<Vec<Selector>, ParseError> {
        let mut selectors = Vec::new();

        selectors.push(self.parse_selector()?);

        while self.peek().is_some_and(|t| t.token == Token::Comma) {
            self.advance(); // consume comma
            selectors.push(self.parse_selector()?);
        }

        Ok(selectors)
    }

    /// Parse a single selector: a sequence of compound selectors with
    /// combinators.
    ///
    /// A selector like `Panel > Button.primary:hover` becomes parts:
    /// - SelectorPart::Compound(CompoundSelector [Type("Panel")])
    /// - SelectorPart::Combinator(Child)
    /// - SelectorPart::Compound(CompoundSelector [Type("Button"), Class("primary"), PseudoClass("hover")])
    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        let mut parts = Vec::new();

        // Parse first compound selector
        parts.push(SelectorPart::Compound(self.parse_compound_selector()?));

        // Parse additional combinator + compound pairs
        loop {
            match self.peek() {
                // `>` means child combinator
                Some(t) if t.token == Token::GreaterThan => {
                    self.advance();
                    parts.push(SelectorPart::Combinator(Combinator::Child));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                // A selector-starting token after whitespace is a descendant
                // combinator. If it were adjacent, parse_compound_selector
                // would already have consumed it.
                Some(t)
                    if matches!(
                        t.token,
                        Token::Ident | Token::Hash | Token::Dot | Token::Star | Token::PseudoClass
                    ) =>
                {
                    parts.push(SelectorPart::Combinator(Combinator::Descendant));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                // Anything else ends this selector
                _ => break,
            }
        }

        Ok(Selector { parts })
    }

    /// Parse one simple component that begins with `.` or `#`.
    fn parse_named_component(&mut self, sigil: char) -> Result<SelectorComponent, ParseError> {
        self.advance(); // consume the sigil token
        let name_tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected name after '{sigil}'")))?;
        if name_tok.token != Token::Ident {
            return Err(ParseError::UnexpectedToken {
                position: name_tok.pos,
                message: format!("expected name, got {:?} '{}'", name_tok.token, name_tok.text),
            });
        }
        let name = name_tok.text.clone();
        Ok(match sigil {
            '.' => SelectorComponent::Class(name),
            _ => SelectorComponent::Id(name),
        })
    }

    /// Parse a compound selector: a sequence of simple selector components
    /// with no whitespace between them, e.g. `Button.primary:hover`.
    ///
    /// Uses span-based adjacency detection: `.class`, `#id`, and `:pseudo`
    /// are only appended to the current compound if they appear immediately
    /// after the previous token (no whitespace gap).
    fn parse_compound_selector(&mut self) -> Result<CompoundSelector, ParseError> {
        let mut components = Vec::new();

        // First part of the compound (type, universal, class, id, or pseudo-class)
        match self.peek() {
            Some(t) if t.token == Token::Ident => {
                let name = t.text.clone();
                self.advance();
                components.push(SelectorComponent::Type(name));
            }
            Some(t) if t.token == Token::Star => {
                self.advance();
                components.push(SelectorComponent::Universal);
            }
            Some(t) if t.token == Token::Dot => {
                components.push(self.parse_named_component('.')?);
            }
            Some(t) if t.token == Token::Hash => {
                components.push(self.parse_named_component('#')?);
            }
            Some(t) if t.token == Token::PseudoClass => {
                let name = t.text[1..].to_string();
                self.advance();
                components.push(SelectorComponent::PseudoClass(name));
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    position: self.current_pos(),
                    message: "expected selector part".into(),
                });
            }
        }

        // Continue appending to this compound only while adjacent.
        loop {
            if !self.is_adjacent() {
                break;
            }

            match self.peek() {
                Some(t) if t.token == Token::Dot => {
                    components.push(self.parse_named_component('.')?);
                }
                Some(t) if t.token == Token::Hash => {
                    components.push(self.parse_named_component('#')?);
                }
                Some(t) if t.token == Token::PseudoClass => {
                    let name = t.text[1..].to_string();
                    self.advance();
                    components.push(SelectorComponent::PseudoClass(name));
                }
                _ => break,
            }
        }

        Ok(CompoundSelector { components })
    }

    /// Parse declarations between `{` and `}`.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();

        while self.peek().is_some_and(|t| t.token != Token::BraceClose) {
            declarations.push(self.parse_declaration()?);
        }

        Ok(declarations)
    }

    /// Parse a single declaration: `property: value1 value2;`
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        // Property name
        let prop_tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected property name".into()))?;
        if prop_tok.token != Token::Ident {
            return Err(ParseError::UnexpectedToken {
                position: prop_tok.pos,
                message: format!(
                    "expected property name, got {:?} '{}'",
                    prop_tok.token, prop_tok.text
                ),
            });
        }
        let property = prop_tok.text.clone();

        // Colon
        self.expect(&Token::Colon)?;

        // Values (until `;` or `}`)
        let mut values = Vec::new();

        loop {
            match self.peek() {
                None
                | Some(PToken { token: Token::Semicolon, .. })
                | Some(PToken { token: Token::BraceClose, .. }) => break,
                Some(_) => {
                    values.push(self.parse_declaration_value()?);
                }
            }
        }

        // Consume optional semicolon
        if self.peek().is_some_and(|t| t.token == Token::Semicolon) {
            self.advance();
        }

        Ok(Declaration { property, values })
    }

    /// Parse a single declaration value into a [`DeclarationValue`].
    fn parse_declaration_value(&mut self) -> Result<DeclarationValue, ParseError> {
        let tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected declaration value".into()))?
            .clone();

        match &tok.token {
            Token::Number => {
                let n: f32 = tok.text.parse().map_err(|_| ParseError::UnexpectedToken {
                    position: tok.pos,
                    message: format!("invalid number: {}", tok.text),
                })?;
                Ok(DeclarationValue::Number(n))
            }
            Token::Dimension => {
                let text = &tok.text;
                let (num_str, unit_str) =
                    split_dimension(text).ok_or_else(|| ParseError::UnexpectedToken {
                        position: tok.pos,
                        message: format!("invalid dimension: {text}"),
                    })?;
                let n: f32 = num_str.parse().map_err(|_| ParseError::UnexpectedToken {
                    position: tok.pos,
                    message: format!("invalid number in dimension: {num_str}"),
                })?;
                Ok(DeclarationValue::Dimension(n, unit_str.to_string()))
            }
            Token::Ident => {
                // `rgb(...)` / `rgba(...)` function values
                if (tok.text == "rgb" || tok.text == "rgba")
                    && self.peek().is_some_and(|t| t.token == Token::ParenOpen)
                {
                    return self.parse_rgb_function(&tok);
                }
                Ok(DeclarationValue::Ident(tok.text.clone()))
            }
            Token::HexColor => {
                // Strip the leading '#' for DeclarationValue::Color
                let hex = tok.text.strip_prefix('#').unwrap_or(&tok.text);
                Ok(DeclarationValue::Color(hex.to_string()))
            }
            Token::StringLiteral | Token::StringLiteralSingle => {
                // Strip surrounding quotes
                let inner = &tok.text[1..tok.text.len() - 1];
                Ok(DeclarationValue::Str(inner.to_string()))
            }
            Token::VarRef => {
                // `var(name)` — strip the wrapper
                let name = tok.text["var(".len()..tok.text.len() - 1].to_string();
                Ok(DeclarationValue::VarRef(name))
            }
            other => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("unexpected token in declaration value: {:?} '{}'", other, tok.text),
            }),
        }
    }

    /// Parse the argument list of `rgb(r, g, b)` / `rgba(r, g, b, a)`.
    ///
    /// Components are 0-255, alpha 0-1; the result is normalized to 0-1.
    fn parse_rgb_function(&mut self, fn_tok: &PToken) -> Result<DeclarationValue, ParseError> {
        self.expect(&Token::ParenOpen)?;

        let mut numbers = Vec::new();
        loop {
            match self.peek() {
                Some(t) if t.token == Token::ParenClose => {
                    self.advance();
                    break;
                }
                Some(t) if t.token == Token::Comma => {
                    self.advance();
                }
                Some(t) if t.token == Token::Number => {
                    let n: f32 = t.text.parse().map_err(|_| ParseError::UnexpectedToken {
                        position: fn_tok.pos,
                        message: format!("invalid number in {}()", fn_tok.text),
                    })?;
                    numbers.push(n);
                    self.advance();
                }
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        position: self.current_pos(),
                        message: format!("expected number or ')' in {}()", fn_tok.text),
                    });
                }
            }
        }

        if numbers.len() != 3 && numbers.len() != 4 {
            return Err(ParseError::UnexpectedToken {
                position: fn_tok.pos,
                message: format!("{}() takes 3 or 4 components, got {}", fn_tok.text, numbers.len()),
            });
        }

        Ok(DeclarationValue::Rgb {
            r: numbers[0] / 255.0,
            g: numbers[1] / 255.0,
            b: numbers[2] / 255.0,
            a: numbers.get(3).copied().unwrap_or(1.0),
        })
    }
}

/// Split a dimension string like "50%" or "12px" into (number_part, unit_part).
fn split_dimension(s: &str) -> Option<(&str, &str)> {
    let unit_start = s
        .char_indices()
        .find(|(i, c)| !c.is_ascii_digit() && *c != '.' && !(*c == '-' && *i == 0))
        .map(|(i, _)| i)?;

    if unit_start == 0 || unit_start >= s.len() {
        return None;
    }

    Some((&s[..unit_start], &s[unit_start..]))
}
