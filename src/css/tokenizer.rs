//! logos-based stylesheet tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats `#` as Hash)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`], not `Hash` + `Ident`
//! - `50%` matches [`Token::Dimension`], not `Number` + `%`
//! - `:hover` matches [`Token::PseudoClass`], not `Colon` + `Ident`
//! - `var(accent)` matches [`Token::VarRef`] as one token

use logos::Logos;

/// Stylesheet token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Design-token reference: `var(accent)`, `var(spacing.md)`.
    #[regex(r"var\([a-zA-Z_][a-zA-Z0-9_.-]*\)")]
    VarRef,

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Dimension: number with unit suffix like `12px`, `50%`, `10vw`, `80vh`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|%|vw|vh)")]
    Dimension,

    /// Pseudo-class: `:hover`, `:pressed`, `:focus`, etc.
    #[regex(r":[a-zA-Z][a-zA-Z0-9_-]*")]
    PseudoClass,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: property names, selector names, color names, etc.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `#`
    #[token("#")]
    Hash,

    /// `*`
    #[token("*")]
    Star,

    /// `>`
    #[token(">")]
    GreaterThan,
}

/// Tokenize a stylesheet string into a vector of `(Token, String)` pairs.
///
/// Tokens that fail to lex are skipped.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return just the token variants.
    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    /// Helper: tokenize and return (token, slice) pairs.
    fn tokens_with_text(input: &str) -> Vec<(Token, String)> {
        tokenize(input)
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tokens("{ } : ; , . # * > ( )"),
            vec![
                Token::BraceOpen,
                Token::BraceClose,
                Token::Colon,
                Token::Semicolon,
                Token::Comma,
                Token::Dot,
                Token::Hash,
                Token::Star,
                Token::GreaterThan,
                Token::ParenOpen,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_idents() {
        let result = tokens_with_text("background flex-direction my-widget _private");
        assert_eq!(result[0], (Token::Ident, "background".into()));
        assert_eq!(result[1], (Token::Ident, "flex-direction".into()));
        assert_eq!(result[2], (Token::Ident, "my-widget".into()));
        assert_eq!(result[3], (Token::Ident, "_private".into()));
    }

    #[test]
    fn test_numbers() {
        let result = tokens_with_text("10 -5 3.14 0");
        assert_eq!(result[0], (Token::Number, "10".into()));
        assert_eq!(result[1], (Token::Number, "-5".into()));
        assert_eq!(result[2], (Token::Number, "3.14".into()));
        assert_eq!(result[3], (Token::Number, "0".into()));
    }

    #[test]
    fn test_dimensions() {
        let result = tokens_with_text("12px 50% 100vw 80vh");
        assert_eq!(result[0], (Token::Dimension, "12px".into()));
        assert_eq!(result[1], (Token::Dimension, "50%".into()));
        assert_eq!(result[2], (Token::Dimension, "100vw".into()));
        assert_eq!(result[3], (Token::Dimension, "80vh".into()));
    }

    #[test]
    fn test_negative_dimension() {
        let result = tokens_with_text("-10%");
        assert_eq!(result[0], (Token::Dimension, "-10%".into()));
    }

    #[test]
    fn test_hex_colors() {
        let result = tokens_with_text("#fff #ff00aa #ff00aa80");
        assert_eq!(result[0], (Token::HexColor, "#fff".into()));
        assert_eq!(result[1], (Token::HexColor, "#ff00aa".into()));
        assert_eq!(result[2], (Token::HexColor, "#ff00aa80".into()));
    }

    #[test]
    fn test_hash_id_selector() {
        // #play-btn: # is not followed by hex digits only, so falls through
        // to Hash + Ident
        let result = tokens("#play-btn");
        assert_eq!(result, vec![Token::Hash, Token::Ident]);
    }

    #[test]
    fn test_pseudo_classes() {
        let result = tokens_with_text(":hover :pressed :disabled");
        assert_eq!(result[0], (Token::PseudoClass, ":hover".into()));
        assert_eq!(result[1], (Token::PseudoClass, ":pressed".into()));
        assert_eq!(result[2], (Token::PseudoClass, ":disabled".into()));
    }

    #[test]
    fn test_var_ref_single_token() {
        let result = tokens_with_text("var(accent) var(spacing.md)");
        assert_eq!(result[0], (Token::VarRef, "var(accent)".into()));
        assert_eq!(result[1], (Token::VarRef, "var(spacing.md)".into()));
    }

    #[test]
    fn test_var_ident_without_parens_is_ident() {
        let result = tokens("var");
        assert_eq!(result, vec![Token::Ident]);
    }

    #[test]
    fn test_rgb_function_tokens() {
        let result = tokens("rgb(255, 0, 0)");
        assert_eq!(
            result,
            vec![
                Token::Ident,
                Token::ParenOpen,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_string_literals() {
        let result = tokens_with_text(r#""hud hud" 'lobby'"#);
        assert_eq!(result[0], (Token::StringLiteral, "\"hud hud\"".into()));
        assert_eq!(result[1], (Token::StringLiteralSingle, "'lobby'".into()));
    }

    #[test]
    fn test_dimension_over_number() {
        let result = tokens("12px");
        assert_eq!(result, vec![Token::Dimension]);
    }

    #[test]
    fn test_full_rule() {
        let input = "Button.primary:hover { background: #fff; opacity: 0.5; }";
        let result = tokens_with_text(input);

        assert_eq!(result[0], (Token::Ident, "Button".into()));
        assert_eq!(result[1], (Token::Dot, ".".into()));
        assert_eq!(result[2], (Token::Ident, "primary".into()));
        assert_eq!(result[3], (Token::PseudoClass, ":hover".into()));
        assert_eq!(result[4], (Token::BraceOpen, "{".into()));
        assert_eq!(result[5], (Token::Ident, "background".into()));
        assert_eq!(result[6], (Token::Colon, ":".into()));
        assert_eq!(result[7], (Token::HexColor, "#fff".into()));
        assert_eq!(result[8], (Token::Semicolon, ";".into()));
        assert_eq!(result[9], (Token::Ident, "opacity".into()));
        assert_eq!(result[10], (Token::Colon, ":".into()));
        assert_eq!(result[11], (Token::Number, "0.5".into()));
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let input = "  background  :  red  ;  ";
        let result = tokens(input);
        assert_eq!(result, vec![Token::Ident, Token::Colon, Token::Ident, Token::Semicolon]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \t\n  ").is_empty());
    }

    #[test]
    fn test_universal_selector() {
        let result = tokens("* { opacity: 1; }");
        assert_eq!(
            result,
            vec![
                Token::Star,
                Token::BraceOpen,
                Token::Ident,
                Token::Colon,
                Token::Number,
                Token::Semicolon,
                Token::BraceClose,
            ]
        );
    }
}
