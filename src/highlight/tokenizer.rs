//! Regex tokenizer for JSON text
//!
//! One combined pattern recognizes, in priority order:
//!
//! 1. A double-quoted string (including `\uXXXX` escapes and other backslash
//!    escapes), optionally followed by whitespace and a colon. The trailing
//!    colon form is an object key.
//! 2. The whole words `true`, `false`, `null`.
//! 3. A signed integer or decimal number, optional exponent.
//!
//! This is tokenization only, not parsing: the scan recognizes whatever
//! tokens it can and ignores the rest, so partial or malformed JSON still
//! yields tokens. Swapping in a real JSON parser would change behavior on
//! malformed input and is out of scope.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Lazy-compiled combined token pattern.
///
/// Alternation order matters: strings before literals before numbers, so a
/// quoted `"true"` is a string token, not a boolean.
pub(crate) static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"("(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+\-]?\d+)?)"#)
        .unwrap()
});

/// Classification of a recognized JSON token
///
/// The serialized / CSS form of each kind is its lowercase name; the styling
/// layer depends on these literal class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A quoted string followed by a colon (an object key)
    Key,
    /// A quoted string value
    String,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
    /// An integer, decimal, or exponential number
    Number,
}

impl TokenKind {
    /// The CSS class name for this kind
    pub fn as_class(&self) -> &'static str {
        match self {
            TokenKind::Key => "key",
            TokenKind::String => "string",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::Number => "number",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_class())
    }
}

/// A recognized token: its classification and the matched text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Classify a matched substring.
///
/// A match starting with `"` is a key when it ends with `:` (any whitespace
/// before the colon is part of the match), otherwise a string. The literal
/// words map to their kinds; everything else the pattern can produce is
/// numeric.
pub(crate) fn classify(matched: &str) -> TokenKind {
    if matched.starts_with('"') {
        if matched.ends_with(':') {
            TokenKind::Key
        } else {
            TokenKind::String
        }
    } else if matched == "true" || matched == "false" {
        TokenKind::Boolean
    } else if matched == "null" {
        TokenKind::Null
    } else {
        TokenKind::Number
    }
}

/// Scan text and return every recognized token in order.
///
/// Operates on the raw text (no HTML escaping); used for token dumps and
/// diagnostics rather than rendering.
pub fn tokens(text: &str) -> Vec<Token> {
    TOKEN_REGEX
        .find_iter(text)
        .map(|m| Token {
            kind: classify(m.as_str()),
            text: m.as_str().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_key_with_spaced_colon() {
        assert_eq!(classify("\"name\" :"), TokenKind::Key);
    }

    #[test]
    fn quoted_literal_is_a_string_not_a_boolean() {
        let toks = tokens("\"true\"");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::String);
    }

    #[test]
    fn keyword_inside_identifier_is_not_a_token() {
        // \b keeps "nullable" from matching as null
        assert!(tokens("nullable").is_empty());
    }

    #[test]
    fn scans_tokens_in_document_order() {
        let toks = tokens("{\"a\": [1, true, null]}");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Key,
                TokenKind::Number,
                TokenKind::Boolean,
                TokenKind::Null
            ]
        );
    }

    #[test]
    fn unicode_escape_stays_inside_the_string_token() {
        let toks = tokens("\"sn\\u00f6\"");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].text, "\"sn\\u00f6\"");
    }

    #[test]
    fn exponential_number_is_one_token() {
        let toks = tokens("-3.5e10");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Number);
        assert_eq!(toks[0].text, "-3.5e10");
    }
}
