//! JSON-to-HTML syntax highlighting
//!
//! [`highlight_json`] turns serialized JSON text into an HTML-safe string in
//! which every recognized token is wrapped in a `<span>` carrying one of five
//! class names: `key`, `string`, `boolean`, `null`, `number`. Whitespace,
//! braces, brackets and commas pass through untouched, so the output renders
//! exactly like the input once styled.
//!
//! Behavioral notes:
//!
//! - Best-effort, never failing: malformed JSON is not rejected, whatever
//!   tokens the scan recognizes get wrapped and the rest passes through.
//! - Escaping happens before tokenization, so markup inside string values
//!   (`"<b>"`) is escaped inside the span.
//! - Not idempotent: applying the highlighter to its own output re-escapes
//!   the inserted span markup. No caller double-applies it; this is
//!   documented behavior, not something to fix by reordering the escapes.

pub mod tokenizer;

pub use tokenizer::{tokens, Token, TokenKind};

use tokenizer::{classify, TOKEN_REGEX};

/// Escape the three HTML-significant characters.
///
/// Order is fixed: `&` first, so the entities introduced for `<` and `>` are
/// not themselves re-escaped.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Highlight serialized JSON text as an HTML fragment.
///
/// The caller is responsible for injecting the result into a trusted document
/// context where the token class names resolve to styles (see
/// [`crate::templates`] for the bundled stylesheet).
pub fn highlight_json(json: &str) -> String {
    let escaped = escape_html(json);
    TOKEN_REGEX
        .replace_all(&escaped, |caps: &regex::Captures| {
            let matched = &caps[0];
            format!(
                "<span class=\"{}\">{}</span>",
                classify(matched).as_class(),
                matched
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_ampersand_before_angle_brackets() {
        assert_eq!(escape_html("&<>"), "&amp;&lt;&gt;");
        // already-escaped input is escaped again, by design of the fixed order
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn wraps_key_and_number() {
        assert_eq!(
            highlight_json("{\"a\":1}"),
            "{<span class=\"key\">\"a\":</span><span class=\"number\">1</span>}"
        );
    }

    #[test]
    fn escapes_markup_inside_string_values() {
        assert_eq!(
            highlight_json("\"<b>\""),
            "<span class=\"string\">\"&lt;b&gt;\"</span>"
        );
    }

    #[test]
    fn leaves_structural_characters_untouched() {
        assert_eq!(highlight_json("[ , ]"), "[ , ]");
    }

    #[test]
    fn highlights_tokens_in_malformed_json() {
        // not valid JSON, but the number and literal still get wrapped
        let out = highlight_json("{1 true");
        assert_eq!(
            out,
            "{<span class=\"number\">1</span> <span class=\"boolean\">true</span>"
        );
    }
}
