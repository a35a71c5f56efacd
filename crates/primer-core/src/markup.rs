//! Handling of the inline markup embedded in topic explanations.
//!
//! Explanations are trusted static content written with a small subset of
//! HTML. Nothing here parses markup: tags are removed with the pattern
//! `<[^>]*>`, which is approximate on purpose. A `>` inside an attribute value
//! ends the tag early and the remainder of the attribute leaks into the text;
//! an unterminated `<` is left as-is.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn block_tag_pattern() -> &'static Regex {
    static BLOCK: OnceLock<Regex> = OnceLock::new();
    BLOCK.get_or_init(|| {
        Regex::new(r"(?i)<\s*(/?)\s*(p|div|h[1-6]|ul|ol|li|br|pre)\b[^>]*>")
            .expect("block tag pattern is valid")
    })
}

/// Remove every `<...>` span from `markup`.
///
/// This is the text the search filter matches explanations against. Entities
/// such as `&lt;` are left encoded.
pub fn strip_markup(markup: &str) -> Cow<'_, str> {
    tag_pattern().replace_all(markup, "")
}

/// Convert explanation markup into display text.
///
/// Block-level tags become line breaks, list items get a bullet, the common
/// entities are decoded, and whitespace inside each line is collapsed. Blank
/// lines are dropped.
pub fn to_plain_text(markup: &str) -> String {
    let with_breaks = block_tag_pattern().replace_all(markup, |caps: &Captures| {
        let closing = !caps[1].is_empty();
        if !closing && caps[2].eq_ignore_ascii_case("li") {
            "\n\u{2022} "
        } else {
            "\n"
        }
    });

    let text = decode_entities(&strip_markup(&with_breaks));

    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode the handful of entities the catalog uses.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<p class=\"mb-4\">Hello <strong>world</strong></p>"),
            "Hello world"
        );
        assert_eq!(strip_markup("no tags here"), "no tags here");
    }

    #[test]
    fn test_strip_markup_borrows_when_unchanged() {
        assert!(matches!(strip_markup("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_markup_heuristic_edges() {
        // Unterminated tag is kept
        assert_eq!(strip_markup("a < b"), "a < b");
        // `>` inside an attribute closes the tag early
        assert_eq!(strip_markup("<a title=\"x>y\">link</a>"), "y\">link");
        // Entities are not decoded
        assert_eq!(strip_markup("<code>&lt;div&gt;</code>"), "&lt;div&gt;");
    }

    #[test]
    fn test_to_plain_text() {
        let markup = r#"
            <p class="mb-4">Welcome to <strong>React</strong>.</p>
            <h3>Why React?</h3>
            <ul>
              <li>Component-Based</li>
              <li>Use <code>&lt;&gt;...&lt;/&gt;</code> fragments</li>
            </ul>
        "#;
        let text = to_plain_text(markup);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Welcome to React.",
                "Why React?",
                "\u{2022} Component-Based",
                "\u{2022} Use <>...</> fragments",
            ]
        );
    }

    #[test]
    fn test_to_plain_text_ampersand_last() {
        assert_eq!(to_plain_text("&amp;lt;"), "&lt;");
    }
}
