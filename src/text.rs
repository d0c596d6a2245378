//! Text normalization utilities.
//!
//! Every structural strategy funnels its raw spans through these functions,
//! so the rest of the crate only ever sees canonical single-spaced text.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::config::MAX_CONTENT_CHARS;

/// Regex for markup tags. Bounded by the closing bracket, so it cannot
/// backtrack on large inputs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Regex for whitespace runs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Decode the common HTML entities found on the mirror pages.
///
/// `&amp;` is decoded last so double-encoded entities stay literal text.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Strip markup and normalize whitespace.
///
/// Removes all tags, decodes the common HTML entities, collapses whitespace
/// runs to single spaces and trims. Pure and total: any input produces a
/// normalized string.
///
/// # Examples
/// ```
/// use lexmirror_parser::text::strip_markup;
///
/// assert_eq!(
///     strip_markup("<p>Some&nbsp;  legal <b>text</b></p>"),
///     "Some legal text"
/// );
/// ```
#[must_use]
pub fn strip_markup(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = TAG_PATTERN.replace_all(&text, " ");
    let text = decode_entities(&text);
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

/// Collapse whitespace only, for already-tagless text.
///
/// PDF extraction emits decomposed Unicode forms, so the text is
/// NFC-normalized before collapsing.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let text: String = text.nfc().collect();
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

/// Truncate content to [`MAX_CONTENT_CHARS`] characters.
///
/// Counted in characters, never splitting a UTF-8 sequence. Truncation is
/// silent and total; oversized content is not an error.
#[must_use]
pub fn truncate_content(text: String) -> String {
    match text.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text,
    }
}
