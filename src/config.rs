//! Configuration constants and validation functions for the parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ParserError, Result};

/// Hard cap on provision content, counted in characters.
///
/// Oversized content is truncated silently; the source convention counts
/// characters, not bytes, so the cap never splits a UTF-8 sequence.
pub const MAX_CONTENT_CHARS: usize = 8000;

/// Minimum provision content length, in characters.
///
/// A provision whose normalized content is this long or shorter is treated
/// as a false positive (stray digits, page artifacts) and discarded.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Maximum length of a defined term, in characters.
pub const MAX_TERM_CHARS: usize = 80;

/// Minimum length of a definition body, in characters.
///
/// Definitions this long or shorter are discarded.
pub const MIN_DEFINITION_CHARS: usize = 5;

/// Maximum number of preceding lines examined for a section title by the
/// basic-law plain-text variant.
pub const TITLE_LOOKBACK_LINES: usize = 4;

/// Act id served by the dedicated privacy-law HTML strategy.
pub const PRIVACY_ACT_ID: &str = "protection-of-privacy-law";

/// Act id prefix routed to the basic-law plain-text variant.
pub const BASIC_LAW_PREFIX: &str = "basic-law";

/// Act id pattern: lowercase kebab-case slug.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ACT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate act id format.
///
/// # Arguments
/// * `act_id` - The act identifier to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ParserError::InvalidActId)` if invalid
///
/// # Examples
/// ```
/// use lexmirror_parser::config::validate_act_id;
///
/// assert!(validate_act_id("protection-of-privacy-law").is_ok());
/// assert!(validate_act_id("Not A Slug").is_err());
/// ```
pub fn validate_act_id(act_id: &str) -> Result<()> {
    if ACT_ID_PATTERN.is_match(act_id) {
        Ok(())
    } else {
        Err(ParserError::InvalidActId(act_id.to_string()))
    }
}

/// Validate date format (YYYY-MM-DD).
///
/// # Arguments
/// * `date_str` - Date string to validate
///
/// # Returns
/// * `Ok(())` if the format is valid and the date is a real calendar date
/// * `Err(ParserError::InvalidDate)` if invalid
///
/// # Examples
/// ```
/// use lexmirror_parser::config::validate_date;
///
/// assert!(validate_date("1981-04-11").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("1981-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(ParserError::InvalidDate(date_str.to_string()));
    }

    // Parse and validate it's a real date
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ParserError::InvalidDate(date_str.to_string()))?;

    Ok(())
}

/// Sanitize a URL fragment identifier by removing problematic characters.
///
/// # Examples
/// ```
/// use lexmirror_parser::config::sanitize_fragment;
///
/// assert_eq!(sanitize_fragment("17C"), "17C");
/// assert_eq!(sanitize_fragment("270A"), "270A");
/// assert_eq!(sanitize_fragment("1<script>"), "1script");
/// ```
pub fn sanitize_fragment(fragment: &str) -> String {
    fragment
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_' || *c == '.' || *c == '~')
        .collect()
}

/// Build a source URL anchored at a specific section.
///
/// # Arguments
/// * `base_url` - The act's source URL (without fragment)
/// * `section` - Section label (e.g., "17C")
///
/// # Returns
/// `<base_url>#sec<section>` with the fragment sanitized
pub fn section_url(base_url: &str, section: &str) -> String {
    format!(
        "{base_url}#sec{}",
        sanitize_fragment(&section.replace(' ', "_"))
    )
}
