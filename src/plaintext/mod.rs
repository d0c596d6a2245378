//! Plain-text structural recovery.
//!
//! The plain-text sources are recovered from PDFs by an external extraction
//! tool and carry no markup at all; structure is implied only by line
//! layout. Two related conventions exist: the statute layout, where
//! marginal-note titles accumulate on the lines before a section number,
//! and the basic-law layout, where the title sits within a few lines above
//! the number and is found by bounded look-back.

mod basic_law;
mod statute;

pub use basic_law::parse_basic_law;
pub use statute::parse_statute;

use regex::Regex;
use std::sync::LazyLock;

use crate::config::MIN_CONTENT_CHARS;
use crate::text::{collapse_whitespace, truncate_content};
use crate::types::{ActIdentity, Provision};

/// Chapter heading line: `Chapter <Word>: <text>`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^chapter\s+\w+\s*:\s*\S").expect("valid regex"));

/// Section label alone on its line: `17C.` and nothing else.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_ALONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,4}[A-Za-z]{0,2})\.$").expect("valid regex"));

/// Section label with trailing text on the same line: `2. Inline text`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,4}[A-Za-z]{0,2})\.\s+(\S.*)$").expect("valid regex"));

/// Bare page number line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}$").expect("valid regex"));

/// Table-of-contents artifact: dotted leaders or a contents caption.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TOC_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.{3,}|^(table of )?contents$").expect("valid regex"));

/// Footnote marker phrases. An inline-section candidate whose trailing text
/// begins with one of these is a gazette footnote, not a section.
const FOOTNOTE_PHRASES: &[&str] = &["published in"];

pub(crate) fn is_chapter_line(line: &str) -> bool {
    CHAPTER_LINE.is_match(line)
}

pub(crate) fn match_section_alone(line: &str) -> Option<String> {
    SECTION_ALONE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub(crate) fn match_section_inline(line: &str) -> Option<(String, String)> {
    let caps = SECTION_INLINE.captures(line)?;
    let label = caps.get(1)?.as_str().to_string();
    let rest = caps.get(2)?.as_str().to_string();
    Some((label, rest))
}

pub(crate) fn is_page_number(line: &str) -> bool {
    PAGE_NUMBER.is_match(line)
}

pub(crate) fn is_toc_artifact(line: &str) -> bool {
    TOC_ARTIFACT.is_match(line)
}

pub(crate) fn is_footnote_line(line: &str) -> bool {
    line.starts_with('*')
}

/// Whether inline trailing text is footnote apparatus rather than content.
pub(crate) fn is_footnote_text(rest: &str) -> bool {
    let lowered = rest.to_lowercase();
    FOOTNOTE_PHRASES
        .iter()
        .any(|phrase| lowered.starts_with(phrase))
}

/// Matches running-header repeats of the act's own title or short name.
pub(crate) struct MastheadFilter {
    needles: Vec<String>,
}

impl MastheadFilter {
    pub(crate) fn new(identity: &ActIdentity) -> Self {
        let needles = [&identity.title, &identity.title_en, &identity.short_name]
            .into_iter()
            .map(|s| collapse_whitespace(s).to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { needles }
    }

    /// A line repeating the act title, alone or with page furniture.
    pub(crate) fn is_masthead(&self, line: &str) -> bool {
        let line = collapse_whitespace(line).to_lowercase();
        self.needles.iter().any(|needle| {
            line == *needle
                || (line.starts_with(needle.as_str())
                    && line[needle.len()..].chars().all(|c| !c.is_alphabetic()))
        })
    }
}

/// A line that must not survive into a section title.
pub(crate) fn is_title_noise(line: &str, masthead: &MastheadFilter) -> bool {
    is_chapter_line(line)
        || is_page_number(line)
        || is_toc_artifact(line)
        || is_footnote_line(line)
        || masthead.is_masthead(line)
}

/// An in-progress section accumulator.
pub(crate) struct OpenSection {
    section: String,
    chapter: Option<String>,
    title: String,
    parts: Vec<String>,
}

impl OpenSection {
    pub(crate) fn new(section: String, chapter: Option<String>, title: String) -> Self {
        Self {
            section,
            chapter,
            title,
            parts: Vec::new(),
        }
    }

    pub(crate) fn push_content(&mut self, line: &str) {
        self.parts.push(collapse_whitespace(line));
    }

    /// Close the accumulator, applying the content threshold and cap.
    ///
    /// Returns `None` when the normalized content is too short to be a real
    /// provision (stray digits, page artifacts).
    pub(crate) fn finalize(self) -> Option<Provision> {
        let content = truncate_content(self.parts.join(" "));
        if content.chars().count() <= MIN_CONTENT_CHARS {
            tracing::debug!(section = %self.section, "Dropping short section match");
            return None;
        }
        Some(Provision::new(self.section, self.title, content).with_chapter(self.chapter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LifecycleStatus;

    fn identity() -> ActIdentity {
        ActIdentity {
            id: "penal-law".to_string(),
            title: "חוק העונשין".to_string(),
            title_en: "Penal Law".to_string(),
            short_name: "Penal Law".to_string(),
            year: 1977,
            status: LifecycleStatus::Amended,
            issuance_date: None,
            effective_date: None,
            source_url: "https://example.org/laws/penal".to_string(),
        }
    }

    #[test]
    fn test_chapter_line() {
        assert!(is_chapter_line("Chapter One: General Provisions"));
        assert!(is_chapter_line("CHAPTER B: Offences"));
        assert!(!is_chapter_line("Chapter without colon"));
        assert!(!is_chapter_line("1. Not a chapter"));
    }

    #[test]
    fn test_section_alone() {
        assert_eq!(match_section_alone("1."), Some("1".to_string()));
        assert_eq!(match_section_alone("17C."), Some("17C".to_string()));
        assert_eq!(match_section_alone("270A."), Some("270A".to_string()));
        assert_eq!(match_section_alone("1. text"), None);
        assert_eq!(match_section_alone("1"), None);
    }

    #[test]
    fn test_section_inline() {
        let (label, rest) = match_section_inline("2. Inline body text").unwrap();
        assert_eq!(label, "2");
        assert_eq!(rest, "Inline body text");

        assert!(match_section_inline("2.").is_none());
        assert!(match_section_inline("No label here").is_none());
    }

    #[test]
    fn test_page_number() {
        assert!(is_page_number("7"));
        assert!(is_page_number("1234"));
        assert!(!is_page_number("12345"));
        assert!(!is_page_number("7a"));
    }

    #[test]
    fn test_toc_artifact() {
        assert!(is_toc_artifact("Definitions..........4"));
        assert!(is_toc_artifact("Contents"));
        assert!(is_toc_artifact("Table of Contents"));
        assert!(!is_toc_artifact("Ordinary sentence."));
    }

    #[test]
    fn test_footnote_text() {
        assert!(is_footnote_text("Published in the Official Gazette, p. 128"));
        assert!(is_footnote_text("published in Reshumot"));
        assert!(!is_footnote_text("A person who infringes privacy"));
    }

    #[test]
    fn test_masthead_filter() {
        let filter = MastheadFilter::new(&identity());
        assert!(filter.is_masthead("Penal Law"));
        assert!(filter.is_masthead("PENAL LAW  12"));
        assert!(filter.is_masthead("חוק העונשין"));
        assert!(!filter.is_masthead("Penal Law amendments are pending"));
        assert!(!filter.is_masthead("Some other line"));
    }

    #[test]
    fn test_open_section_threshold() {
        let mut open = OpenSection::new("1".to_string(), None, String::new());
        open.push_content("tiny");
        assert!(open.finalize().is_none());

        let mut open = OpenSection::new("1".to_string(), None, String::new());
        open.push_content("exactly 11c");
        let provision = open.finalize().unwrap();
        assert_eq!(provision.content, "exactly 11c");
    }

    #[test]
    fn test_open_section_cap() {
        let mut open = OpenSection::new("1".to_string(), None, String::new());
        open.push_content(&"x".repeat(9000));
        let provision = open.finalize().unwrap();
        assert_eq!(provision.content.chars().count(), 8000);
    }
}
