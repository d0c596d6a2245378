//! HTML structural parser.
//!
//! The mirror pages mark both chapter headings and section headings with a
//! bold-emphasis wrapper; section headings additionally carry a numeric
//! label followed by a period and a title, e.g. `<B>12. Title</B>`. The
//! pages are not well-formed XML, so structure is recovered by scanning for
//! heading matches and slicing the body between their offsets. Matches are
//! resolved purely by source offset, never by tag nesting.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::MIN_CONTENT_CHARS;
use crate::text::{collapse_whitespace, strip_markup, truncate_content};
use crate::types::Provision;

/// Bold-wrapped chapter heading, e.g. `<B>CHAPTER A: General</B>`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:b|strong)\b[^>]*>\s*(chapter\s+\w+\s*:[^<]*)</\s*(?:b|strong)\s*>")
        .expect("valid regex")
});

/// Bold-wrapped article heading, e.g. `<B>Article 4: The Government</B>`.
///
/// A second heading convention used by the basic-law mirror pages; merged
/// into the chapter list by offset.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:b|strong)\b[^>]*>\s*(article\s+\w+\s*:[^<]*)</\s*(?:b|strong)\s*>")
        .expect("valid regex")
});

/// Bold-wrapped section heading: numeric label, period, title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:b|strong)\b[^>]*>\s*(\d{1,4}[a-z]{0,2})\.\s*([^<]*)</\s*(?:b|strong)\s*>")
        .expect("valid regex")
});

/// Separator line introducing the trailing footnotes block on the privacy
/// mirror page.
const FOOTNOTES_SEPARATOR: &str = "* * *";

/// A chapter heading with its source offset.
#[derive(Debug)]
struct ChapterMatch {
    offset: usize,
    label: String,
}

/// A section heading with its source offset.
#[derive(Debug)]
struct SectionMatch {
    offset: usize,
    section: String,
    title: String,
}

/// Scan for chapter headings under both conventions, merged by offset.
fn scan_chapters(body: &str) -> Vec<ChapterMatch> {
    let mut chapters: Vec<ChapterMatch> = CHAPTER_HEADING
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = collapse_whitespace(caps.get(1)?.as_str());
            Some(ChapterMatch {
                offset: whole.start(),
                label,
            })
        })
        .collect();

    for caps in ARTICLE_HEADING.captures_iter(body) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        chapters.push(ChapterMatch {
            offset: whole.start(),
            label: collapse_whitespace(inner.as_str()),
        });
    }

    chapters.sort_by_key(|c| c.offset);
    chapters
}

/// Scan for section headings in source order.
fn scan_sections(body: &str) -> Vec<SectionMatch> {
    SECTION_HEADING
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(SectionMatch {
                offset: whole.start(),
                section: caps.get(1)?.as_str().to_string(),
                title: collapse_whitespace(caps.get(2)?.as_str()),
            })
        })
        .collect()
}

/// Attribute each section to the nearest chapter heading strictly before it.
///
/// Both inputs are offset-sorted, so a single merge suffices; sections
/// before any chapter heading get `None`.
fn attribute_chapters(chapters: &[ChapterMatch], sections: &[SectionMatch]) -> Vec<Option<String>> {
    let mut current: Option<&ChapterMatch> = None;
    let mut next_chapter = 0;
    let mut scopes = Vec::with_capacity(sections.len());

    for section in sections {
        while next_chapter < chapters.len() && chapters[next_chapter].offset < section.offset {
            current = Some(&chapters[next_chapter]);
            next_chapter += 1;
        }
        scopes.push(current.map(|c| c.label.clone()));
    }

    scopes
}

/// Recover provisions from an HTML body using the bold-heading convention.
///
/// A section's content span runs from its own heading offset to the next
/// section's heading offset (end of body for the last section). Spans whose
/// normalized content is too short are discarded as false positives.
pub fn parse_generic(body: &str) -> Vec<Provision> {
    let chapters = scan_chapters(body);
    let sections = scan_sections(body);
    let scopes = attribute_chapters(&chapters, &sections);

    let mut provisions = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        let end = sections
            .get(i + 1)
            .map_or(body.len(), |next| next.offset);
        let content = truncate_content(strip_markup(&body[section.offset..end]));

        if content.chars().count() <= MIN_CONTENT_CHARS {
            tracing::debug!(section = %section.section, "Dropping short section match");
            continue;
        }

        provisions.push(
            Provision::new(&section.section, &section.title, content)
                .with_chapter(scopes[i].clone()),
        );
    }

    provisions
}

/// Privacy-law variant: trim the mirror page to the act body, then apply
/// the generic algorithm.
///
/// The scan region starts at the first bold heading of any kind and ends
/// before the trailing footnotes block when its separator is present.
pub fn parse_privacy(body: &str) -> Vec<Provision> {
    parse_generic(trim_act_body(body))
}

/// Cut site chrome and the trailing footnotes block from the mirror page.
fn trim_act_body(body: &str) -> &str {
    let start = [&CHAPTER_HEADING, &ARTICLE_HEADING, &SECTION_HEADING]
        .iter()
        .filter_map(|pattern| pattern.find(body).map(|m| m.start()))
        .min()
        .unwrap_or(0);
    let end = body
        .rfind(FOOTNOTES_SEPARATOR)
        .filter(|&end| end > start)
        .unwrap_or(body.len());
    &body[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_sections_under_one_chapter() {
        let body = "<B>CHAPTER A: Intro</B> preamble text \
                    <B>1. First</B> some content exceeding ten chars \
                    <B>2. Second</B> more content exceeding ten chars";
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 2);
        assert_eq!(provisions[0].section, "1");
        assert_eq!(provisions[1].section, "2");
        assert_eq!(provisions[0].chapter.as_deref(), Some("CHAPTER A: Intro"));
        assert_eq!(provisions[1].chapter.as_deref(), Some("CHAPTER A: Intro"));
        assert_eq!(provisions[0].title, "First");
        assert!(provisions[0].content.contains("some content"));
    }

    #[test]
    fn test_section_before_any_chapter_has_no_scope() {
        let body = "<B>1. Preliminary</B> content long enough to keep \
                    <B>CHAPTER A: Substance</B> \
                    <B>2. Operative</B> more content long enough to keep";
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 2);
        assert_eq!(provisions[0].chapter, None);
        assert_eq!(provisions[1].chapter.as_deref(), Some("CHAPTER A: Substance"));
    }

    #[test]
    fn test_article_headings_merge_into_chapter_list() {
        let body = "<B>Article 4: The Government</B> \
                    <B>1. First</B> content which is long enough to keep";
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 1);
        assert_eq!(
            provisions[0].chapter.as_deref(),
            Some("Article 4: The Government")
        );
    }

    #[test]
    fn test_short_section_is_dropped() {
        let body = "<B>1. a</B> b <B>2. Kept</B> content long enough to keep";
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 1);
        assert_eq!(provisions[0].section, "2");
    }

    #[test]
    fn test_letter_suffixed_labels() {
        let body = "<B>17C. Direct mailing</B> content long enough to keep \
                    <B>270A. Aggravated offence</B> further content long enough";
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 2);
        assert_eq!(provisions[0].section, "17C");
        assert_eq!(provisions[1].section, "270A");
    }

    #[test]
    fn test_wrapper_attributes_and_strong_tags() {
        let body = r#"<strong class="hd">CHAPTER B: Powers</strong>
                      <b id="s3">3. Scope</b> content long enough to keep"#;
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 1);
        assert_eq!(provisions[0].chapter.as_deref(), Some("CHAPTER B: Powers"));
    }

    #[test]
    fn test_content_span_ends_at_next_section() {
        let body = "<B>1. First</B> first body only here \
                    <B>2. Second</B> second body only here";
        let provisions = parse_generic(body);

        assert!(provisions[0].content.contains("first body"));
        assert!(!provisions[0].content.contains("second body"));
    }

    #[test]
    fn test_last_section_runs_to_end_of_body() {
        let body = "<B>9. Final</B> trailing content runs to the end";
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 1);
        assert!(provisions[0].content.contains("to the end"));
    }

    #[test]
    fn test_privacy_trims_footnotes_block() {
        let body = "site chrome navigation \
                    <B>1. Definitions</B> real section content here \
                    * * * <B>5. Phantom</B> footnote apparatus long enough";
        let provisions = parse_privacy(body);

        assert_eq!(provisions.len(), 1);
        assert_eq!(provisions[0].section, "1");
    }

    #[test]
    fn test_privacy_without_markers_uses_full_body() {
        let body = "<B>1. Only</B> content long enough to keep here";
        let provisions = parse_privacy(body);

        assert_eq!(provisions.len(), 1);
    }

    #[test]
    fn test_no_structure_yields_empty() {
        let provisions = parse_generic("<p>No bold headings anywhere in this page.</p>");
        assert!(provisions.is_empty());
    }

    #[test]
    fn test_out_of_order_headings_resolved_by_offset() {
        // A chapter heading between two sections scopes only the later one,
        // regardless of how the page nests its markup.
        let body = "<B>2. Early</B> early content long enough to keep \
                    <B>CHAPTER C: Late</B> \
                    <B>1. Later</B> later content long enough to keep";
        let provisions = parse_generic(body);

        assert_eq!(provisions.len(), 2);
        assert_eq!(provisions[0].section, "2");
        assert_eq!(provisions[0].chapter, None);
        assert_eq!(provisions[1].section, "1");
        assert_eq!(provisions[1].chapter.as_deref(), Some("CHAPTER C: Late"));
    }
}
