//! Basic-law-layout state machine.
//!
//! Basic-law PDFs place a section's title on the line or two directly above
//! its number rather than in a forward-accumulating marginal column. The
//! machine therefore keeps a history of physical lines and, when a section
//! starts, collects its title by bounded look-back: at most
//! [`TITLE_LOOKBACK_LINES`](crate::config::TITLE_LOOKBACK_LINES) preceding
//! lines, stopping at the first blank line once any title text has been
//! collected. Finalize, content-threshold and cap rules match the statute
//! variant.

use crate::config::TITLE_LOOKBACK_LINES;
use crate::text::collapse_whitespace;
use crate::types::{ActIdentity, Provision};

use super::{
    is_chapter_line, is_footnote_text, is_page_number, is_title_noise, match_section_alone,
    match_section_inline, MastheadFilter, OpenSection,
};

/// Recover provisions from basic-law-layout plain text.
pub fn parse_basic_law(body: &str, identity: &ActIdentity) -> Vec<Provision> {
    let masthead = MastheadFilter::new(identity);
    let mut provisions: Vec<Provision> = Vec::new();
    let mut chapter: Option<String> = None;
    let mut history: Vec<String> = Vec::new();
    let mut open: Option<OpenSection> = None;

    for raw_line in body.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            history.push(String::new());
            continue;
        }

        if is_chapter_line(line) {
            chapter = Some(collapse_whitespace(line));
            history.push(line.to_string());
            continue;
        }

        if let Some(label) = match_section_alone(line) {
            finalize_into(&mut provisions, open.take());
            let title = look_back_title(&history, &masthead);
            open = Some(OpenSection::new(label, chapter.clone(), title));
            history.push(line.to_string());
            continue;
        }

        if let Some((label, rest)) = match_section_inline(line) {
            if !is_footnote_text(&rest) {
                finalize_into(&mut provisions, open.take());
                let title = look_back_title(&history, &masthead);
                let mut section = OpenSection::new(label, chapter.clone(), title);
                section.push_content(line);
                open = Some(section);
                history.push(line.to_string());
                continue;
            }
        }

        if let Some(section) = open.as_mut() {
            if !is_page_number(line) && !masthead.is_masthead(line) {
                section.push_content(line);
            }
        }
        history.push(line.to_string());
    }

    finalize_into(&mut provisions, open.take());
    provisions
}

fn finalize_into(provisions: &mut Vec<Provision>, open: Option<OpenSection>) {
    if let Some(provision) = open.and_then(OpenSection::finalize) {
        provisions.push(provision);
    }
}

/// Collect a title from the lines directly above a section boundary.
///
/// Walks backwards over at most [`TITLE_LOOKBACK_LINES`] physical lines,
/// skipping noise; once any title text has been collected, the first blank
/// line ends the walk. A line that is itself a section boundary also ends
/// the walk: past it lies the previous section, not a title. Collected
/// lines are rejoined in reading order.
fn look_back_title(history: &[String], masthead: &MastheadFilter) -> String {
    let mut collected: Vec<&str> = Vec::new();

    for line in history.iter().rev().take(TITLE_LOOKBACK_LINES) {
        if line.is_empty() {
            if collected.is_empty() {
                continue;
            }
            break;
        }
        if match_section_alone(line).is_some() || match_section_inline(line).is_some() {
            break;
        }
        if is_title_noise(line, masthead) {
            continue;
        }
        collected.push(line);
    }

    collected.reverse();
    collected.join(" ")
}
