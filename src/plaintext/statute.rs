//! Statute-layout state machine.
//!
//! The statute PDFs place marginal-note titles on the lines before a
//! section number. The machine runs two states (no-active-section,
//! in-section) plus a side buffer of marginal-note candidates that
//! accumulates until a section starts and becomes that section's title.
//! Marginal notes persist across blank lines, since titles can wrap.

use crate::text::collapse_whitespace;
use crate::types::{ActIdentity, Provision};

use super::{
    is_chapter_line, is_footnote_text, is_page_number, is_title_noise, is_toc_artifact,
    match_section_alone, match_section_inline, MastheadFilter, OpenSection,
};

/// Recover provisions from statute-layout plain text.
pub fn parse_statute(body: &str, identity: &ActIdentity) -> Vec<Provision> {
    let masthead = MastheadFilter::new(identity);
    let mut provisions: Vec<Provision> = Vec::new();
    let mut chapter: Option<String> = None;
    let mut marginal: Vec<String> = Vec::new();
    let mut open: Option<OpenSection> = None;

    for raw_line in body.lines() {
        let line = raw_line.trim();

        // Blank line: no state change, marginal notes persist.
        if line.is_empty() {
            continue;
        }

        // Chapter heading: update scope, drop pending marginal notes.
        if is_chapter_line(line) {
            chapter = Some(collapse_whitespace(line));
            marginal.clear();
            continue;
        }

        // Bare section label: previous section ends here.
        if let Some(label) = match_section_alone(line) {
            finalize_into(&mut provisions, open.take());
            let title = drain_title(&mut marginal, &masthead);
            open = Some(OpenSection::new(label, chapter.clone(), title));
            continue;
        }

        // Label with trailing text, unless the text is a gazette footnote.
        if let Some((label, rest)) = match_section_inline(line) {
            if !is_footnote_text(&rest) {
                finalize_into(&mut provisions, open.take());
                let title = drain_title(&mut marginal, &masthead);
                let mut section = OpenSection::new(label, chapter.clone(), title);
                section.push_content(line);
                open = Some(section);
                continue;
            }
        }

        // Ordinary content line.
        match open.as_mut() {
            Some(section) => {
                if is_page_number(line) || masthead.is_masthead(line) {
                    continue;
                }
                section.push_content(line);
            }
            None => {
                if is_toc_artifact(line) || masthead.is_masthead(line) {
                    marginal.clear();
                } else {
                    marginal.push(collapse_whitespace(line));
                }
            }
        }
    }

    finalize_into(&mut provisions, open.take());
    provisions
}

fn finalize_into(provisions: &mut Vec<Provision>, open: Option<OpenSection>) {
    if let Some(provision) = open.and_then(OpenSection::finalize) {
        provisions.push(provision);
    }
}

/// Filter the marginal buffer of noise and join the rest as a title.
fn drain_title(marginal: &mut Vec<String>, masthead: &MastheadFilter) -> String {
    let title = marginal
        .iter()
        .filter(|line| !is_title_noise(line, masthead))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    marginal.clear();
    title
}
