//! Definition extraction from definitional provisions.
//!
//! Legislative definition blocks enumerate quoted terms in the shape
//! `"term" — definition text;`. The mirror pages and PDF extractions are
//! inconsistent about quote and dash characters, so several variants are
//! tried in sequence over each content block. All matches across all tried
//! patterns are collected; term/definition length invariants are applied
//! here, while first-wins dedup happens in the act-level accumulator
//! ([`crate::types::ParsedAct::add_definition`]).

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{MAX_TERM_CHARS, MIN_DEFINITION_CHARS};
use crate::text::collapse_whitespace;
use crate::types::Definition;

/// Quote-variant patterns, tried in sequence per content block.
///
/// Negated character classes keep every pattern linear on multi-megabyte
/// inputs; the definition body runs to the terminating semicolon.
#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
static DEFINITION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#""([^"]+)"\s*[-–—]\s*([^;]+);"#).expect("valid regex"),
        Regex::new(r"“([^”]+)”\s*[-–—]\s*([^;]+);").expect("valid regex"),
        Regex::new(r"‘([^’]+)’\s*[-–—]\s*([^;]+);").expect("valid regex"),
    ]
});

/// Extract quoted-term definitions from one provision's content.
///
/// # Arguments
/// * `content` - Normalized content of a designated definitional provision
/// * `source_provision` - Section label recorded as the back-reference
///
/// # Returns
/// Definitions satisfying the term/definition length invariants, in match
/// order per pattern. Duplicate terms are not removed here.
pub fn extract_definitions(content: &str, source_provision: &str) -> Vec<Definition> {
    let mut definitions = Vec::new();

    for pattern in DEFINITION_PATTERNS.iter() {
        for caps in pattern.captures_iter(content) {
            let (Some(term), Some(body)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let term = collapse_whitespace(term.as_str());
            let definition = collapse_whitespace(body.as_str());

            let term_len = term.chars().count();
            if term_len == 0 || term_len > MAX_TERM_CHARS {
                tracing::debug!(provision = source_provision, "Skipping out-of-bounds term");
                continue;
            }
            if definition.chars().count() <= MIN_DEFINITION_CHARS {
                tracing::debug!(term = %term, "Skipping too-short definition");
                continue;
            }

            definitions.push(Definition {
                term,
                definition,
                source_provision: Some(source_provision.to_string()),
            });
        }
    }

    definitions
}
