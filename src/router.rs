//! Strategy selection by source format and document identity.
//!
//! Identity-keyed special cases are resolved exactly once, here, into an
//! enumerated strategy tag; downstream code dispatches on the tag and never
//! re-checks identity strings.

use serde::{Deserialize, Serialize};

use crate::config::{BASIC_LAW_PREFIX, PRIVACY_ACT_ID};
use crate::html;
use crate::plaintext;
use crate::types::{ActIdentity, Provision};

/// Declared format of the raw source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// HTML mirror page.
    Html,

    /// Plain text recovered from a PDF.
    Text,
}

impl SourceFormat {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
        }
    }
}

/// Resolved structural strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Privacy-law HTML strategy with act-specific body trimming.
    PrivacyHtml,

    /// Generic HTML fallback for documents without a dedicated strategy.
    GenericHtml,

    /// Statute-layout plain-text state machine.
    StatuteText,

    /// Basic-law-layout plain-text state machine.
    BasicLawText,
}

impl ParseStrategy {
    /// Get the strategy name for diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrivacyHtml => "privacy_html",
            Self::GenericHtml => "generic_html",
            Self::StatuteText => "statute_text",
            Self::BasicLawText => "basic_law_text",
        }
    }

    /// Section labels designated as definitional provisions under this
    /// strategy's source convention.
    #[must_use]
    pub fn definitional_sections(&self) -> &'static [&'static str] {
        match self {
            Self::PrivacyHtml => &["3", "7", "17C"],
            Self::GenericHtml | Self::StatuteText | Self::BasicLawText => &["1"],
        }
    }

    /// Run the strategy over a raw body.
    #[must_use]
    pub fn run(&self, body: &str, identity: &ActIdentity) -> Vec<Provision> {
        match self {
            Self::PrivacyHtml => html::parse_privacy(body),
            Self::GenericHtml => html::parse_generic(body),
            Self::StatuteText => plaintext::parse_statute(body, identity),
            Self::BasicLawText => plaintext::parse_basic_law(body, identity),
        }
    }
}

/// Select the structural strategy for a document.
///
/// HTML input routes to the privacy-law strategy for its one registered
/// identity and to the generic fallback otherwise. Plain-text input routes
/// by identity prefix; anything unrecognized falls back to the statute
/// machine, even though the basic-law variant might fit better for some
/// unlisted documents of that family.
#[must_use]
pub fn select_strategy(format: SourceFormat, act_id: &str) -> ParseStrategy {
    match format {
        SourceFormat::Html => {
            if act_id == PRIVACY_ACT_ID {
                ParseStrategy::PrivacyHtml
            } else {
                ParseStrategy::GenericHtml
            }
        }
        SourceFormat::Text => {
            if act_id.starts_with(BASIC_LAW_PREFIX) {
                ParseStrategy::BasicLawText
            } else {
                tracing::debug!(act_id, "No dedicated plain-text strategy, using statute default");
                ParseStrategy::StatuteText
            }
        }
    }
}
