//! Core data types for the parser.
//!
//! These types represent a legal act and its components: the identity
//! record supplied by the external registry, the provisions recovered by
//! the structural strategies, and the extracted term definitions.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::section_url;

/// Lifecycle status of a legal act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleStatus {
    /// The act is in force.
    #[serde(rename = "IN_FORCE")]
    InForce,

    /// The act is in force with amendments.
    #[serde(rename = "AMENDED")]
    Amended,

    /// The act has been repealed.
    #[serde(rename = "REPEALED")]
    Repealed,

    /// The act has been published but is not yet in force.
    #[serde(rename = "NOT_YET_IN_FORCE")]
    NotYetInForce,
}

impl LifecycleStatus {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InForce => "IN_FORCE",
            Self::Amended => "AMENDED",
            Self::Repealed => "REPEALED",
            Self::NotYetInForce => "NOT_YET_IN_FORCE",
        }
    }

    /// Parse from registry status text.
    #[must_use]
    pub fn from_status_text(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "in force" | "in_force" => Self::InForce,
            "amended" => Self::Amended,
            "repealed" => Self::Repealed,
            "not yet in force" | "not_yet_in_force" => Self::NotYetInForce,
            _ => Self::InForce, // Default
        }
    }
}

/// Identity record for an act, supplied by the external registry.
///
/// The parser only reads this; it never creates or mutates identity data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActIdentity {
    /// Registry identifier (e.g., "protection-of-privacy-law").
    pub id: String,

    /// Canonical title in the source language.
    pub title: String,

    /// Canonical English title.
    pub title_en: String,

    /// Short name used in citations and running headers.
    pub short_name: String,

    /// Year of enactment.
    pub year: u16,

    /// Lifecycle status.
    pub status: LifecycleStatus,

    /// Issuance date (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuance_date: Option<NaiveDate>,

    /// Effective date (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,

    /// URL of the source document.
    pub source_url: String,
}

/// Regex for slug generation - matches non-word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

impl ActIdentity {
    /// Generate a URL-friendly slug from the English title.
    ///
    /// # Examples
    /// ```
    /// use lexmirror_parser::types::{ActIdentity, LifecycleStatus};
    ///
    /// let identity = ActIdentity {
    ///     id: "protection-of-privacy-law".to_string(),
    ///     title: "חוק הגנת הפרטיות".to_string(),
    ///     title_en: "Protection of Privacy Law".to_string(),
    ///     short_name: "Privacy Law".to_string(),
    ///     year: 1981,
    ///     status: LifecycleStatus::Amended,
    ///     issuance_date: None,
    ///     effective_date: None,
    ///     source_url: "https://example.org/laws/privacy".to_string(),
    /// };
    /// assert_eq!(identity.to_slug(), "protection_of_privacy_law");
    /// ```
    #[must_use]
    pub fn to_slug(&self) -> String {
        let text = self.title_en.to_lowercase();
        let text = SLUG_NON_WORD.replace_all(&text, "");
        let text = SLUG_SPACE_DASH.replace_all(&text, "_");
        text.trim_matches('_').to_string()
    }
}

/// A single provision (numbered section) of an act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    /// Section label, unique within the document (e.g., "1", "17C", "270A").
    pub section: String,

    /// Chapter heading this provision falls under (scope, not ownership).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,

    /// Marginal-note title (may be empty).
    pub title: String,

    /// Normalized text content, capped at
    /// [`MAX_CONTENT_CHARS`](crate::config::MAX_CONTENT_CHARS) characters.
    pub content: String,
}

impl Provision {
    /// Create a new provision.
    #[must_use]
    pub fn new(
        section: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            chapter: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Create a provision scoped to a chapter.
    #[must_use]
    pub fn with_chapter(mut self, chapter: Option<String>) -> Self {
        self.chapter = chapter;
        self
    }

    /// Stable reference for this provision within its act (e.g., "sec17C").
    #[must_use]
    pub fn provision_ref(&self) -> String {
        format!("sec{}", self.section)
    }

    /// Build a URL pointing at this provision in the source document.
    #[must_use]
    pub fn source_anchor(&self, base_url: &str) -> String {
        section_url(base_url, &self.section)
    }
}

/// An extracted term definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The defined term.
    pub term: String,

    /// The definition text.
    pub definition: String,

    /// Section label of the provision the definition was found in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_provision: Option<String>,
}

/// Complete parsed act: identity plus provisions and definitions.
///
/// Provisions keep their order of appearance in the source; they are never
/// renumbered or sorted. Built once per parse invocation and handed to an
/// external loader for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAct {
    /// Identity record from the registry.
    pub identity: ActIdentity,

    /// Provisions in source order.
    pub provisions: Vec<Provision>,

    /// Extracted term definitions, unique by term.
    pub definitions: Vec<Definition>,
}

impl ParsedAct {
    /// Create a new parsed act with no provisions.
    #[must_use]
    pub fn new(identity: ActIdentity) -> Self {
        Self {
            identity,
            provisions: Vec::new(),
            definitions: Vec::new(),
        }
    }

    /// Append a provision, preserving source order.
    pub fn add_provision(&mut self, provision: Provision) {
        self.provisions.push(provision);
    }

    /// Append a definition unless the term was already captured.
    ///
    /// First occurrence wins; later duplicates are discarded.
    pub fn add_definition(&mut self, definition: Definition) {
        if self.definitions.iter().any(|d| d.term == definition.term) {
            tracing::debug!(term = %definition.term, "Duplicate term, keeping first definition");
            return;
        }
        self.definitions.push(definition);
    }

    /// Whether the parse produced nothing of structural value.
    ///
    /// The external orchestrator substitutes a metadata-only record when
    /// this is true; the parser itself never fails on sparse input.
    #[must_use]
    pub fn is_sparse(&self) -> bool {
        self.provisions.is_empty()
    }
}
