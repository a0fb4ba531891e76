//! src/core/types.rs
//!
//! Core type definitions for glossary lookup
//!
//! This module defines the fundamental types used throughout the application:
//! - `Level`: the three-tier confidence classification of an entry
//! - `TermEntry`: one glossary row (category, level, both renderings, note)
//! - `FilterState`: the current query + facet selection
//!
//! All types implement serialization for dataset loading and are designed
//! to degrade rather than fail: unrecognized levels collapse to `Unknown`,
//! missing fields default to empty strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level of a glossary entry
///
/// Levels drive both the display badge and the sort order. Dataset values
/// outside the three known keywords deserialize as `Unknown`, which renders
/// with a placeholder badge and sorts below everything else.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Well-established correspondence
    High,
    /// Common but with regional variation
    Mid,
    /// Tentative or disputed
    Low,
    /// Any unrecognized dataset value
    #[default]
    #[serde(other)]
    Unknown,
}

impl Level {
    /// Sort rank: higher confidence sorts first. Unknown ranks lowest.
    pub fn rank(self) -> u8 {
        match self {
            Level::High => 3,
            Level::Mid => 2,
            Level::Low => 1,
            Level::Unknown => 0,
        }
    }

    /// Localized badge label; Unknown gets a placeholder glyph.
    pub fn label(self) -> &'static str {
        match self {
            Level::High => "高",
            Level::Mid => "中",
            Level::Low => "低",
            Level::Unknown => "—",
        }
    }

    /// Badge style class. Unknown reuses the low-level styling.
    pub fn style_class(self) -> &'static str {
        match self {
            Level::High => "lvl-high",
            Level::Mid => "lvl-mid",
            _ => "lvl-low",
        }
    }

    /// Parse a facet keyword. Only the three selectable levels parse;
    /// `Unknown` is never a valid facet value.
    pub fn from_keyword(keyword: &str) -> Option<Level> {
        match keyword {
            "high" => Some(Level::High),
            "mid" => Some(Level::Mid),
            "low" => Some(Level::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::High => write!(f, "high"),
            Level::Mid => write!(f, "mid"),
            Level::Low => write!(f, "low"),
            Level::Unknown => write!(f, "unknown"),
        }
    }
}

/// One glossary entry
///
/// The dataset uses short field names (`cat`, `lvl`, `tw`, `cn`, `note`);
/// every field is optional in the JSON and defaults to empty/`Unknown`.
/// Entries are immutable for the session: filtering and sorting always
/// produce derived views, never in-place changes.
///
/// # Example
/// ```ignore
/// let entry = TermEntry {
///     category: "交通".to_string(),
///     level: Level::High,
///     form_tw: "計程車".to_string(),
///     form_cn: "出租车".to_string(),
///     note: String::new(),
/// };
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TermEntry {
    /// Grouping facet, free-form (e.g. "交通", "飲食")
    #[serde(rename = "cat")]
    pub category: String,

    /// Confidence level
    #[serde(rename = "lvl")]
    pub level: Level,

    /// Traditional-script rendering (Taiwan usage)
    #[serde(rename = "tw")]
    pub form_tw: String,

    /// Simplified-script rendering (mainland usage)
    #[serde(rename = "cn")]
    pub form_cn: String,

    /// Optional annotation
    pub note: String,
}

impl TermEntry {
    /// Lowercased haystack for substring matching: category, both
    /// renderings, and note joined with single spaces.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.category, self.form_tw, self.form_cn, self.note
        )
        .to_lowercase()
    }
}

impl fmt::Display for TermEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ⇄ {} ({})",
            self.category, self.form_tw, self.form_cn, self.level
        )?;

        if !self.note.is_empty() {
            write!(f, " — {}", self.note)?;
        }

        Ok(())
    }
}

/// Current filter selection
///
/// `None` on a facet means the "all" sentinel: that facet does not
/// constrain the result. The state is recomputed from the UI controls on
/// every input event and carries no identity beyond one render cycle.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterState {
    /// Free-text query, stored trimmed
    pub query: String,

    /// Selected category, or None for "all"
    pub category: Option<String>,

    /// Selected level, or None for "all"
    pub level: Option<Level>,
}

impl FilterState {
    /// Build a filter state, trimming the query.
    pub fn new(query: &str, category: Option<String>, level: Option<Level>) -> Self {
        Self {
            query: query.trim().to_string(),
            category,
            level,
        }
    }

    /// The clear-filters action: empty query, both facets back to "all".
    pub fn cleared() -> Self {
        Self::default()
    }
}
