// Copyright 2026 termbridge contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/filter.rs
//!
//! Filter predicate and ordering for glossary entries
//!
//! The pipeline is recompute-on-every-input: each call takes the full
//! entry list plus the current `FilterState` and produces a fresh,
//! ordered result. Nothing is cached and the source list is never
//! touched.
//!
//! Text matching is a case-insensitive substring scan over a per-entry
//! haystack (category + both renderings + note). When simplified-script
//! input is enabled, the query's loose traditional rendering is matched
//! as a second variant.

use std::cmp::Reverse;

use crate::core::script::{loose_traditional, ScriptMap};
use crate::core::types::{FilterState, TermEntry};

/// Knobs that shape text matching, sourced from configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions<'a> {
    /// Queries shorter than this many characters apply no text filter.
    pub min_query_len: usize,

    /// Compute and match the loose traditional rendering of the query.
    pub allow_simp_input: bool,

    /// Substitution table for the traditional rendering.
    pub script_map: &'a ScriptMap,
}

/// The effective query and its optional alternate-script rendering.
///
/// Both variants are stored lowercased, ready for haystack scans. An
/// empty `primary` means no text filter is active, either because the
/// raw query was blank or because it fell below the minimum length.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryVariants {
    primary: String,
    alternate: Option<String>,
}

impl QueryVariants {
    /// Derive the query variants from raw input.
    ///
    /// The raw query is trimmed, then gated on the minimum length
    /// (measured in characters, so CJK input counts per ideograph).
    /// The alternate rendering is only computed when simplified input
    /// is allowed and a text filter is active.
    pub fn build(raw_query: &str, options: &SearchOptions<'_>) -> Self {
        let trimmed = raw_query.trim();

        if trimmed.chars().count() < options.min_query_len || trimmed.is_empty() {
            return Self::default();
        }

        let primary = trimmed.to_lowercase();
        let alternate = options
            .allow_simp_input
            .then(|| loose_traditional(trimmed, options.script_map).to_lowercase());

        Self { primary, alternate }
    }

    /// True when a text filter is in effect.
    pub fn is_active(&self) -> bool {
        !self.primary.is_empty()
    }
}

/// Does the entry match the active query (either variant)?
///
/// With no active query every entry matches.
pub fn matches(entry: &TermEntry, variants: &QueryVariants) -> bool {
    if !variants.is_active() {
        return true;
    }

    let haystack = entry.haystack();

    if haystack.contains(&variants.primary) {
        return true;
    }

    variants
        .alternate
        .as_ref()
        .is_some_and(|alt| haystack.contains(alt))
}

/// Apply the combined filter and order the result.
///
/// Category and level facets are exact-match AND predicates; `None`
/// (the "all" sentinel) disables the facet. Matching entries are then
/// stable-sorted descending by level rank, so entries of equal level
/// keep their dataset order between renders.
pub fn filter_and_sort(
    entries: &[TermEntry],
    state: &FilterState,
    options: &SearchOptions<'_>,
) -> Vec<TermEntry> {
    let variants = QueryVariants::build(&state.query, options);

    let mut filtered: Vec<TermEntry> = entries
        .iter()
        .filter(|entry| {
            let category_ok = state
                .category
                .as_deref()
                .is_none_or(|c| entry.category == c);
            let level_ok = state.level.is_none_or(|l| entry.level == l);

            category_ok && level_ok && matches(entry, &variants)
        })
        .cloned()
        .collect();

    filtered.sort_by_key(|entry| Reverse(entry.level.rank()));
    filtered
}
