//! src/core/facets.rs
//!
//! Category facet extraction
//!
//! Builds the list of selectable category values from the dataset:
//! distinct, non-empty, ordered with Traditional Chinese collation so
//! stroke order is respected rather than raw code-point order.

use std::cmp::Ordering;
use std::collections::HashSet;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::core::types::TermEntry;

/// Distinct non-empty category labels, collated for zh-Hant display.
///
/// Duplicates are removed keeping first occurrence, then the labels are
/// sorted with a `zh-TW` collator. If the collator cannot be built the
/// sort degrades to plain lexicographic order rather than failing.
pub fn category_facets(entries: &[TermEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories: Vec<String> = entries
        .iter()
        .filter(|entry| !entry.category.is_empty())
        .filter(|entry| seen.insert(entry.category.clone()))
        .map(|entry| entry.category.clone())
        .collect();

    categories.sort_by(collation());
    categories
}

/// Comparator for zh-Hant labels, falling back to code-point order.
fn collation() -> impl FnMut(&String, &String) -> Ordering {
    let collator = Collator::try_new(&locale!("zh-TW").into(), CollatorOptions::new()).ok();

    move |a, b| match &collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
