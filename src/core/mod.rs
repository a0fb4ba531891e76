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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for glossary lookup, including:
//! - Type definitions for entries, levels, and filter state
//! - The filter predicate and stable level-rank ordering
//! - Loose simplified→traditional query transliteration
//! - Category facet extraction with zh-Hant collation
//!
//! All business logic is isolated from I/O and presentation concerns so
//! the whole pipeline is unit-testable on in-memory data.

pub mod facets;
pub mod filter;
pub mod script;
pub mod types;

pub use facets::category_facets;
pub use filter::{filter_and_sort, matches, QueryVariants, SearchOptions};
pub use script::{loose_traditional, ScriptMap};
pub use types::{FilterState, Level, TermEntry};

#[cfg(test)]
mod tests;
