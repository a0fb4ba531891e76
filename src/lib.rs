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

//! Termbridge — cross-strait terminology glossary lookup
//!
//! Filters and displays a fixed list of terminology entries (category,
//! confidence level, Taiwan and mainland renderings, note) against a
//! free-text query and category/level facets.
//!
//! # Features
//!
//! - **Substring search:** case-insensitive match over category, both
//!   renderings, and note
//! - **Simplified-script input:** optional loose transliteration of the
//!   query toward traditional script, widening the match
//! - **Facets:** category and level dropdowns with an "all" sentinel,
//!   categories ordered by zh-Hant collation
//! - **Stable ordering:** results sort descending by confidence level,
//!   ties keeping dataset order
//! - **Escaped HTML rows:** table-body markup safe against injection
//!
//! # Architecture
//!
//! - **`core`:** pure business logic (types, filter, script, facets)
//! - **`config`:** deployment configuration with full defaulting
//! - **`data`:** dataset loading with defensive degradation
//! - **`render`:** row descriptions, count label, HTML table body
//! - **`link`:** mailto correction link and cache-busting refresh URL
//!
//! Everything is synchronous and pure over in-memory data: each lookup
//! recomputes the whole result from the full entry list and the current
//! filter state, so there is no cached state to invalidate.
//!
//! # Examples
//!
//! ## Filtering entries
//!
//! ```
//! use termbridge::core::{filter_and_sort, FilterState, SearchOptions, ScriptMap};
//! use termbridge::data::entries_from_value;
//! use serde_json::json;
//!
//! let entries = entries_from_value(json!([
//!     {"cat": "交通", "lvl": "high", "tw": "計程車", "cn": "出租车"},
//!     {"cat": "飲食", "lvl": "low", "tw": "番茄", "cn": "西红柿"},
//! ]));
//!
//! let map = ScriptMap::new();
//! let options = SearchOptions {
//!     min_query_len: 1,
//!     allow_simp_input: false,
//!     script_map: &map,
//! };
//!
//! let state = FilterState::new("計程車", None, None);
//! let result = filter_and_sort(&entries, &state, &options);
//! assert_eq!(result.len(), 1);
//! ```
//!
//! ## Rendering the table body
//!
//! ```
//! use termbridge::render::html::table_body;
//!
//! let body = table_body(&[]);
//! assert!(body.contains("沒找到匹配項"));
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod link;
pub mod render;

// Re-export commonly used types for convenience
pub use crate::core::{FilterState, Level, TermEntry};
