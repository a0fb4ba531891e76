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

//! src/core/script.rs
//!
//! Loose simplified→traditional query transliteration
//!
//! Widens text search when the dataset mixes simplified and traditional
//! forms: a simplified-script query is rewritten toward its traditional
//! rendering using a configurable substitution table, then both variants
//! are matched.
//!
//! This is NOT a proper script conversion. Each table entry is applied as
//! an independent literal substring replacement over the whole string, so
//! overlapping or order-dependent entries can yield different outputs
//! depending on table iteration order, which is not canonical. The
//! imprecision is part of the contract; callers wanting linguistically
//! correct conversion need a different tool.

use std::collections::HashMap;

/// Substitution table mapping simplified sequences to traditional ones.
///
/// Keys and values are short strings, usually single characters
/// (e.g. "计" → "計"). Iteration order is unspecified.
pub type ScriptMap = HashMap<String, String>;

/// Rewrite `input` toward traditional script, one table entry at a time.
///
/// Every occurrence of each key is replaced by its value. Entries are
/// independent: later replacements see the output of earlier ones, and
/// the entry order is whatever the map yields.
///
/// # Example
/// ```
/// use termbridge::core::script::{loose_traditional, ScriptMap};
///
/// let map: ScriptMap = [("计".to_string(), "計".to_string()),
///                       ("车".to_string(), "車".to_string())]
///     .into_iter()
///     .collect();
/// assert_eq!(loose_traditional("计程车", &map), "計程車");
/// ```
pub fn loose_traditional(input: &str, map: &ScriptMap) -> String {
    let mut out = input.to_string();

    for (simplified, traditional) in map {
        out = out.replace(simplified.as_str(), traditional.as_str());
    }

    out
}
