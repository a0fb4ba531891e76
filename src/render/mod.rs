//! Presentation of filtered results.
//!
//! Turns ordered entries into row descriptions (badge text, level badge
//! label + style class, both renderings, note) plus the matched-entry
//! count label. The HTML table body lives in [`html`]; terminal output
//! is composed directly from the row descriptions by the CLI.

pub mod html;

use crate::core::types::TermEntry;

/// Placeholder shown instead of zero rows when nothing matches.
pub const NO_MATCH_MESSAGE: &str =
    "沒找到匹配項。試試其他關鍵字，或使用右上角「我要提交新詞條」。";

/// One display row, ready for whichever surface renders it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// Category badge text
    pub category: String,
    /// Localized level badge label (高/中/低, or — for unknown)
    pub level_label: &'static str,
    /// Badge style class keyed by level
    pub level_class: &'static str,
    /// Traditional rendering
    pub form_tw: String,
    /// Simplified rendering
    pub form_cn: String,
    /// Annotation, possibly empty
    pub note: String,
}

/// Describe each entry as a display row, preserving order.
pub fn rows(entries: &[TermEntry]) -> Vec<Row> {
    entries
        .iter()
        .map(|entry| Row {
            category: entry.category.clone(),
            level_label: entry.level.label(),
            level_class: entry.level.style_class(),
            form_tw: entry.form_tw.clone(),
            form_cn: entry.form_cn.clone(),
            note: entry.note.clone(),
        })
        .collect()
}

/// Human-readable matched-entry count, e.g. "12 條".
pub fn count_label(count: usize) -> String {
    format!("{} 條", count)
}
