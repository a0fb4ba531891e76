//! Escaped HTML table-body rendering.
//!
//! Produces the `<tbody>` markup for the results table. Every free-text
//! field passes through [`escape`] before insertion, so dataset content
//! can never inject markup. An empty result set renders a single
//! informational placeholder row rather than zero rows.

use crate::core::types::TermEntry;
use crate::render::NO_MATCH_MESSAGE;

/// Escape the five HTML-significant characters: `& < > " '`.
///
/// The ampersand must be replaced first so entity text from earlier
/// replacements is not re-escaped.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Render ordered entries as table-body markup.
pub fn table_body(entries: &[TermEntry]) -> String {
    if entries.is_empty() {
        return format!(
            "<tr>\n  <td colspan=\"5\" class=\"muted\" style=\"padding:18px 12px;\">\n    {}\n  </td>\n</tr>\n",
            escape(NO_MATCH_MESSAGE)
        );
    }

    let mut body = String::new();

    for entry in entries {
        body.push_str(&format!(
            "<tr>\n  <td><span class=\"badge\">{}</span></td>\n  <td><span class=\"badge badge-lvl {}\">{}</span></td>\n  <td>{}</td>\n  <td>{}</td>\n  <td class=\"muted\">{}</td>\n</tr>\n",
            escape(&entry.category),
            entry.level.style_class(),
            entry.level.label(),
            escape(&entry.form_tw),
            escape(&entry.form_cn),
            escape(&entry.note),
        ));
    }

    body
}
