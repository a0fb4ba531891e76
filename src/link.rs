//! Outbound link construction.
//!
//! Two small link builders live here:
//! - the "submit a correction" `mailto:` URI, percent-encoded from the
//!   configured address, subject, and body template
//! - the force-refresh URL, which sets a `_ts` cache-busting timestamp
//!   query parameter for a replacing navigation

use chrono::Utc;
use url::Url;

use crate::config::SubmitConfig;

/// Query parameter carrying the cache-busting timestamp.
const CACHE_BUST_PARAM: &str = "_ts";

/// Build the correction-submission `mailto:` URI.
///
/// Every component is percent-encoded, the recipient included — an
/// empty address yields an inert but well-formed link.
pub fn correction_mailto(submit: &SubmitConfig) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(&submit.email),
        urlencoding::encode(&submit.subject),
        urlencoding::encode(&submit.body_template),
    )
}

/// Rewrite `url` with `_ts` set to the current Unix-epoch milliseconds.
///
/// # Errors
///
/// Fails only when `url` cannot be parsed.
pub fn cache_busted(url: &str) -> Result<String, url::ParseError> {
    cache_busted_at(url, Utc::now().timestamp_millis())
}

/// Rewrite `url` with `_ts` set to `timestamp_ms`.
///
/// Any previous `_ts` value is dropped; all other query parameters are
/// preserved in order.
pub fn cache_busted_at(url: &str, timestamp_ms: i64) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(url)?;

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| key != CACHE_BUST_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    parsed
        .query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(CACHE_BUST_PARAM, &timestamp_ms.to_string());

    Ok(parsed.into())
}
