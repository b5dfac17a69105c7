// Rust guideline compliant 2026-02-09

//! Suggestion endpoint URL building and payload decoding.
//!
//! The endpoint answers `GET {base}/{bucket}/{query}.json` with a body of
//! the form `{"d": [{"id": "...", "l": "...", "s": "..."}, ...]}`, where
//! `l` is the label and `s` the summary. Extra fields are ignored.

use filmcheck_core::{Candidate, Error, Result};
use serde::Deserialize;
use url::form_urlencoded;

#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    d: Option<Vec<SuggestionEntry>>,
}

#[derive(Debug, Deserialize)]
struct SuggestionEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    l: String,
    #[serde(default)]
    s: String,
}

impl From<SuggestionEntry> for Candidate {
    fn from(entry: SuggestionEntry) -> Self {
        Candidate::new(entry.id, entry.l, entry.s)
    }
}

/// Builds the suggestion URL for a query.
///
/// The query is form-encoded, so spaces become `+`.
///
/// # Arguments
///
/// * `base` - Suggestion endpoint base URL
/// * `bucket` - Path segment placed before the query file name
/// * `text` - Free-text query
#[must_use]
pub fn suggestion_url(base: &str, bucket: &str, text: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{}/{}/{}.json", base.trim_end_matches('/'), bucket, encoded)
}

/// Decodes a suggestion response body into candidates.
///
/// Candidate order follows the payload. Missing `id`, `l` or `s` fields
/// decode as empty strings.
///
/// # Errors
///
/// Returns `Error::Json` if the body is not JSON, or `Error::NoData` if the
/// body has no `d` list.
pub fn parse_suggestions(body: &str) -> Result<Vec<Candidate>> {
    let payload: SuggestionPayload = serde_json::from_str(body)?;
    let entries = payload
        .d
        .ok_or_else(|| Error::NoData("suggestion payload has no results".to_string()))?;
    Ok(entries.into_iter().map(Candidate::from).collect())
}
