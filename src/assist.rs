//! Question dispatcher routing to single-issue lookup or search.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lookup::{LookupClient, DEFAULT_SEARCH_LIMIT};
use crate::respond::{format_issue, format_search};
use crate::suggest::suggest;

/// Issue key pattern: one or more uppercase letters, a hyphen, one or more
/// digits (e.g. `SUP-129`).
static ISSUE_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]+-\d+\b").expect("issue key pattern must compile"));

/// Extract the first issue key from free text, if any.
#[must_use]
pub fn extract_issue_key(text: &str) -> Option<&str> {
    ISSUE_KEY_PATTERN.find(text).map(|m| m.as_str())
}

/// Answer one natural-language question about tracked issues.
///
/// A question containing an issue key retrieves that issue and renders it
/// with suggestions; any other question runs a search over the full text.
/// Every branch returns a display string — lookup failures become one-line
/// explanations, never an error crossing this boundary.
pub async fn answer(client: &LookupClient<'_>, question: &str) -> String {
    if let Some(key) = extract_issue_key(question) {
        tracing::debug!(key, "routing question to single-issue lookup");
        match client.get_by_key(key).await {
            Ok(record) => {
                let suggestions = suggest(&record);
                format_issue(&record, &suggestions)
            }
            Err(failure) => format!("Could not retrieve issue {key}: {failure}"),
        }
    } else {
        tracing::debug!("routing question to search");
        match client.search(question, DEFAULT_SEARCH_LIMIT).await {
            Ok(records) => format_search(&records),
            Err(failure) => format!("Search failed: {failure}"),
        }
    }
}
