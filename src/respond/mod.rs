//! Rendering of lookup results into display text.

use crate::lookup::Record;
use crate::suggest::SuggestionEntry;

/// Upper bound on records listed in a search response. Anything beyond is
/// silently dropped.
pub const MAX_LISTED_RESULTS: usize = 5;
/// Fixed sentence rendered for an empty search result.
pub const NO_RESULTS_MESSAGE: &str = "No issues found matching your query.";
/// Placeholder rendered when a record has no summary.
pub const MISSING_SUMMARY: &str = "No summary";

/// Render one issue with its suggestions as a numbered list.
#[must_use]
pub fn format_issue(record: &Record, suggestions: &[SuggestionEntry]) -> String {
    let summary = record.summary.as_deref().unwrap_or(MISSING_SUMMARY);

    let mut response = format!("**Issue: {}**\n", record.key);
    response.push_str(&format!("Summary: {summary}\n\n"));
    response.push_str("**Suggested Solutions:**\n");

    for (idx, entry) in suggestions.iter().enumerate() {
        response.push_str(&format!("{}. {}\n", idx + 1, entry.message));
        response.push_str(&format!("   Action: {}\n\n", entry.action));
    }

    response
}

/// Render a search result as a count header plus a bounded listing.
#[must_use]
pub fn format_search(records: &[Record]) -> String {
    if records.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut response = format!("Found {} issue(s):\n\n", records.len());
    for record in records.iter().take(MAX_LISTED_RESULTS) {
        let summary = record.summary.as_deref().unwrap_or(MISSING_SUMMARY);
        response.push_str(&format!("- {}: {summary}\n", record.key));
    }

    response
}
