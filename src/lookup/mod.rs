//! Lookup client translating provider tool calls into typed records.

pub mod record;

pub use record::{Record, UNKNOWN_KEY};

use serde_json::{json, Value};
use thiserror::Error;

use crate::ports::provider::ToolProvider;

/// Provider tool that searches issues by query text.
pub const SEARCH_TOOL: &str = "tracker_search_issues";
/// Provider tool that retrieves a single issue by key.
pub const GET_ISSUE_TOOL: &str = "tracker_get_issue";
/// Result bound passed to the search tool when the caller has no preference.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Failure of a provider lookup, carried as a value rather than propagated.
///
/// Every provider error — network, auth, malformed query, not-found — is
/// captured at this boundary under the one reason string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct LookupFailure {
    /// Human-readable description of what went wrong.
    pub reason: String,
}

impl LookupFailure {
    fn from_provider(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self { reason: err.to_string() }
    }
}

/// Issues search and retrieval calls against a tool provider.
///
/// One round trip per call; no retries, no caching. Failures surface
/// immediately as [`LookupFailure`] values for the caller to inspect.
pub struct LookupClient<'a> {
    provider: &'a dyn ToolProvider,
}

impl<'a> LookupClient<'a> {
    /// Creates a lookup client over the given provider.
    #[must_use]
    pub fn new(provider: &'a dyn ToolProvider) -> Self {
        Self { provider }
    }

    /// Searches issues matching the query, bounded to `limit` results.
    ///
    /// Returns whatever bounded sequence the provider yields — no local
    /// filtering or re-ranking. A provider result without an `issues` array
    /// is an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupFailure`] if the provider call fails for any cause.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Record>, LookupFailure> {
        let arguments = json!({ "query": query, "max_results": limit });
        let result = self
            .provider
            .call_tool(SEARCH_TOOL, &arguments)
            .await
            .map_err(LookupFailure::from_provider)?;

        let records = result
            .get("issues")
            .and_then(Value::as_array)
            .map(|issues| issues.iter().map(Record::from_value).collect())
            .unwrap_or_default();
        Ok(records)
    }

    /// Retrieves exactly one issue by its key.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupFailure`] if the provider call fails for any cause,
    /// including an unknown key.
    pub async fn get_by_key(&self, key: &str) -> Result<Record, LookupFailure> {
        let arguments = json!({ "issue_key": key });
        let result = self
            .provider
            .call_tool(GET_ISSUE_TOOL, &arguments)
            .await
            .map_err(LookupFailure::from_provider)?;

        Ok(Record::from_value(&result))
    }
}
