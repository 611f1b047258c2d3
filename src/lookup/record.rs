//! Typed snapshot of one tracked issue.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder key used when the provider omits one.
pub const UNKNOWN_KEY: &str = "Unknown";

/// One snapshot of an issue-tracker ticket as returned by the provider.
///
/// The provider owns the underlying shape; the nested field bag is resolved
/// into these typed fields exactly once, at the lookup boundary. Missing
/// pieces become `None` rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The externally unique issue key (e.g. `"SUP-129"`).
    pub key: String,
    /// The issue type name (e.g. `"Bug"`, `"Story"`).
    pub issue_type: Option<String>,
    /// The priority name (e.g. `"High"`).
    pub priority: Option<String>,
    /// One-line summary of the issue.
    pub summary: Option<String>,
    /// Longer issue description.
    pub description: Option<String>,
}

impl Record {
    /// Resolve a provider issue snapshot into a typed record.
    ///
    /// Reads `key` plus the nested `fields.issuetype.name`,
    /// `fields.priority.name`, `fields.summary`, and `fields.description`
    /// paths, defaulting each missing piece.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let fields = value.get("fields");
        let named = |field: &str| {
            fields
                .and_then(|f| f.get(field))
                .and_then(|v| v.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let text = |field: &str| {
            fields.and_then(|f| f.get(field)).and_then(Value::as_str).map(str::to_string)
        };

        Self {
            key: value
                .get("key")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_KEY)
                .to_string(),
            issue_type: named("issuetype"),
            priority: named("priority"),
            summary: text("summary"),
            description: text("description"),
        }
    }
}
