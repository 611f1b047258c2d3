//! Tool provider port for remote tool-calling services.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

/// Boxed future type alias used by [`ToolProvider`] to keep the trait dyn-compatible.
pub type ToolCallFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Value, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Invokes named tools on a remote capability provider.
///
/// The provider owns the shape of each tool's arguments and result; this
/// boundary passes JSON through untouched. Abstracting the provider allows
/// deterministic replay and testing without a live endpoint.
pub trait ToolProvider: Send + Sync {
    /// Calls the named tool with the given arguments and returns its result.
    ///
    /// # Errors
    ///
    /// The future resolves to an error if the call fails for any reason
    /// (network, auth, unknown tool, provider-side failure).
    fn call_tool(&self, name: &str, arguments: &Value) -> ToolCallFuture<'_>;
}
