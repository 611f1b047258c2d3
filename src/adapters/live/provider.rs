//! Live adapter for the `ToolProvider` port speaking JSON-RPC over HTTP.

use std::env;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::provider::{ToolCallFuture, ToolProvider};

/// Environment variable naming the provider endpoint URL.
pub const PROVIDER_URL_ENV: &str = "TRIAGE_MCP_URL";
/// Environment variable holding an optional bearer token for the provider.
pub const PROVIDER_TOKEN_ENV: &str = "TRIAGE_MCP_TOKEN";

const JSONRPC_VERSION: &str = "2.0";
const TOOLS_CALL_METHOD: &str = "tools/call";

/// Live tool provider that posts `tools/call` requests to a remote endpoint.
pub struct LiveToolProvider {
    client: Client,
    next_id: AtomicU64,
}

impl LiveToolProvider {
    /// Creates a new live tool provider.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new(), next_id: AtomicU64::new(1) }
    }
}

impl Default for LiveToolProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body sent to the provider endpoint.
#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'a str,
    id: u64,
    method: &'a str,
    params: ToolCallParams<'a>,
}

/// Parameters of a `tools/call` request.
#[derive(Serialize)]
struct ToolCallParams<'a> {
    name: &'a str,
    arguments: &'a Value,
}

/// Top-level response from the provider endpoint.
#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

/// Error object in a provider response.
#[derive(Deserialize)]
struct RpcError {
    message: String,
}

impl ToolProvider for LiveToolProvider {
    fn call_tool(&self, name: &str, arguments: &Value) -> ToolCallFuture<'_> {
        let name = name.to_string();
        let arguments = arguments.clone();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        Box::pin(async move {
            let url = env::var(PROVIDER_URL_ENV).map_err(|_| {
                Box::<dyn std::error::Error + Send + Sync>::from(format!(
                    "{PROVIDER_URL_ENV} environment variable not set"
                ))
            })?;

            let body = RpcRequest {
                jsonrpc: JSONRPC_VERSION,
                id,
                method: TOOLS_CALL_METHOD,
                params: ToolCallParams { name: &name, arguments: &arguments },
            };

            tracing::debug!(tool = %name, id, "calling provider tool");

            let mut request = self.client.post(&url).json(&body);
            if let Ok(token) = env::var(PROVIDER_TOKEN_ENV) {
                request = request.bearer_auth(token);
            }

            let response = request.send().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Provider request failed: {e}").into()
                },
            )?;

            let status = response.status();
            let response_text =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to read provider response: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<RpcResponse>(&response_text)
                    .ok()
                    .and_then(|r| r.error.map(|e| e.message))
                    .unwrap_or(response_text);
                return Err(format!("Provider error ({}): {msg}", status.as_u16()).into());
            }

            let rpc_response: RpcResponse = serde_json::from_str(&response_text).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to parse provider response: {e}").into()
                },
            )?;

            if let Some(error) = rpc_response.error {
                return Err(error.message.into());
            }

            rpc_response
                .result
                .ok_or_else(|| "Provider response carried neither result nor error".into())
        })
    }
}
