//! Replaying adapters that replay recorded interactions.

pub mod provider;

pub use provider::ReplayingToolProvider;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;

/// Fetch the next recorded output for the given port and method.
///
/// # Panics
///
/// Panics if no cassette is loaded for the port, or if the cassette is
/// exhausted for the port/method pair.
pub(crate) fn next_output(
    replayer: Option<&Arc<Mutex<CassetteReplayer>>>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let replayer = replayer
        .unwrap_or_else(|| panic!("No cassette loaded for port {port:?} method {method:?}"));
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output.clone()
}

/// Extract a `Result` from a recorded output using the Ok/Err JSON convention.
///
/// Expects `{"Ok": <value>}` or `{"Err": "message"}`; a bare value is
/// treated as `Ok`.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("Err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("Ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| format!("failed to deserialize replayed output: {e}").into())
}
