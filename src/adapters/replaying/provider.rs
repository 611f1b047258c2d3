//! Replaying adapter for the `ToolProvider` port.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::provider::{ToolCallFuture, ToolProvider};

/// Serves recorded provider results from a cassette.
pub struct ReplayingToolProvider {
    replayer: Option<Arc<Mutex<CassetteReplayer>>>,
}

impl ReplayingToolProvider {
    /// Create a replaying provider backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer: Some(replayer) }
    }

    /// Create a replaying provider with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }
}

impl ToolProvider for ReplayingToolProvider {
    fn call_tool(&self, _name: &str, _arguments: &Value) -> ToolCallFuture<'_> {
        let output = next_output(self.replayer.as_ref(), "provider", "call_tool");
        Box::pin(async move { replay_result(output) })
    }
}
