//! Recording adapter for the `ToolProvider` port.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::provider::{ToolCallFuture, ToolProvider};

/// Records provider interactions while delegating to an inner implementation.
pub struct RecordingToolProvider {
    inner: Box<dyn ToolProvider>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingToolProvider {
    /// Creates a new recording provider wrapping the given implementation.
    pub fn new(inner: Box<dyn ToolProvider>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ToolProvider for RecordingToolProvider {
    fn call_tool(&self, name: &str, arguments: &Value) -> ToolCallFuture<'_> {
        let name = name.to_string();
        let arguments = arguments.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.call_tool(&name, &arguments).await;

            let input = json!({ "name": name, "arguments": arguments });
            record_result(&recorder, "provider", "call_tool", &input, &result);

            result
        })
    }
}
