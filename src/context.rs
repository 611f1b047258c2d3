//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveToolProvider;
use crate::adapters::recording::RecordingToolProvider;
use crate::adapters::replaying::ReplayingToolProvider;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::provider::ToolProvider;

/// Bundles the port trait objects into a single context.
///
/// The provider field gives access to the remote tool-calling boundary.
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Tool provider for remote tool calls.
    pub provider: Box<dyn ToolProvider>,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

/// Handle for an in-progress recording; writes the cassette on finish.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the session and write the cassette file to disk.
    ///
    /// The [`ServiceContext`] holding the recording adapter must be dropped
    /// first so this session owns the only recorder reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the file cannot
    /// be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recorder still in use; drop the service context first".to_string())?
            .into_inner()
            .map_err(|_| "Recorder lock poisoned".to_string())?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Creates a live context with the real tool provider adapter.
    #[must_use]
    pub fn live() -> Self {
        Self { provider: Box::new(LiveToolProvider::new()) }
    }

    /// Creates a recording context that captures provider interactions.
    ///
    /// Uses the live adapter for actual work. The cassette is written to
    /// `path` when the returned [`RecordingSession`] is finished. This is
    /// the developer-only mechanism for capturing cassettes via the
    /// `TRIAGE_RECORD` env var.
    #[must_use]
    pub fn recording(path: &Path) -> (Self, RecordingSession) {
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "triage-session", "unknown")));
        let provider = RecordingToolProvider::new(
            Box::new(LiveToolProvider::new()),
            Arc::clone(&recorder),
        );
        (Self { provider: Box::new(provider) }, RecordingSession { recorder })
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(&cassette)));
        Ok(Self { provider: Box::new(ReplayingToolProvider::new(replayer)) })
    }
}
