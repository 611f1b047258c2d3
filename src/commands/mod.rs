//! Command dispatch and handlers.

pub mod ask;

use std::env;
use std::path::Path;

use crate::cli::Command;
use crate::context::{RecordingSession, ServiceContext};

/// Env var: record provider interactions to the named cassette file.
pub const RECORD_ENV: &str = "TRIAGE_RECORD";
/// Env var: replay provider interactions from the named cassette file.
pub const REPLAY_ENV: &str = "TRIAGE_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// When `TRIAGE_RECORD` is set to a file path, all provider interactions are
/// recorded to that cassette. When `TRIAGE_REPLAY` is set, interactions are
/// served from the named cassette instead of the live provider.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails or a
/// cassette cannot be loaded or written.
pub fn dispatch(command: &Command) -> Result<(), String> {
    if let Ok(path) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording(Path::new(&path));
        let result = dispatch_with_context(command, &ctx);

        // Drop context first to release the recorder reference.
        drop(ctx);
        finish_recording(session)?;
        result
    } else if let Ok(path) = env::var(REPLAY_ENV) {
        let ctx = ServiceContext::replaying(Path::new(&path))?;
        dispatch_with_context(command, &ctx)
    } else {
        let ctx = ServiceContext::live();
        dispatch_with_context(command, &ctx)
    }
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Ask { question } => ask::run_with_context(ctx, question),
    }
}

/// Finish a recording session and print the output path.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let path = session.finish()?;
    eprintln!("Recording saved to: {}", path.display());
    Ok(())
}
