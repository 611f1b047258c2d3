//! Binary entrypoint for the `triage` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // .env supplies provider settings (TRIAGE_MCP_URL, TRIAGE_MCP_TOKEN).
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Recording/replay is handled in commands::dispatch via
    // TRIAGE_RECORD/TRIAGE_REPLAY.
    match triage::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
