//! `triage ask` command.

use crate::assist;
use crate::context::ServiceContext;
use crate::lookup::LookupClient;

/// Execute the `ask` command with the given service context.
///
/// Prints the answer string to stdout. Provider failures are part of the
/// answer text, not command errors.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot be started.
pub fn run_with_context(ctx: &ServiceContext, question: &str) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let client = LookupClient::new(ctx.provider.as_ref());
    let answer = runtime.block_on(assist::answer(&client, question));
    println!("{answer}");
    Ok(())
}
