//! Core library entry for the `triage` CLI.

pub mod adapters;
pub mod assist;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod lookup;
pub mod ports;
pub mod respond;
pub mod suggest;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["triage", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_without_a_question() {
        let result = run(["triage", "ask"]);
        assert!(result.is_err());
    }
}
