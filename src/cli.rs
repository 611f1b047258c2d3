//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `triage`.
#[derive(Debug, Parser)]
#[command(name = "triage", version, about = "Answer questions about issue-tracker tickets")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer one natural-language question about tracked issues.
    Ask {
        /// The question to answer (e.g. "What's the status of SUP-129?").
        question: String,
    },
}
