//! CLI command definitions for the `vgchat` binary.
//!
//! Uses clap derive macros for argument parsing. With no subcommand the
//! interactive chat starts.

pub mod ask;
pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with the ICS Security assistant from your terminal.
#[derive(Parser)]
#[command(name = "vgchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend base URL; questions are posted to `<URL>/chat`.
    #[arg(long, env = "VGCHAT_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// Path to a config.toml (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum time in milliseconds the typing indicator is shown.
    #[arg(long, global = true)]
    pub typing_delay_ms: Option<u64>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true, hide = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default).
    Chat,

    /// Ask a single question and print the answer.
    Ask {
        /// The question to send.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
