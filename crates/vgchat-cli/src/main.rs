//! VietGuard Assistant terminal client entry point.
//!
//! Binary name: `vgchat`
//!
//! Parses CLI arguments, sets up logging, resolves configuration, then
//! starts the interactive chat or runs a one-shot question.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use vgchat_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need configuration
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "vgchat", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(&cli).await?;

    match cli.command {
        None | Some(Commands::Chat) => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }
        Some(Commands::Ask { question }) => {
            cli::ask::ask_once(&state, &question.join(" "), cli.json).await?;
        }
        Some(Commands::Completions { .. }) => unreachable!("handled above"),
    }

    Ok(())
}
