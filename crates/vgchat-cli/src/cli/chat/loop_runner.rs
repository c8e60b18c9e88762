//! Main chat loop orchestration.
//!
//! Reads lines, dispatches slash commands, and runs each question through
//! `ChatService::submit` behind a typing indicator. One exchange is in
//! flight at a time: the loop does not read input while awaiting a reply.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Instrument};

use vgchat_core::chat::conversation::FALLBACK_MESSAGE;
use vgchat_core::chat::suggestions::Suggestions;
use vgchat_observe::fields::{
    EXCHANGE_FALLBACK, EXCHANGE_NUMBER, HTTP_REQUEST_METHOD, SPAN_EXCHANGE, URL_FULL,
};
use vgchat_types::error::SubmitRejection;

use crate::state::{AppState, ConcreteChatService};

use super::banner::{print_greeting, print_suggestions, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Spinner shown while an exchange is in flight.
fn typing_spinner(assistant_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{assistant_name} is typing..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run one exchange and print the assistant's message.
async fn run_exchange(
    service: &mut ConcreteChatService,
    renderer: &ChatRenderer,
    text: &str,
    number: u64,
) {
    let span = tracing::info_span!(
        SPAN_EXCHANGE,
        { EXCHANGE_NUMBER } = number,
        { URL_FULL } = service.backend().endpoint().as_str(),
        { HTTP_REQUEST_METHOD } = "POST",
        { EXCHANGE_FALLBACK } = tracing::field::Empty,
    );

    let spinner = typing_spinner(renderer.assistant_name());
    let result = service.submit(text).instrument(span.clone()).await;
    spinner.finish_and_clear();

    match result {
        Ok(reply) => {
            span.record(EXCHANGE_FALLBACK, reply.text == FALLBACK_MESSAGE);
            renderer.print_message(reply);
        }
        // Blank lines are simply ignored, as the widget's send button was disabled.
        Err(SubmitRejection::EmptyText) => {}
        Err(SubmitRejection::InFlight) => {
            println!(
                "\n  {} {}\n",
                style("…").yellow().bold(),
                style("Still waiting for the previous answer.").dim()
            );
        }
    }
}

/// Run the interactive chat loop until the user exits.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut service = state.chat_service()?;
    let suggestions: Suggestions = state.suggestions();
    let renderer = ChatRenderer::new(&state.config.assistant_name, state.config.show_timestamps);

    info!(endpoint = %service.backend().endpoint(), "Chat session started");

    print_welcome_banner(service.backend().endpoint().as_str());
    print_greeting(&suggestions);

    let prompt = format!("  {} ", style("Bạn >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    let mut exchanges: u64 = 0;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => text,
        };

        let question = match commands::parse(&text) {
            None => text,
            Some(ChatCommand::Help) => {
                commands::print_help();
                continue;
            }
            Some(ChatCommand::Clear) => {
                service.clear();
                chat_input.clear();
                print_welcome_banner(service.backend().endpoint().as_str());
                print_greeting(&suggestions);
                continue;
            }
            Some(ChatCommand::Exit) => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            Some(ChatCommand::History) => {
                let messages = service.conversation().messages();
                if messages.is_empty() {
                    println!("\n  {}\n", style("No messages yet.").dim());
                } else {
                    renderer.print_history(messages);
                }
                continue;
            }
            Some(ChatCommand::Suggest) => {
                println!();
                print_suggestions(&suggestions);
                continue;
            }
            Some(ChatCommand::Ask(n)) => match suggestions.pick(n) {
                Some(q) => {
                    println!("  {} {}", style("Bạn >").green().bold(), q);
                    q.to_string()
                }
                None => {
                    println!(
                        "\n  {} No suggestion #{n}. Type /suggest to list them.\n",
                        style("?").yellow().bold()
                    );
                    continue;
                }
            },
            Some(ChatCommand::Sql) => {
                match service.last_reply().and_then(|r| r.sql.as_deref()) {
                    Some(sql) => print!("{}", renderer.render_answer(&format!("```sql\n{sql}\n```"))),
                    None => println!("\n  {}\n", style("The last answer did not report any SQL.").dim()),
                }
                continue;
            }
            Some(ChatCommand::Unknown(cmd_name)) => {
                println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(cmd_name).dim()
                );
                continue;
            }
        };

        if !question.trim().is_empty() {
            exchanges += 1;
        }
        run_exchange(&mut service, &renderer, &question, exchanges).await;
    }

    chat_input.flush();
    info!(
        exchanges,
        messages = service.conversation().len(),
        "Chat session ended"
    );
    Ok(())
}
