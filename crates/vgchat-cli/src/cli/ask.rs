//! One-shot question: `vgchat ask "..."`.

use std::time::Duration;

use console::style;

use crate::state::AppState;

use super::chat::renderer::ChatRenderer;

/// Ask one question, print the answer, and report a failed exchange
/// through the exit status.
///
/// The fallback message is still printed on failure so the output matches
/// what the interactive chat would show.
pub async fn ask_once(state: &AppState, question: &str, json: bool) -> anyhow::Result<()> {
    let mut service = state.chat_service()?.with_typing_delay(Duration::ZERO);

    let reply = match service.submit(question).await {
        Ok(reply) => reply.clone(),
        Err(rejection) => anyhow::bail!("Nothing sent: {rejection}"),
    };
    let answered = service.last_reply().is_some();

    if json {
        let output = serde_json::json!({
            "messages": service.conversation().messages(),
            "sql": service.last_reply().and_then(|r| r.sql.clone()),
            "ok": answered,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let renderer = ChatRenderer::new(&state.config.assistant_name, false);
        println!("{}", renderer.render_answer(&reply.text).trim_end());
    }

    if !answered {
        if !json {
            eprintln!(
                "  {} {}",
                style("!").red().bold(),
                style("The backend did not answer; run with -v for details.").dim()
            );
        }
        anyhow::bail!("exchange with {} failed", service.backend().endpoint());
    }

    Ok(())
}
