//! Slash command parsing for the chat loop.
//!
//! Commands start with `/`. Anything else is a question for the assistant.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the conversation and the screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Re-render the conversation so far.
    History,
    /// List the suggested questions.
    Suggest,
    /// Send suggested question N (1-based).
    Ask(usize),
    /// Show the SQL the backend reported for the last answer.
    Sql,
    /// Unknown command or bad argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/suggest" | "/s" => Some(ChatCommand::Suggest),
        "/sql" => Some(ChatCommand::Sql),
        "/ask" | "/a" => match arg.map(str::parse::<usize>) {
            Some(Ok(n)) => Some(ChatCommand::Ask(n)),
            _ => Some(ChatCommand::Unknown(
                "/ask requires a suggestion number".to_string(),
            )),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}    {}", style("/clear").cyan(), "Clear the conversation");
    println!("  {}  {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {}  {}", style("/suggest").cyan(), "List suggested questions");
    println!("  {}  {}", style("/ask <n>").cyan(), "Send suggested question n");
    println!("  {}      {}", style("/sql").cyan(), "Show the SQL behind the last answer");
    println!("  {}     {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!(
        "  {}",
        style("Ctrl+D to exit, Ctrl+C keeps the conversation").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/Q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("  /cls  "), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_parse_ask() {
        assert_eq!(parse("/ask 2"), Some(ChatCommand::Ask(2)));
        assert_eq!(parse("/a   3 "), Some(ChatCommand::Ask(3)));
        assert_eq!(
            parse("/ask"),
            Some(ChatCommand::Unknown("/ask requires a suggestion number".to_string()))
        );
        assert_eq!(
            parse("/ask two"),
            Some(ChatCommand::Unknown("/ask requires a suggestion number".to_string()))
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse("/suggest"), Some(ChatCommand::Suggest));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
        assert_eq!(parse("/sql"), Some(ChatCommand::Sql));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("AI SOC là gì?"), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("path a/b"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
