//! Slash commands understood by the chat prompt.

use console::style;

#[derive(Debug, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    /// Wipe the conversation and start over.
    Reset,
    /// Show how many messages are stored.
    History,
    Exit,
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`; such lines are
/// sentences for the model.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/reset" | "/clear" | "/new" => Some(ChatCommand::Reset),
        "/history" => Some(ChatCommand::History),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

pub fn print_help() {
    println!();
    println!("  {}", style("Commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}    {}", style("/reset").cyan(), "Start a new conversation");
    println!("  {}  {}", style("/history").cyan(), "Show stored conversation size");
    println!("  {}     {}", style("/exit").cyan(), "Leave Grammar Guru");
    println!();
    println!(
        "  {}",
        style("Anything else is sent to the coach. Ctrl+D exits.").dim()
    );
    println!();
}
