//! Interactive terminal front end.

pub mod commands;
pub mod input;
pub mod view;

use std::io::Write;

use console::style;
use guru_common::GuruError;
use tokio::io::BufReader;
use tracing::{debug, warn};

use crate::chat::{ConversationView, TurnOrchestrator};
use commands::ChatCommand;
use input::{InputEvent, LineReader};
pub use view::TerminalView;

fn print_banner(orchestrator: &TurnOrchestrator) {
    println!();
    println!(
        "  {} {}",
        style("Grammar Guru").cyan().bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim()
    );
    println!(
        "  {}",
        style(format!("model: {}", orchestrator.sessions().settings().model)).dim()
    );
    if orchestrator.store().restored() {
        println!(
            "  {}",
            style(format!(
                "restored {} earlier messages",
                orchestrator.messages().len()
            ))
            .dim()
        );
    }
    if !orchestrator.sessions().credential_available() {
        println!(
            "  {}",
            style("No API key found. Set GEMINI_API_KEY (or VAIT_API_KEY) to chat.").yellow()
        );
    }
    println!("  {}", style("Type /help for commands.").dim());
    println!();
}

const UNDECODABLE_NOTICE: &str =
    "That line could not be read as UTF-8. Check your terminal encoding and try again.";

const RESET_PROMPT: &str = "대화 내용을 초기화 하시겠습니까?";

/// Ask before wiping the conversation. Non-interactive input never confirms.
fn confirm_reset() -> bool {
    let answer = tokio::task::block_in_place(|| {
        dialoguer::Confirm::new()
            .with_prompt(RESET_PROMPT)
            .default(false)
            .interact()
    });
    match answer {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Reset confirmation unavailable: {e}");
            false
        }
    }
}

fn prompt() {
    print!("{} ", style("›").green().bold());
    let _ = std::io::stdout().flush();
}

/// Run the chat until `/exit` or end of input.
pub async fn run(
    mut orchestrator: TurnOrchestrator,
    ask_before_reset: bool,
) -> Result<(), GuruError> {
    let mut view = TerminalView::new();
    print_banner(&orchestrator);
    view.render(orchestrator.messages(), false);

    let mut input = LineReader::new(BufReader::new(tokio::io::stdin()));
    loop {
        prompt();
        let line = match input.read_line().await? {
            InputEvent::Line(line) => line,
            InputEvent::Undecodable => {
                warn!("Discarded input line that is not valid UTF-8");
                println!("  {}\n", style(UNDECODABLE_NOTICE).yellow());
                continue;
            }
            InputEvent::Eof => {
                debug!("End of input");
                println!();
                break;
            }
        };

        match commands::parse(&line) {
            Some(ChatCommand::Exit) => break,
            Some(ChatCommand::Help) => commands::print_help(),
            Some(ChatCommand::History) => {
                let origin = if orchestrator.store().restored() {
                    "restored from a previous run"
                } else {
                    "started this run"
                };
                println!(
                    "  {}\n",
                    style(format!(
                        "{} messages in this conversation ({origin})",
                        orchestrator.messages().len()
                    ))
                    .dim()
                );
            }
            Some(ChatCommand::Reset) => {
                if !ask_before_reset || confirm_reset() {
                    orchestrator.reset_conversation(&mut view);
                }
            }
            Some(ChatCommand::Unknown(cmd)) => {
                println!(
                    "  {} {}\n",
                    style(format!("Unknown command: {cmd}")).yellow(),
                    style("(try /help)").dim()
                );
            }
            None => {
                let outcome = orchestrator.submit(&line, &mut view).await;
                debug!(?outcome, "Turn finished");
            }
        }
    }

    println!("{}", style("Bye!").dim());
    Ok(())
}
