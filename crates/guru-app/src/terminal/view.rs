//! Terminal rendering of the conversation.

use std::sync::OnceLock;
use std::time::Duration;

use chrono::{DateTime, Local};
use console::style;
use guru_common::{Message, Sender};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

use crate::chat::ConversationView;

fn bold_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"))
}

/// Replace `**emphasis**` spans with bold terminal text.
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in bold_pattern().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(&style(inner.as_str()).bold().to_string());
        last = whole.end();
    }
    out.push_str(&text[last..]);
    out
}

fn clock(timestamp: i64) -> String {
    DateTime::from_timestamp_millis(timestamp)
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default()
}

/// One message as printed: a labelled header line followed by the body.
pub fn format_message(message: &Message) -> String {
    let label = match message.sender {
        Sender::User => style("You").green().bold(),
        Sender::Bot => style("Guru").cyan().bold(),
    };
    format!(
        "{label} {}\n{}",
        style(clock(message.timestamp)).dim(),
        render_inline(&message.text)
    )
}

/// Prints messages incrementally and shows a spinner while a reply is pending.
#[derive(Default)]
pub struct TerminalView {
    shown: usize,
    first_id: Option<String>,
    spinner: Option<ProgressBar>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages not yet printed, and whether the conversation was replaced
    /// since the last render.
    fn unseen<'a>(&mut self, messages: &'a [Message]) -> (bool, &'a [Message]) {
        let first = messages.first().map(|m| m.id.as_str());
        let replaced = self.first_id.is_some()
            && (first != self.first_id.as_deref() || messages.len() < self.shown);
        if replaced || self.first_id.is_none() {
            self.shown = 0;
            self.first_id = first.map(str::to_string);
        }
        let start = self.shown.min(messages.len());
        self.shown = messages.len();
        (replaced, &messages[start..])
    }

    fn start_spinner(&mut self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("checking your grammar...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl ConversationView for TerminalView {
    fn render(&mut self, messages: &[Message], busy: bool) {
        self.stop_spinner();
        let (replaced, fresh) = self.unseen(messages);
        if replaced {
            println!("{}\n", style("--- new conversation ---").dim());
        }
        for message in fresh {
            println!("{}\n", format_message(message));
        }
        if busy {
            self.start_spinner();
        }
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}
