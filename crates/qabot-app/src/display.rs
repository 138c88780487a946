//! Display surface: where messages, notices, and the working indicator go.

use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use qabot_ai::{Message, Role};

use crate::markdown::MarkdownRenderer;

/// Severity of an out-of-band notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Rendering target for a session.
pub trait DisplaySurface: Send + Sync {
    fn show_message(&self, message: &Message);

    /// Called before the blocking completion call.
    fn begin_working(&self, label: &str);

    /// Called once the completion call returned, successfully or not.
    fn end_working(&self);

    fn notify(&self, level: NoticeLevel, text: &str);
}

/// Line-oriented terminal rendering with an `indicatif` spinner.
///
/// Assistant messages are rendered as markdown; stored content is untouched.
pub struct TerminalDisplay {
    spinner: Mutex<Option<ProgressBar>>,
    markdown: MarkdownRenderer,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            markdown: MarkdownRenderer::new(),
        }
    }

    /// Print the title block shown once at startup.
    pub fn show_banner(&self, title: &str, disclaimer: &str) {
        let rule = "=".repeat(title.chars().count().max(disclaimer.chars().count()).min(72));
        println!("{title}");
        println!("{disclaimer}");
        println!("{rule}");
    }

    fn label(role: Role) -> &'static str {
        match role {
            Role::User => "you",
            Role::Assistant => "bot",
            Role::System => "sys",
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for TerminalDisplay {
    fn show_message(&self, message: &Message) {
        let label = Self::label(message.role);
        if message.role == Role::Assistant {
            println!("[{label}]");
            let rendered = self
                .markdown
                .render(&message.content, MarkdownRenderer::terminal_width());
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
            let _ = std::io::stdout().flush();
            return;
        }

        let mut lines = message.content.lines();
        println!("[{label}] {}", lines.next().unwrap_or(""));
        for line in lines {
            println!("      {line}");
        }
    }

    fn begin_working(&self, label: &str) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(old) = slot.replace(bar) {
                old.finish_and_clear();
            }
        }
    }

    fn end_working(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }

    fn notify(&self, level: NoticeLevel, text: &str) {
        match level {
            NoticeLevel::Info => println!("(i) {text}"),
            NoticeLevel::Error => eprintln!("(!) {text}"),
        }
    }
}
