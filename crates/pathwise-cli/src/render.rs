//! Terminal rendering adapter for controller effects.
//!
//! The controller decides what happens; this module only turns each
//! [`UiEffect`] into lines on the terminal. Message auto-clears have no
//! meaning on a scrolling terminal and are dropped. Delayed dialog
//! transitions are honored by sleeping before they are applied.

use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pathwise_types::chat::{ChatMessage, Sender};
use pathwise_types::password::{PasswordStrength, StrengthLevel};
use pathwise_types::service::ServicePanel;
use pathwise_types::ui::{Severity, UiEffect};

/// How effects reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Styled,
    /// Results and errors only: no confirmations, headers or spinners.
    Quiet,
    /// One JSON object per effect, undelayed and unexpanded.
    Json,
}

impl OutputMode {
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Styled
        }
    }
}

pub struct Renderer {
    mode: OutputMode,
    /// Echo the user's own chat messages. Off in the shell, where the
    /// message is already on screen.
    echo_user: bool,
}

impl Renderer {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            echo_user: true,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn set_echo_user(&mut self, echo: bool) {
        self.echo_user = echo;
    }

    /// Apply effects in order, waiting out delayed groups.
    pub async fn apply(&mut self, effects: Vec<UiEffect>) {
        if self.mode == OutputMode::Json {
            for effect in &effects {
                match serde_json::to_string(effect) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!(error = %e, "Failed to serialize effect"),
                }
            }
            return;
        }

        let mut queue: VecDeque<UiEffect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                UiEffect::Delayed { delay_ms, effects } => {
                    if only_clears(&effects) {
                        continue;
                    }
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    for delayed in effects.into_iter().rev() {
                        queue.push_front(delayed);
                    }
                }
                other => self.render(&other),
            }
        }
    }

    /// Render one effect immediately. Delayed groups are ignored here.
    pub fn render(&mut self, effect: &UiEffect) {
        if self.mode == OutputMode::Json {
            if let Ok(line) = serde_json::to_string(effect) {
                println!("{line}");
            }
            return;
        }
        if self.mode == OutputMode::Quiet && !is_result(effect) {
            return;
        }
        if !self.echo_user
            && matches!(effect, UiEffect::AppendChat(m) if m.sender == Sender::User)
        {
            return;
        }

        if let Some(text) = format_effect(effect) {
            if is_error(effect) {
                eprintln!("{text}");
            } else {
                println!("{text}");
            }
        }
    }

    /// Run `future` behind a spinner. No spinner in quiet or JSON mode.
    pub async fn busy<F: Future>(&self, message: &str, future: F) -> F::Output {
        if self.mode != OutputMode::Styled {
            return future.await;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        let output = future.await;
        spinner.finish_and_clear();
        output
    }
}

fn only_clears(effects: &[UiEffect]) -> bool {
    effects
        .iter()
        .all(|e| matches!(e, UiEffect::ClearMessage(_)))
}

fn is_error(effect: &UiEffect) -> bool {
    matches!(
        effect,
        UiEffect::ShowMessage {
            severity: Severity::Error,
            ..
        }
    )
}

/// Effects still shown in quiet mode.
fn is_result(effect: &UiEffect) -> bool {
    is_error(effect)
        || matches!(
            effect,
            UiEffect::AppendChat(ChatMessage {
                sender: Sender::Bot,
                ..
            }) | UiEffect::SetOutput { .. }
                | UiEffect::ShowSavedChats(_)
        )
}

fn chat_line(message: &ChatMessage) -> String {
    match message.sender {
        Sender::User => format!("  {} {}", style("You >").green().bold(), message.text),
        Sender::Bot => format!(
            "\n  {} {}\n",
            style("Pathwise").cyan().bold(),
            message.text.trim()
        ),
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn strength_label(level: StrengthLevel) -> String {
    let label = match level {
        StrengthLevel::Weak => style("Weak").red(),
        StrengthLevel::Medium => style("Medium").yellow(),
        StrengthLevel::Strong => style("Strong").green(),
    };
    format!("{}", label.bold())
}

/// Terminal text for one effect, or `None` when it has no visible form.
pub fn format_effect(effect: &UiEffect) -> Option<String> {
    match effect {
        UiEffect::ShowMessage { text, severity, .. } => Some(match severity {
            Severity::Success => format!("  {} {}", style("✓").green().bold(), text),
            Severity::Error => format!("  {} {}", style("✗").red().bold(), text),
        }),
        UiEffect::OpenDialog(dialog) => Some(format!(
            "\n  {}\n  {}",
            style(dialog.title()).cyan().bold(),
            style("---").dim()
        )),
        UiEffect::AppendChat(message) => Some(chat_line(message)),
        UiEffect::ClearTranscript => Some(format!("  {}", style("Transcript cleared.").dim())),
        UiEffect::ReplaceTranscript(messages) => {
            let mut out = format!("\n  {}", style("Conversation history").bold());
            for message in messages {
                out.push('\n');
                out.push_str(&chat_line(message));
            }
            Some(out)
        }
        UiEffect::SetOutput { kind, text } => Some(format!(
            "\n  {}\n\n{}\n",
            style(ServicePanel::Form(*kind).title()).cyan().bold(),
            indent(text)
        )),
        UiEffect::SetAuthDisplay(Some(username)) => Some(format!(
            "  {} {}",
            style("Logged in as").dim(),
            style(username).cyan().bold()
        )),
        UiEffect::SetAuthDisplay(None) => Some(format!("  {}", style("Not logged in.").dim())),
        UiEffect::ShowSavedChats(chats) if !chats.is_empty() => {
            Some(saved_chats_table(chats).to_string())
        }
        UiEffect::PasswordStrength(Some(level)) => Some(format!(
            "  {} {}",
            style("Password strength:").dim(),
            strength_label(*level)
        )),
        UiEffect::Acknowledge(text) => Some(format!("  {} {}", style("*").cyan().bold(), text)),
        UiEffect::ShowSavedChats(_)
        | UiEffect::PasswordStrength(None)
        | UiEffect::ClearMessage(_)
        | UiEffect::CloseDialog(_)
        | UiEffect::ClearChatInput
        | UiEffect::SetLoading(_)
        | UiEffect::SetSubmitState { .. }
        | UiEffect::Delayed { .. } => None,
    }
}

pub fn saved_chats_table(chats: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Saved").fg(Color::White),
        Cell::new("Title").fg(Color::White),
    ]);

    for entry in chats {
        let (when, title) = entry.split_once(" - ").unwrap_or(("", entry.as_str()));
        table.add_row(vec![
            Cell::new(when).fg(Color::DarkGrey),
            Cell::new(title).fg(Color::Cyan),
        ]);
    }
    table
}

/// Criteria breakdown for `pathwise password-strength`.
pub fn strength_table(strength: &PasswordStrength) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Criterion").fg(Color::White),
        Cell::new("Met").fg(Color::White),
    ]);

    let rows = [
        ("At least 8 characters", strength.min_length),
        ("Uppercase letter", strength.has_upper),
        ("Lowercase letter", strength.has_lower),
        ("Number", strength.has_number),
        ("Special character", strength.has_special),
    ];
    for (label, met) in rows {
        let cell = if met {
            Cell::new("✓").fg(Color::Green)
        } else {
            Cell::new("✗").fg(Color::Red)
        };
        table.add_row(vec![Cell::new(label), cell]);
    }
    table
}

pub fn print_strength_report(strength: &PasswordStrength) {
    println!();
    println!(
        "  {} {} ({}/5)",
        style("Strength:").bold(),
        strength_label(strength.level()),
        strength.score
    );
    println!();
    println!("{}", strength_table(strength));
    println!();
}
