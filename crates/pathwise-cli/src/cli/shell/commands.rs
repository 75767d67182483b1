//! Slash command parsing for the shell.
//!
//! Anything not starting with `/` is a chat message.

use console::style;
use pathwise_types::service::ServiceKind;

#[derive(Debug, PartialEq)]
pub enum ShellCommand {
    Help,
    Exit,
    /// Clear the terminal screen.
    Cls,
    Login,
    Signup,
    Logout,
    /// Forgot password, with an optional email.
    Forgot(Option<String>),
    Service(ServiceKind),
    /// Clear the conversation on the backend.
    ClearChat,
    SaveChat,
    /// Print the local transcript.
    History,
    Contact,
    /// Score a password without signing up.
    Strength(String),
    Unknown(String),
}

/// Parse input as a slash command. Returns `None` for chat messages.
pub fn parse(input: &str) -> Option<ShellCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(' ') {
        Some((cmd, arg)) => (cmd.to_lowercase(), Some(arg.trim().to_string())),
        None => (trimmed.to_lowercase(), None),
    };
    let arg = arg.filter(|a| !a.is_empty());

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ShellCommand::Help,
        "/exit" | "/quit" | "/q" => ShellCommand::Exit,
        "/cls" => ShellCommand::Cls,
        "/login" => ShellCommand::Login,
        "/signup" | "/register" => ShellCommand::Signup,
        "/logout" => ShellCommand::Logout,
        "/forgot" | "/forgot-password" => ShellCommand::Forgot(arg),
        "/clear" => ShellCommand::ClearChat,
        "/save" => ShellCommand::SaveChat,
        "/history" => ShellCommand::History,
        "/contact" => ShellCommand::Contact,
        "/strength" => match arg {
            Some(password) => ShellCommand::Strength(password),
            None => ShellCommand::Unknown("/strength requires a password".to_string()),
        },
        other => match other.trim_start_matches('/').parse::<ServiceKind>() {
            Ok(kind) => ShellCommand::Service(kind),
            Err(_) => ShellCommand::Unknown(other.to_string()),
        },
    };
    Some(command)
}

pub fn print_help() {
    let rows = [
        ("/login", "Log in"),
        ("/signup", "Create an account"),
        ("/logout", "Log out"),
        ("/forgot [email]", "Request a password reset"),
        ("/assess", "Career assessment"),
        ("/skills", "Skills analysis"),
        ("/resume", "Resume enhancement"),
        ("/market", "Market insights"),
        ("/learning", "Learning resources"),
        ("/clear", "Clear the conversation"),
        ("/save", "Save the conversation (login required)"),
        ("/history", "Show the conversation so far"),
        ("/contact", "Contact the team"),
        ("/strength <pw>", "Check password strength"),
        ("/cls", "Clear the screen"),
        ("/help", "Show this help message"),
        ("/exit", "End the session"),
    ];

    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    for (cmd, desc) in rows {
        println!("  {:<18} {}", style(cmd).cyan(), desc);
    }
    println!();
    println!(
        "  {}",
        style("Anything else is sent to the chat assistant. Ctrl+D to exit.").dim()
    );
    println!();
}
