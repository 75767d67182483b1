//! Main shell loop.
//!
//! Reads lines, dispatches slash commands to the dialog flows and sends
//! everything else to the chat assistant. Dialog prompts need the terminal
//! out of raw mode, so the readline handle is dropped around them and
//! recreated with a prompt reflecting the current login.

use console::style;
use tracing::warn;

use super::banner::print_welcome_banner;
use super::commands::{self, ShellCommand};
use super::input::{InputEvent, ShellInput};
use crate::cli::{ServiceArgs, flows};
use crate::render::Renderer;
use crate::state::AppState;

fn prompt_for(user: Option<&str>) -> String {
    match user {
        Some(name) => format!("  {} ", style(format!("{name} >")).green().bold()),
        None => format!("  {} ", style("You >").green().bold()),
    }
}

fn open_input(state: &AppState) -> anyhow::Result<ShellInput> {
    let prompt = prompt_for(state.controller.session().current_user.as_deref());
    let (input, _writer) = ShellInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;
    Ok(input)
}

pub async fn run_shell(state: &mut AppState, renderer: &mut Renderer) -> anyhow::Result<()> {
    renderer.set_echo_user(false);
    print_welcome_banner(
        &state.config.base_url,
        &state.data_dir,
        state.controller.session().current_user.as_deref(),
    );

    let mut input = Some(open_input(state)?);

    loop {
        if input.is_none() {
            input = Some(open_input(state)?);
        }
        let Some(shell_input) = input.as_mut() else {
            break;
        };

        let text = match shell_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Line(text) => text,
        };
        if text.is_empty() {
            continue;
        }

        let Some(command) = commands::parse(&text) else {
            flows::chat(state, renderer, &text).await?;
            continue;
        };

        // Commands that prompt get the terminal back first.
        let result = match command {
            ShellCommand::Help => {
                commands::print_help();
                Ok(())
            }
            ShellCommand::Exit => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            ShellCommand::Cls => {
                shell_input.clear();
                Ok(())
            }
            ShellCommand::Logout => {
                let effects = state.controller.logout();
                renderer.apply(effects).await;
                input = None;
                Ok(())
            }
            ShellCommand::ClearChat => {
                let effects = renderer
                    .busy("Clearing...", state.controller.clear_chat())
                    .await;
                renderer.apply(effects).await;
                Ok(())
            }
            ShellCommand::SaveChat => {
                let effects = renderer
                    .busy("Saving...", state.controller.save_chat())
                    .await;
                renderer.apply(effects).await;
                Ok(())
            }
            ShellCommand::History => {
                print_history(state, renderer);
                Ok(())
            }
            ShellCommand::Strength(password) => flows::password_strength(renderer, &password),
            ShellCommand::Unknown(name) => {
                println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                );
                Ok(())
            }
            ShellCommand::Login => {
                input = None;
                flows::login(state, renderer).await
            }
            ShellCommand::Signup => {
                input = None;
                flows::signup(state, renderer).await
            }
            ShellCommand::Forgot(email) => {
                input = None;
                flows::forgot_password(state, renderer, email).await
            }
            ShellCommand::Service(kind) => {
                input = None;
                flows::service(state, renderer, kind, &ServiceArgs::default()).await
            }
            ShellCommand::Contact => {
                input = None;
                flows::contact(state, renderer).await
            }
        };

        // A cancelled prompt (Esc / Ctrl+C in dialoguer) returns to the shell.
        if let Err(e) = result {
            warn!(error = %e, "Shell command failed");
            eprintln!("\n  {} {e}\n", style("!").red().bold());
        }
    }

    Ok(())
}

fn print_history(state: &AppState, renderer: &mut Renderer) {
    let transcript = state.controller.transcript();
    if transcript.is_empty() {
        println!("\n  {}\n", style("No messages yet.").dim());
        return;
    }
    renderer.set_echo_user(true);
    renderer.render(&pathwise_types::ui::UiEffect::ReplaceTranscript(
        transcript.messages().to_vec(),
    ));
    renderer.set_echo_user(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_shows_user() {
        let guest = console::strip_ansi_codes(&prompt_for(None)).into_owned();
        assert_eq!(guest, "  You > ");
        let ada = console::strip_ansi_codes(&prompt_for(Some("ada"))).into_owned();
        assert_eq!(ada, "  ada > ");
    }
}
