//! One operation per dialog: open it, prompt, submit, render.
//!
//! Shared by the one-shot subcommands and the interactive shell.

use anyhow::Result;
use pathwise_core::validate::validate_password;
use pathwise_types::service::{ServiceKind, ServicePanel};
use pathwise_types::ui::Dialog;

use super::forms;
use super::ServiceArgs;
use crate::render::{OutputMode, Renderer, print_strength_report};
use crate::state::AppState;

pub async fn signup(state: &mut AppState, renderer: &mut Renderer) -> Result<()> {
    renderer
        .apply(state.controller.open_dialog(Dialog::Signup))
        .await;
    let form = forms::prompt_signup(renderer)?;
    let effects = renderer
        .busy("Creating account...", state.controller.signup(&form))
        .await;
    renderer.apply(effects).await;
    Ok(())
}

pub async fn login(state: &mut AppState, renderer: &mut Renderer) -> Result<()> {
    renderer
        .apply(state.controller.open_dialog(Dialog::Login))
        .await;
    let form = forms::prompt_login()?;
    let effects = renderer
        .busy("Logging in...", state.controller.login(&form))
        .await;
    renderer.apply(effects).await;
    Ok(())
}

pub async fn forgot_password(
    state: &mut AppState,
    renderer: &mut Renderer,
    email: Option<String>,
) -> Result<()> {
    renderer
        .apply(state.controller.open_dialog(Dialog::ForgotPassword))
        .await;
    let email = match email {
        Some(email) => email,
        None => forms::prompt_email()?,
    };
    let effects = renderer
        .busy("Sending reset link...", state.controller.forgot_password(&email))
        .await;
    renderer.apply(effects).await;
    Ok(())
}

pub async fn service(
    state: &mut AppState,
    renderer: &mut Renderer,
    kind: ServiceKind,
    args: &ServiceArgs,
) -> Result<()> {
    renderer
        .apply(
            state
                .controller
                .open_dialog(Dialog::Service(ServicePanel::Form(kind))),
        )
        .await;
    let inputs = forms::prompt_service(kind, args)?;
    let effects = renderer
        .busy("Processing...", state.controller.submit_service(kind, &inputs))
        .await;
    renderer.apply(effects).await;
    Ok(())
}

pub async fn contact(state: &mut AppState, renderer: &mut Renderer) -> Result<()> {
    let form = forms::prompt_contact()?;
    let effects = renderer
        .busy("Sending...", state.controller.contact(&form))
        .await;
    renderer.apply(effects).await;
    Ok(())
}

pub async fn chat(state: &mut AppState, renderer: &mut Renderer, message: &str) -> Result<()> {
    let effects = renderer
        .busy("thinking...", state.controller.send_message(message))
        .await;
    renderer.apply(effects).await;
    Ok(())
}

/// Score a password locally. Needs no backend.
pub fn password_strength(renderer: &Renderer, password: &str) -> Result<()> {
    let strength = validate_password(password);
    match renderer.mode() {
        OutputMode::Json => {
            let report = serde_json::json!({
                "strength": strength,
                "level": strength.level(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputMode::Quiet => println!("{}", strength.level()),
        OutputMode::Styled => print_strength_report(&strength),
    }
    Ok(())
}
