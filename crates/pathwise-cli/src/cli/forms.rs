//! Interactive prompts for the dialogs.
//!
//! Prompts only collect input; checking it is the controller's job. Empty
//! answers are allowed everywhere so the controller can report them.

use anyhow::Result;
use dialoguer::{Input, Password, Select};
use pathwise_core::controller::auth::password_strength_effect;
use pathwise_core::controller::{ContactForm, LoginForm, SignupForm};
use pathwise_core::service::ServiceInputs;
use pathwise_types::service::{FieldSpec, ServiceKind};
use secrecy::SecretString;

use super::ServiceArgs;
use crate::render::Renderer;

fn text(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn secret(prompt: &str) -> Result<SecretString> {
    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(SecretString::from(value))
}

pub fn prompt_login() -> Result<LoginForm> {
    Ok(LoginForm {
        username: text("Username")?,
        password: secret("Password")?,
    })
}

/// Signup prompts. The strength indicator is shown once the password is
/// entered, before asking for confirmation.
pub fn prompt_signup(renderer: &mut Renderer) -> Result<SignupForm> {
    let full_name = text("Full name")?;
    let username = text("Username")?;
    let email = text("Email")?;

    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    renderer.render(&password_strength_effect(&password));
    let confirm_password = secret("Confirm password")?;

    Ok(SignupForm {
        full_name,
        username,
        email,
        password: SecretString::from(password),
        confirm_password,
    })
}

pub fn prompt_email() -> Result<String> {
    text("Email")
}

pub fn prompt_contact() -> Result<ContactForm> {
    Ok(ContactForm {
        name: text("Name")?,
        email: text("Email")?,
        subject: text("Subject")?,
        message: text("Message")?,
    })
}

fn prompt_field(field: &FieldSpec) -> Result<String> {
    if field.is_choice() {
        let index = Select::new()
            .with_prompt(field.label)
            .items(field.choices)
            .default(0)
            .interact()?;
        Ok(field.choices[index].to_string())
    } else {
        text(field.label)
    }
}

/// Collect a service form: `--set` presets first, then a prompt for every
/// field still missing unless `--no-input` was given.
pub fn prompt_service(kind: ServiceKind, args: &ServiceArgs) -> Result<ServiceInputs> {
    let mut inputs: ServiceInputs = args.fields.iter().cloned().collect();
    if args.no_input {
        return Ok(inputs);
    }

    for field in kind.descriptor().fields {
        if inputs.get(field.name).is_some_and(|v| !v.is_empty()) {
            continue;
        }
        inputs.set(field.name, prompt_field(field)?);
    }
    Ok(inputs)
}
