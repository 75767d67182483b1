//! CLI command definitions for the `pathwise` binary.
//!
//! Uses clap derive macros for argument parsing. Every subcommand except
//! `shell` runs one operation against a fresh guest session and exits.

pub mod flows;
pub mod forms;
pub mod shell;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use pathwise_types::service::ServiceKind;

/// Career guidance from the terminal.
#[derive(Parser)]
#[command(name = "pathwise", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output UI effects as JSON lines instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Backend base URL (overrides the config file).
    #[arg(long, global = true, env = "PATHWISE_BASE_URL")]
    pub base_url: Option<String>,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (chat, login, assessments).
    #[command(alias = "repl")]
    Shell,

    /// Send one chat message as a guest and print the reply.
    Chat {
        /// Message text.
        message: String,
    },

    /// Create an account.
    Signup,

    /// Log in and list saved chats.
    Login,

    /// Request a password reset email.
    #[command(name = "forgot-password")]
    ForgotPassword {
        /// Account email (prompted if omitted).
        email: Option<String>,
    },

    /// Career assessment questionnaire.
    #[command(alias = "assessment")]
    Assess(ServiceArgs),

    /// Skills gap analysis.
    Skills(ServiceArgs),

    /// Resume enhancement.
    Resume(ServiceArgs),

    /// Job market insights.
    Market(ServiceArgs),

    /// Learning resource recommendations.
    Learning(ServiceArgs),

    /// Send a message through the contact form.
    Contact,

    /// Score a password against the strength criteria.
    #[command(name = "password-strength")]
    PasswordStrength {
        /// Password to score.
        password: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Inputs for an assessment form. Unset fields are prompted for.
#[derive(Args, Debug, Default)]
pub struct ServiceArgs {
    /// Preset a field, e.g. `--set target_role="Data Scientist"`.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Never prompt; missing fields are submitted empty.
    #[arg(long)]
    pub no_input: bool,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty field name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

impl Commands {
    /// The assessment service a subcommand targets, if any.
    pub fn service(&self) -> Option<(ServiceKind, &ServiceArgs)> {
        match self {
            Commands::Assess(args) => Some((ServiceKind::Assessment, args)),
            Commands::Skills(args) => Some((ServiceKind::Skills, args)),
            Commands::Resume(args) => Some((ServiceKind::Resume, args)),
            Commands::Market(args) => Some((ServiceKind::Market, args)),
            Commands::Learning(args) => Some((ServiceKind::Learning, args)),
            _ => None,
        }
    }
}
