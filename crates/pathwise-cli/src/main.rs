//! Pathwise CLI entry point.
//!
//! Binary name: `pathwise`
//!
//! Parses CLI arguments, sets up logging, loads the client config, then
//! dispatches to the matching flow or starts the interactive shell.

mod cli;
mod render;
mod state;

use clap::Parser;
use clap_complete::generate;
use pathwise_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_directive};

use cli::{Cli, Commands, flows};
use render::{OutputMode, Renderer};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let directive = if cli.quiet && cli.verbose == 0 {
        "error"
    } else {
        verbosity_directive(cli.verbose)
    };
    init_tracing(directive, cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut renderer = Renderer::new(OutputMode::from_flags(cli.json, cli.quiet));

    // These need neither config nor backend.
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "pathwise", &mut std::io::stdout());
            return Ok(());
        }
        Commands::PasswordStrength { password } => {
            return flows::password_strength(&renderer, password);
        }
        _ => {}
    }

    let mut state = AppState::init(cli.base_url.clone()).await?;

    if let Some((kind, args)) = cli.command.service() {
        return flows::service(&mut state, &mut renderer, kind, args).await;
    }

    match cli.command {
        Commands::Shell => cli::shell::loop_runner::run_shell(&mut state, &mut renderer).await,
        Commands::Chat { message } => flows::chat(&mut state, &mut renderer, &message).await,
        Commands::Signup => flows::signup(&mut state, &mut renderer).await,
        Commands::Login => flows::login(&mut state, &mut renderer).await,
        Commands::ForgotPassword { email } => {
            flows::forgot_password(&mut state, &mut renderer, email).await
        }
        Commands::Contact => flows::contact(&mut state, &mut renderer).await,
        Commands::Assess(_)
        | Commands::Skills(_)
        | Commands::Resume(_)
        | Commands::Market(_)
        | Commands::Learning(_)
        | Commands::Completions { .. }
        | Commands::PasswordStrength { .. } => Ok(()),
    }
}
