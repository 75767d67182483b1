//! Welcome banner for the interactive shell.

use std::path::Path;

use console::style;

pub fn print_welcome_banner(base_url: &str, data_dir: &Path, user: Option<&str>) {
    println!();
    println!("  {}", style("Pathwise").cyan().bold());
    println!("  {}", style("AI career guidance in your terminal").dim());
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(base_url).dim());
    println!(
        "  {}   {}",
        style("Config:").bold(),
        style(data_dir.join("config.toml").display()).dim()
    );
    println!(
        "  {}     {}",
        style("User:").bold(),
        style(user.unwrap_or("guest")).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type a message to chat, /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
