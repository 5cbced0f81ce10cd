//! Codenamer CLI - naming-convention analysis for C# and Vue
//!
//! Analyzes explicit files or whole directories, prints a coloured console
//! report or JSON, and exits with status 1 when naming issues remain.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; stdout is reserved for reports
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze(args) => {
            cli::analyze_command(*args).await?;
        }
        Commands::Mine(args) => {
            cli::mine_command(args).await?;
        }
        Commands::ListRules(args) => {
            cli::list_rules(args).await?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config().await?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args).await?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args).await?;
        }
    }

    Ok(())
}
