//! KidConnect command-line interface.

pub mod commands;
pub mod logging;
pub mod output;

use clap::{Parser, Subcommand};
use kidconnect_core::{Config, ConfigError};

/// KidConnect - WhatsApp notifications for school parents
#[derive(Parser)]
#[command(name = "kidconnect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, env = "KIDCONNECT_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a message to parents right now
    Send(commands::send::SendArgs),

    /// Send the content scheduled for a day
    Daily(commands::daily::DailyArgs),

    /// Manage the parent directory
    Recipients(commands::recipients::RecipientsArgs),

    /// Manage scheduled content
    Schedule(commands::schedule::ScheduleArgs),

    /// Show the message log
    Log(commands::log::LogArgs),

    /// Configuration management
    Config(commands::config::ConfigArgs),

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments and resolved configuration.
pub async fn run(cli: Cli, config: Result<Config, ConfigError>) -> anyhow::Result<()> {
    match cli.command {
        Commands::Send(args) => commands::send::run(args, config?).await,
        Commands::Daily(args) => commands::daily::run(args, config?).await,
        Commands::Recipients(args) => commands::recipients::run(args, config?).await,
        Commands::Schedule(args) => commands::schedule::run(args, config?).await,
        Commands::Log(args) => commands::log::run(args, config?).await,
        Commands::Config(args) => commands::config::run(args, cli.config, config).await,
        Commands::Version => {
            println!("kidconnect {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
