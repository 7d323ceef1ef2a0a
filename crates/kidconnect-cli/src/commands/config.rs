//! Configuration management commands.

use clap::Args;
use kidconnect_core::config::Config;
use kidconnect_core::{paths, ConfigError, SecretString};
use std::path::PathBuf;

/// Config command arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(clap::Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,

    /// Write a default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration
    Validate,
}

/// Run the config command.
pub async fn run(
    args: ConfigArgs,
    path: Option<PathBuf>,
    config: Result<Config, ConfigError>,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let mut config = config?;
            config.vonage.api_key = SecretString::new(config.vonage.api_key.masked());
            config.vonage.api_secret = SecretString::new(config.vonage.api_secret.masked());
            println!("{}", config.to_json5()?);
        }

        ConfigCommand::Init { force } => {
            let path = match path {
                Some(path) => path,
                None => paths::config_file()?,
            };

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {:?}. Use --force to overwrite.",
                    path
                );
            }

            Config::default().save(&path)?;
            println!("Created config file: {:?}", path);
            println!("  Tip: fill in vonage.api_key, vonage.api_secret and vonage.whitelist.");
        }

        ConfigCommand::Path => {
            let path = match path {
                Some(path) => path,
                None => paths::config_file()?,
            };
            println!("{}", path.display());
        }

        ConfigCommand::Validate => match config {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => anyhow::bail!("Configuration error: {}", e),
            },
            Err(e) => anyhow::bail!("Failed to load config: {}", e),
        },
    }

    Ok(())
}
