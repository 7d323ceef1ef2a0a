//! Parent directory commands.

use clap::Args;
use console::style;
use kidconnect_core::{Config, Recipient};
use kidconnect_store::{parse_records, RecipientDirectory};
use std::path::PathBuf;

/// Recipients command arguments.
#[derive(Args)]
pub struct RecipientsArgs {
    #[command(subcommand)]
    pub command: RecipientsCommand,
}

#[derive(clap::Subcommand)]
pub enum RecipientsCommand {
    /// Replace the directory with the records in a JSON file
    Import {
        /// JSON or JSON5 array of {Parent, PhoneNumber, Class} records
        file: PathBuf,
    },

    /// List the directory
    List,
}

/// Run the recipients command.
pub async fn run(args: RecipientsArgs, config: Config) -> anyhow::Result<()> {
    let stores = super::open_stores(&config)?;

    match args.command {
        RecipientsCommand::Import { file } => {
            let content = tokio::fs::read_to_string(&file).await?;
            let recipients: Vec<Recipient> = parse_records(&content)?;
            let count = recipients.len();
            stores.directory.replace_all(recipients).await?;
            println!("Imported {} recipient(s) from {}", count, file.display());
        }

        RecipientsCommand::List => {
            let recipients = stores.directory.list_all().await?;
            if recipients.is_empty() {
                println!("No recipients. Import some with 'kidconnect recipients import <file>'.");
                return Ok(());
            }

            let whitelist = config.vonage.whitelist();
            println!("{:<24} {:<16} {:<12} {}", "NAME", "NUMBER", "CLASS", "WHITELISTED");
            for r in &recipients {
                let listed = if whitelist.contains(r.trimmed_number()) {
                    style("yes").green()
                } else {
                    style("no").dim()
                };
                println!("{:<24} {:<16} {:<12} {}", r.name, r.trimmed_number(), r.class, listed);
            }
            println!("\n{} recipient(s)", recipients.len());
        }
    }

    Ok(())
}
