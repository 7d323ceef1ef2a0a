//! Scheduled content commands.

use super::daily::parse_date_arg;
use chrono::NaiveDate;
use clap::Args;
use kidconnect_core::{Config, ScheduledItem};
use kidconnect_store::{parse_records, ScheduleStore};
use std::path::PathBuf;

/// Schedule command arguments.
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(clap::Subcommand)]
pub enum ScheduleCommand {
    /// Replace the schedule with the items in a JSON file
    Import {
        /// JSON or JSON5 array of {Date, Message} records
        file: PathBuf,
    },

    /// List scheduled items
    List {
        /// Only show items for this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
}

/// Run the schedule command.
pub async fn run(args: ScheduleArgs, config: Config) -> anyhow::Result<()> {
    let stores = super::open_stores(&config)?;

    match args.command {
        ScheduleCommand::Import { file } => {
            let content = tokio::fs::read_to_string(&file).await?;
            let items: Vec<ScheduledItem> = parse_records(&content)?;
            let count = items.len();
            stores.schedule.replace_all(items).await?;
            println!("Imported {} scheduled item(s) from {}", count, file.display());
        }

        ScheduleCommand::List { date } => {
            let items: Vec<ScheduledItem> = stores
                .schedule
                .list_all()
                .await?
                .into_iter()
                .filter(|item| date.map_or(true, |d| item.is_due_on(d)))
                .collect();

            if items.is_empty() {
                println!("No scheduled items.");
                return Ok(());
            }

            for item in &items {
                println!("{}  {}", item.date, item.body().replace('\n', " "));
            }
            println!("\n{} item(s)", items.len());
        }
    }

    Ok(())
}
