//! Message log command.

use clap::Args;
use kidconnect_core::Config;
use kidconnect_store::DeliveryLog;

/// Log command arguments.
#[derive(Args)]
pub struct LogArgs {
    /// Show only the most recent entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Run the log command.
pub async fn run(args: LogArgs, config: Config) -> anyhow::Result<()> {
    let stores = super::open_stores(&config)?;
    let records = stores.log.list_all().await?;

    if records.is_empty() {
        println!("No messages have been sent yet.");
        return Ok(());
    }

    let skip = args
        .limit
        .map_or(0, |limit| records.len().saturating_sub(limit));
    for record in records.iter().skip(skip) {
        println!(
            "{}  {:<20} {:<14} {:<10} {}",
            record.display_timestamp(),
            record.recipient_name,
            record.recipient_number,
            record.class,
            record.message_content.trim_end().replace('\n', " ")
        );
    }
    Ok(())
}
