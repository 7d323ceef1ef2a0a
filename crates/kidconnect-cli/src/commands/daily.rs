//! Daily campaign command.

use crate::output;
use chrono::{Local, NaiveDate};
use clap::Args;
use kidconnect_core::{format_date, parse_date, Config};
use kidconnect_dispatch::DailyCampaignDispatcher;
use std::sync::Arc;

/// Daily command arguments.
#[derive(Args)]
pub struct DailyArgs {
    /// Day to send (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,
}

pub(crate) fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Run the daily command.
pub async fn run(args: DailyArgs, config: Config) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let stores = super::open_stores(&config)?;
    let ctx = super::dispatch_context(&config, &stores)?;
    let dispatcher = DailyCampaignDispatcher::new(ctx, Arc::new(stores.schedule.clone()))
        .with_closing_line(config.dispatch.closing_line.clone())
        .skip_already_delivered(config.dispatch.skip_already_delivered);

    let summary = dispatcher.run_daily_campaign(date).await?;
    if summary.aggregated_items == 0 {
        println!("No messages are scheduled for {}.", format_date(date));
        return Ok(());
    }

    println!(
        "Found {} message(s) scheduled for {}.",
        summary.aggregated_items,
        format_date(date)
    );
    output::print_summary(&summary);
    Ok(())
}
