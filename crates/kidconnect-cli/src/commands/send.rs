//! Immediate broadcast command.

use crate::output;
use clap::Args;
use kidconnect_core::Config;
use kidconnect_dispatch::ImmediateBroadcastDispatcher;

/// Send command arguments.
#[derive(Args)]
pub struct SendArgs {
    /// Message text; each parent receives "Hi <name>, <message>"
    pub message: String,

    /// Only message parents in this class
    #[arg(long)]
    pub class: Option<String>,
}

/// Run the send command.
pub async fn run(args: SendArgs, config: Config) -> anyhow::Result<()> {
    if args.message.is_empty() {
        println!("Nothing to send: the message is empty.");
        return Ok(());
    }

    let stores = super::open_stores(&config)?;
    let ctx = super::dispatch_context(&config, &stores)?;
    let dispatcher = ImmediateBroadcastDispatcher::new(ctx)
        .with_all_classes_label(config.dispatch.all_classes_label.clone());

    let summary = dispatcher
        .broadcast(&args.message, args.class.as_deref())
        .await?;

    output::print_summary(&summary);
    Ok(())
}
