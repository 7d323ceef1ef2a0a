//! KidConnect CLI entry point.

use clap::Parser;
use kidconnect_cli::{logging, run, Cli};
use kidconnect_core::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Config errors surface from the command that needs the config
    let config = Config::resolve(cli.config.as_deref());

    // Initialize logging
    let settings = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    logging::init(cli.verbose, &settings);

    // Run the command
    run(cli, config).await
}
