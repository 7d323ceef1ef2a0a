//! CLI command implementations.

pub mod config;
pub mod daily;
pub mod log;
pub mod recipients;
pub mod schedule;
pub mod send;

use kidconnect_channels::VonageTransport;
use kidconnect_core::Config;
use kidconnect_dispatch::{pacer_for, DispatchContext, RecipientFilter};
use kidconnect_store::FileStores;
use std::sync::Arc;

/// Open the file-backed stores under the configured data directory.
pub(crate) fn open_stores(config: &Config) -> anyhow::Result<FileStores> {
    let dir = config.data_dir()?;
    tracing::debug!(data_dir = %dir.display(), "Opening stores");
    Ok(FileStores::in_dir(dir))
}

/// Wire stores, transport, whitelist and pacing for a dispatch run.
pub(crate) fn dispatch_context(config: &Config, stores: &FileStores) -> anyhow::Result<DispatchContext> {
    config.validate()?;
    let transport = VonageTransport::from_config(&config.vonage)?;

    Ok(DispatchContext::new(
        Arc::new(stores.directory.clone()),
        Arc::new(stores.log.clone()),
        Arc::new(transport),
        RecipientFilter::new(config.vonage.whitelist()),
    )
    .with_pacer(pacer_for(config.dispatch.send_interval())))
}
