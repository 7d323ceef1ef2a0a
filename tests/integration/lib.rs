//! Shared fixtures for the KidConnect integration tests.

use kidconnect_channels::VonageTransport;
use kidconnect_dispatch::{DispatchContext, RecipientFilter};
use kidconnect_store::FileStores;
use std::sync::Arc;
use wiremock::MockServer;

/// Directory upload as exported from the parent sheet. Phone numbers come
/// through as spreadsheet numbers.
pub const RECIPIENTS_JSON5: &str = r#"[
  { Parent: "Amy", PhoneNumber: 27831112222, Class: "A" },
  { Parent: "Ben", PhoneNumber: "", Class: "A" },
  { Parent: "Cara", PhoneNumber: "27833334444", Class: "B" },
  { Parent: "Dan", PhoneNumber: "27835556666" },
]"#;

/// Numbers allowed to receive messages in the fixtures.
pub const WHITELIST: [&str; 2] = ["27831112222", "27833334444"];

pub const FROM_NUMBER: &str = "14157386102";

/// A transport posting to the mock server.
pub fn mock_transport(server: &MockServer) -> VonageTransport {
    VonageTransport::new("key", "secret", FROM_NUMBER)
        .expect("valid credentials")
        .with_endpoint(format!("{}/v1/messages", server.uri()))
}

/// Dispatch context over file stores and the mock server, without pacing.
pub fn file_context(stores: &FileStores, server: &MockServer) -> DispatchContext {
    DispatchContext::new(
        Arc::new(stores.directory.clone()),
        Arc::new(stores.log.clone()),
        Arc::new(mock_transport(server)),
        RecipientFilter::new(WHITELIST.iter().copied().collect()),
    )
}

/// Parse the JSON bodies the mock server received, in arrival order.
pub async fn received_payloads(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("JSON payload"))
        .collect()
}
