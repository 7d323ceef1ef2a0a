//! Test doubles shared by the dispatch unit tests.

use async_trait::async_trait;
use kidconnect_channels::{MessageTransport, TransportResult};
use kidconnect_core::{DeliveryRecord, Recipient, ScheduledItem};
use kidconnect_store::{DeliveryLog, RecipientDirectory, ScheduleStore, StoreError};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Records every send and answers with a fixed status.
pub struct RecordingTransport {
    status_code: u16,
    response_body: String,
    unreachable: HashSet<String>,
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingTransport {
    pub fn accepting() -> Self {
        Self::responding(202, r#"{"message_uuid":"test"}"#)
    }

    pub fn responding(status_code: u16, response_body: &str) -> Self {
        Self {
            status_code,
            response_body: response_body.to_string(),
            unreachable: HashSet::new(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Simulate a network failure for one number.
    pub fn failing_for(mut self, number: &str) -> Self {
        self.unreachable.insert(number.to_string());
        self
    }

    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, to_number: &str, body: &str) -> TransportResult {
        self.sent
            .lock()
            .await
            .push((to_number.to_string(), body.to_string()));
        if self.unreachable.contains(to_number) {
            TransportResult::failed("connection refused")
        } else {
            TransportResult::remote(self.status_code, self.response_body.clone())
        }
    }
}

fn down() -> StoreError {
    StoreError::unavailable("store offline")
}

pub struct FailingDirectory;

#[async_trait]
impl RecipientDirectory for FailingDirectory {
    async fn list_all(&self) -> kidconnect_store::Result<Vec<Recipient>> {
        Err(down())
    }

    async fn replace_all(&self, _recipients: Vec<Recipient>) -> kidconnect_store::Result<()> {
        Err(down())
    }
}

pub struct FailingSchedule;

#[async_trait]
impl ScheduleStore for FailingSchedule {
    async fn list_all(&self) -> kidconnect_store::Result<Vec<ScheduledItem>> {
        Err(down())
    }

    async fn replace_all(&self, _items: Vec<ScheduledItem>) -> kidconnect_store::Result<()> {
        Err(down())
    }
}

/// Reads fine, refuses appends.
pub struct FailingLog;

#[async_trait]
impl DeliveryLog for FailingLog {
    async fn append(&self, _record: DeliveryRecord) -> kidconnect_store::Result<()> {
        Err(down())
    }

    async fn list_all(&self) -> kidconnect_store::Result<Vec<DeliveryRecord>> {
        Ok(Vec::new())
    }
}
