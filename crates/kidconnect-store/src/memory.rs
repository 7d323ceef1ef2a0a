//! In-memory stores.

use crate::traits::{DeliveryLog, RecipientDirectory, ScheduleStore};
use crate::Result;
use async_trait::async_trait;
use kidconnect_core::{DeliveryRecord, Recipient, ScheduledItem};
use tokio::sync::RwLock;

/// Recipient directory held in memory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    recipients: RwLock<Vec<Recipient>>,
}

impl MemoryDirectory {
    /// Create a directory with initial recipients.
    pub fn new(recipients: Vec<Recipient>) -> Self {
        Self {
            recipients: RwLock::new(recipients),
        }
    }
}

#[async_trait]
impl RecipientDirectory for MemoryDirectory {
    async fn list_all(&self) -> Result<Vec<Recipient>> {
        Ok(self.recipients.read().await.clone())
    }

    async fn replace_all(&self, recipients: Vec<Recipient>) -> Result<()> {
        *self.recipients.write().await = recipients;
        Ok(())
    }
}

/// Schedule held in memory.
#[derive(Debug, Default)]
pub struct MemorySchedule {
    items: RwLock<Vec<ScheduledItem>>,
}

impl MemorySchedule {
    /// Create a schedule with initial items.
    pub fn new(items: Vec<ScheduledItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ScheduleStore for MemorySchedule {
    async fn list_all(&self) -> Result<Vec<ScheduledItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn replace_all(&self, items: Vec<ScheduledItem>) -> Result<()> {
        *self.items.write().await = items;
        Ok(())
    }
}

/// Delivery log held in memory.
#[derive(Debug, Default)]
pub struct MemoryDeliveryLog {
    records: RwLock<Vec<DeliveryRecord>>,
}

impl MemoryDeliveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records appended so far.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl DeliveryLog for MemoryDeliveryLog {
    async fn append(&self, record: DeliveryRecord) -> Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<DeliveryRecord>> {
        Ok(self.records.read().await.clone())
    }
}
