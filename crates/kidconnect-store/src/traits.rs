//! Collaborator contracts consumed by the dispatch engine.
//!
//! Every read returns a fresh, ordered snapshot. Implementations may be
//! shared between concurrent runs; no locking is held across calls.

use crate::Result;
use async_trait::async_trait;
use kidconnect_core::{DeliveryRecord, Recipient, ScheduledItem};

/// The list of parents to message.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    /// All recipients in directory order.
    async fn list_all(&self) -> Result<Vec<Recipient>>;

    /// Replace the whole directory (upload workflow).
    async fn replace_all(&self, recipients: Vec<Recipient>) -> Result<()>;
}

/// Dated content waiting to be sent.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// All scheduled items in store order.
    async fn list_all(&self) -> Result<Vec<ScheduledItem>>;

    /// Replace every scheduled item.
    async fn replace_all(&self, items: Vec<ScheduledItem>) -> Result<()>;
}

/// Append-only history of successful sends.
#[async_trait]
pub trait DeliveryLog: Send + Sync {
    /// Append one record.
    async fn append(&self, record: DeliveryRecord) -> Result<()>;

    /// All records in append order.
    async fn list_all(&self) -> Result<Vec<DeliveryRecord>>;
}
