//! Record stores for KidConnect.
//!
//! The dispatch engine reads recipients and scheduled content and appends to
//! the delivery log through the traits in [`traits`]. Two backends are
//! provided: in-memory stores for tests and embedding, and file-backed stores
//! (JSON snapshots plus a JSONL log) used by the CLI.

pub mod error;
pub mod file;
pub mod import;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use file::{FileStores, JsonFileDirectory, JsonFileSchedule, JsonlDeliveryLog};
pub use import::parse_records;
pub use memory::{MemoryDeliveryLog, MemoryDirectory, MemorySchedule};
pub use traits::{DeliveryLog, RecipientDirectory, ScheduleStore};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
