//! File-backed stores.
//!
//! Recipients and scheduled items are kept as pretty-printed JSON arrays,
//! rewritten atomically on `replace_all`. The delivery log is JSONL, one
//! record per line, opened in append mode for every write.

use crate::error::StoreError;
use crate::traits::{DeliveryLog, RecipientDirectory, ScheduleStore};
use crate::Result;
use async_trait::async_trait;
use kidconnect_core::paths::{MESSAGE_LOG_FILE, RECIPIENTS_FILE, SCHEDULE_FILE};
use kidconnect_core::{DeliveryRecord, Recipient, ScheduledItem};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

/// Read a JSON array snapshot. A missing file is an empty store.
async fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Replace a JSON array snapshot atomically.
async fn write_snapshot<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(records)?;
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;
    fs::rename(&temp_path, path).await?;

    debug!(path = %path.display(), count = records.len(), "Replaced store snapshot");
    Ok(())
}

/// Recipient directory stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecipientDirectory for JsonFileDirectory {
    async fn list_all(&self) -> Result<Vec<Recipient>> {
        read_snapshot(&self.path).await
    }

    async fn replace_all(&self, recipients: Vec<Recipient>) -> Result<()> {
        write_snapshot(&self.path, &recipients).await
    }
}

/// Schedule stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSchedule {
    path: PathBuf,
}

impl JsonFileSchedule {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScheduleStore for JsonFileSchedule {
    async fn list_all(&self) -> Result<Vec<ScheduledItem>> {
        read_snapshot(&self.path).await
    }

    async fn replace_all(&self, items: Vec<ScheduledItem>) -> Result<()> {
        write_snapshot(&self.path, &items).await
    }
}

/// Delivery log stored as JSON lines.
#[derive(Debug, Clone)]
pub struct JsonlDeliveryLog {
    path: PathBuf,
}

impl JsonlDeliveryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DeliveryLog for JsonlDeliveryLog {
    async fn append(&self, record: DeliveryRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let line = serde_json::to_string(&record)? + "\n";

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<DeliveryRecord>> {
        let file = match fs::File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut lines = BufReader::new(file).lines();
        let mut records = Vec::new();
        let mut line_no = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = line_no,
                    error = %e,
                    "Skipping unreadable delivery log line"
                ),
            }
        }

        Ok(records)
    }
}

/// The three file-backed stores rooted in one data directory.
#[derive(Debug, Clone)]
pub struct FileStores {
    pub directory: JsonFileDirectory,
    pub schedule: JsonFileSchedule,
    pub log: JsonlDeliveryLog,
}

impl FileStores {
    /// Open the stores under `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            directory: JsonFileDirectory::new(dir.join(RECIPIENTS_FILE)),
            schedule: JsonFileSchedule::new(dir.join(SCHEDULE_FILE)),
            log: JsonlDeliveryLog::new(dir.join(MESSAGE_LOG_FILE)),
        }
    }
}
