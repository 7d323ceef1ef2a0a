//! Scheduled content items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar date format used for scheduled items (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Body used when a scheduled item has no message.
pub const DEFAULT_MESSAGE_BODY: &str = "A daily update.";

/// A piece of content scheduled for a calendar date.
///
/// The date stays in its stored string form; matching is exact string
/// equality against the `YYYY-MM-DD` rendering of the target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledItem {
    /// Scheduled date (`YYYY-MM-DD`).
    #[serde(alias = "Date")]
    pub date: String,

    /// Message text.
    #[serde(default, alias = "Message", skip_serializing_if = "Option::is_none")]
    pub message_body: Option<String>,
}

impl ScheduledItem {
    /// Create an item for a date.
    pub fn new(date: NaiveDate, message_body: impl Into<String>) -> Self {
        Self {
            date: format_date(date),
            message_body: Some(message_body.into()),
        }
    }

    /// Whether this item is scheduled for the given date.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.date == format_date(date)
    }

    /// The message body, or the fallback when absent.
    pub fn body(&self) -> &str {
        self.message_body.as_deref().unwrap_or(DEFAULT_MESSAGE_BODY)
    }
}

/// Render a date in the scheduled-item format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}
