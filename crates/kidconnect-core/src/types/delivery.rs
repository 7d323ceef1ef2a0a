//! Delivery log records.

use super::recipient::Recipient;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Prefix on the logged content of daily campaign sends.
pub const SCHEDULED_PREFIX: &str = "Scheduled: ";

/// Display format for record timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An append-only audit entry for one successful send.
///
/// Serialized field names follow the message log sheet's header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Moment of the send attempt, local to the sending process. Stored as
    /// RFC 3339; see [`Self::display_timestamp`] for the sheet format.
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Local>,

    #[serde(rename = "Recipient Name")]
    pub recipient_name: String,

    #[serde(rename = "Recipient Number")]
    pub recipient_number: String,

    #[serde(rename = "Class")]
    pub class: String,

    /// The exact body sent, or the `Scheduled: ` aggregate for campaign sends.
    #[serde(rename = "Message Content")]
    pub message_content: String,

    /// Date whose scheduled content a campaign send carried. Absent for
    /// broadcasts and for records written before the column existed.
    #[serde(
        rename = "Campaign Date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub campaign_date: Option<NaiveDate>,
}

impl DeliveryRecord {
    /// Record a send to `recipient` made now.
    pub fn now(recipient: &Recipient, message_content: impl Into<String>) -> Self {
        Self::at(Local::now(), recipient, message_content)
    }

    /// Record a send to `recipient` at a given time.
    pub fn at(
        timestamp: DateTime<Local>,
        recipient: &Recipient,
        message_content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            recipient_name: recipient.name.clone(),
            recipient_number: recipient.trimmed_number().to_string(),
            class: recipient.class.clone(),
            message_content: message_content.into(),
            campaign_date: None,
        }
    }

    /// Tag the record with the campaign date it delivered.
    pub fn for_campaign(mut self, date: NaiveDate) -> Self {
        self.campaign_date = Some(date);
        self
    }

    /// Whether this record comes from a daily campaign send.
    pub fn is_scheduled(&self) -> bool {
        self.message_content.starts_with(SCHEDULED_PREFIX)
    }

    /// The campaign date this record delivered, if it is a campaign send.
    ///
    /// Untagged campaign records fall back to the day they were written.
    pub fn scheduled_for(&self) -> Option<NaiveDate> {
        if !self.is_scheduled() {
            return None;
        }
        Some(
            self.campaign_date
                .unwrap_or_else(|| self.timestamp.date_naive()),
        )
    }

    /// Whether this record delivered the campaign for `date`.
    pub fn is_scheduled_delivery(&self, date: NaiveDate) -> bool {
        self.scheduled_for() == Some(date)
    }

    /// Timestamp formatted for display.
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn amy() -> Recipient {
        Recipient::new("Amy", " 27831112222 ", "A")
    }

    #[test]
    fn test_record_uses_trimmed_number() {
        let record = DeliveryRecord::now(&amy(), "Hi Amy, Picture day tomorrow");
        assert_eq!(record.recipient_number, "27831112222");
        assert_eq!(record.class, "A");
        assert!(!record.is_scheduled());
    }

    #[test]
    fn test_untagged_record_falls_back_to_timestamp_date() {
        let ts = Local.with_ymd_and_hms(2025, 3, 10, 7, 30, 0).unwrap();
        let record = DeliveryRecord::at(ts, &amy(), "Scheduled: Sports day\n\n");
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(record.is_scheduled_delivery(day));
        assert!(!record.is_scheduled_delivery(day.succ_opt().unwrap()));
        assert_eq!(record.display_timestamp(), "2025-03-10 07:30:00");
    }

    #[test]
    fn test_campaign_date_wins_over_timestamp() {
        let ts = Local.with_ymd_and_hms(2025, 3, 10, 16, 0, 0).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let record =
            DeliveryRecord::at(ts, &amy(), "Scheduled: Outing\n\n").for_campaign(tomorrow);
        assert_eq!(record.scheduled_for(), Some(tomorrow));
        assert!(!record.is_scheduled_delivery(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Campaign Date"], "2025-03-11");
        let back: DeliveryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_broadcast_is_never_a_scheduled_delivery() {
        let record = DeliveryRecord::now(&amy(), "Hi Amy, Picture day tomorrow");
        assert_eq!(record.scheduled_for(), None);
    }

    #[test]
    fn test_timestamp_is_stored_as_rfc3339() {
        let ts = Local.with_ymd_and_hms(2025, 3, 10, 7, 30, 0).unwrap();
        let record = DeliveryRecord::at(ts, &amy(), "hello");
        let value = serde_json::to_value(&record).unwrap();
        let stored = value["Timestamp"].as_str().unwrap();
        assert_eq!(DateTime::parse_from_rfc3339(stored).unwrap(), ts);
        assert!(value.get("Campaign Date").is_none());
    }

    #[test]
    fn test_sheet_header_field_names() {
        let record = DeliveryRecord::now(&amy(), "hello");
        let value = serde_json::to_value(&record).unwrap();
        for key in [
            "Timestamp",
            "Recipient Name",
            "Recipient Number",
            "Class",
            "Message Content",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        let back: DeliveryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
