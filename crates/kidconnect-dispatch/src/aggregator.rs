//! Merging of scheduled content into one campaign body.

use crate::error::{DispatchError, Stage};
use crate::Result;
use chrono::NaiveDate;
use kidconnect_core::ScheduledItem;
use kidconnect_store::ScheduleStore;
use std::sync::Arc;

/// The merged body for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedBody {
    /// Each matching body followed by a blank line, in store order.
    pub text: String,

    /// Number of items merged.
    pub item_count: usize,
}

impl AggregatedBody {
    /// The body with surrounding whitespace removed, as embedded in messages.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Aggregation result. `NoItems` means nothing is due and no recipient should
/// be contacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregation {
    NoItems,
    Body(AggregatedBody),
}

impl Aggregation {
    pub fn body(&self) -> Option<&AggregatedBody> {
        match self {
            Self::NoItems => None,
            Self::Body(body) => Some(body),
        }
    }
}

/// Merge the items due on `date`.
///
/// Items without a body contribute the default body. Date matching is an
/// exact comparison against the `YYYY-MM-DD` form of `date`.
pub fn aggregate(items: &[ScheduledItem], date: NaiveDate) -> Aggregation {
    let mut text = String::new();
    let mut item_count = 0;
    for item in items.iter().filter(|item| item.is_due_on(date)) {
        text.push_str(item.body());
        text.push_str("\n\n");
        item_count += 1;
    }

    if item_count == 0 {
        Aggregation::NoItems
    } else {
        Aggregation::Body(AggregatedBody { text, item_count })
    }
}

/// Reads the schedule store and aggregates it for a date.
#[derive(Clone)]
pub struct ScheduledContentAggregator {
    store: Arc<dyn ScheduleStore>,
}

impl ScheduledContentAggregator {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    pub async fn collect_for_date(&self, date: NaiveDate) -> Result<Aggregation> {
        let items = self
            .store
            .list_all()
            .await
            .map_err(|e| DispatchError::collaborator(Stage::ReadSchedule, 0, e))?;
        Ok(aggregate(&items, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FailingSchedule;
    use kidconnect_store::MemorySchedule;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn item(d: &str, body: Option<&str>) -> ScheduledItem {
        ScheduledItem {
            date: d.to_string(),
            message_body: body.map(str::to_string),
        }
    }

    #[test]
    fn test_matching_items_are_joined_in_order() {
        let items = vec![
            item("2025-03-10", Some("Sports day")),
            item("2025-03-11", Some("Tomorrow")),
            item("2025-03-10", Some("Bring sunscreen")),
        ];
        let aggregation = aggregate(&items, date("2025-03-10"));
        let body = aggregation.body().unwrap();
        assert_eq!(body.text, "Sports day\n\nBring sunscreen\n\n");
        assert_eq!(body.item_count, 2);
        assert_eq!(body.trimmed(), "Sports day\n\nBring sunscreen");
    }

    #[test]
    fn test_missing_body_uses_default() {
        let items = vec![item("2025-03-10", None)];
        let aggregation = aggregate(&items, date("2025-03-10"));
        assert_eq!(aggregation.body().unwrap().text, "A daily update.\n\n");
    }

    #[test]
    fn test_no_match_is_no_items() {
        let items = vec![item("2025-03-11", Some("Tomorrow"))];
        assert_eq!(aggregate(&items, date("2025-03-10")), Aggregation::NoItems);
        assert_eq!(aggregate(&[], date("2025-03-10")), Aggregation::NoItems);
    }

    #[test]
    fn test_date_match_is_exact() {
        let items = vec![item("2025-3-10", Some("Loose date")), item(" 2025-03-10", Some("Padded"))];
        assert_eq!(aggregate(&items, date("2025-03-10")), Aggregation::NoItems);
    }

    #[tokio::test]
    async fn test_collect_from_store() {
        let store = Arc::new(MemorySchedule::new(vec![item("2025-03-10", Some("Sports day"))]));
        let aggregator = ScheduledContentAggregator::new(store);
        let aggregation = aggregator.collect_for_date(date("2025-03-10")).await.unwrap();
        assert_eq!(aggregation.body().unwrap().item_count, 1);

        let again = aggregator.collect_for_date(date("2025-03-10")).await.unwrap();
        assert_eq!(aggregation, again);
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let aggregator = ScheduledContentAggregator::new(Arc::new(FailingSchedule));
        let err = aggregator.collect_for_date(date("2025-03-10")).await.unwrap_err();
        assert_eq!(err.stage(), Stage::ReadSchedule);
        assert_eq!(err.sent_so_far(), 0);
    }
}
