//! Daily campaign: one merged message per recipient for a calendar date.

use crate::aggregator::{Aggregation, ScheduledContentAggregator};
use crate::context::DispatchContext;
use crate::error::{DispatchError, Stage};
use crate::outcome::{BroadcastSummary, DispatchOutcome};
use crate::Result;
use chrono::NaiveDate;
use kidconnect_core::config::DEFAULT_CLOSING_LINE;
use kidconnect_core::{format_date, SCHEDULED_PREFIX};
use kidconnect_store::ScheduleStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Sends the content scheduled for a date to every eligible recipient.
///
/// The message is `Hello {name},\n\n{body}\n{closing line}` where `body` is
/// the trimmed aggregate. Delivery records hold `Scheduled: ` followed by the
/// untrimmed aggregate.
#[derive(Clone)]
pub struct DailyCampaignDispatcher {
    ctx: DispatchContext,
    aggregator: ScheduledContentAggregator,
    closing_line: String,
    skip_already_delivered: bool,
}

impl DailyCampaignDispatcher {
    pub fn new(ctx: DispatchContext, schedule: Arc<dyn ScheduleStore>) -> Self {
        Self {
            ctx,
            aggregator: ScheduledContentAggregator::new(schedule),
            closing_line: DEFAULT_CLOSING_LINE.to_string(),
            skip_already_delivered: true,
        }
    }

    pub fn with_closing_line(mut self, closing_line: impl Into<String>) -> Self {
        self.closing_line = closing_line.into();
        self
    }

    /// Whether to skip numbers that already received the campaign for the
    /// run date. Enabled by default so a repeated trigger does not resend.
    pub fn skip_already_delivered(mut self, enabled: bool) -> Self {
        self.skip_already_delivered = enabled;
        self
    }

    /// Run the campaign for `date`.
    ///
    /// When nothing is scheduled no recipient is read or contacted and the
    /// summary is empty.
    pub async fn run_daily_campaign(&self, date: NaiveDate) -> Result<BroadcastSummary> {
        let run_id = Uuid::new_v4();
        let span = info_span!("dispatch", kind = "daily", %run_id, date = %format_date(date));
        self.run(date).instrument(span).await
    }

    async fn run(&self, date: NaiveDate) -> Result<BroadcastSummary> {
        let body = match self.aggregator.collect_for_date(date).await? {
            Aggregation::NoItems => {
                info!("No content scheduled, nothing to send");
                return Ok(BroadcastSummary::default());
            }
            Aggregation::Body(body) => body,
        };

        let recipients = self.ctx.recipients().await?;
        let mut delivered = self.delivered_on(date).await?;
        info!(
            items = body.item_count,
            recipients = recipients.len(),
            already_delivered = delivered.len(),
            "Starting daily campaign"
        );

        let logged_content = format!("{}{}", SCHEDULED_PREFIX, body.text);
        let mut summary = BroadcastSummary {
            aggregated_items: body.item_count,
            ..Default::default()
        };

        for recipient in &recipients {
            if let Some(skipped) = self.ctx.screen(recipient) {
                summary.record(skipped);
                continue;
            }

            let number = recipient.trimmed_number();
            if delivered.contains(number) {
                warn!(recipient = %recipient.name, number = %number, "Already delivered today");
                summary.record(DispatchOutcome::SkippedAlreadyDelivered {
                    recipient: recipient.clone(),
                });
                continue;
            }

            let message = format!(
                "Hello {},\n\n{}\n{}",
                recipient.name,
                body.trimmed(),
                self.closing_line
            );
            let outcome = self
                .ctx
                .deliver(recipient, &message, &logged_content, Some(date), summary.sent)
                .await?;
            if outcome.is_sent() && self.skip_already_delivered {
                delivered.insert(number.to_string());
            }
            summary.record(outcome);
        }

        info!(
            sent = summary.sent,
            skipped = summary.skipped(),
            failed = summary.failed(),
            "Daily campaign finished"
        );
        Ok(summary)
    }

    /// Numbers that already received the campaign for `date`.
    async fn delivered_on(&self, date: NaiveDate) -> Result<HashSet<String>> {
        if !self.skip_already_delivered {
            return Ok(HashSet::new());
        }

        let records = self
            .ctx
            .log
            .list_all()
            .await
            .map_err(|e| DispatchError::collaborator(Stage::ReadDeliveryLog, 0, e))?;
        Ok(records
            .into_iter()
            .filter(|r| r.is_scheduled_delivery(date))
            .map(|r| r.recipient_number)
            .collect())
    }
}
