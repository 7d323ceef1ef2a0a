//! Immediate broadcast of an ad-hoc message.

use crate::context::DispatchContext;
use crate::outcome::BroadcastSummary;
use crate::Result;
use kidconnect_core::config::ALL_CLASSES;
use kidconnect_core::Recipient;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// Sends one ad-hoc message to every eligible recipient.
///
/// Each recipient receives `Hi {name}, {text}`; the same composed text is
/// what the delivery record holds.
#[derive(Clone)]
pub struct ImmediateBroadcastDispatcher {
    ctx: DispatchContext,
    all_classes_label: String,
}

impl ImmediateBroadcastDispatcher {
    pub fn new(ctx: DispatchContext) -> Self {
        Self {
            ctx,
            all_classes_label: ALL_CLASSES.to_string(),
        }
    }

    /// Override the class filter value that means "every class".
    pub fn with_all_classes_label(mut self, label: impl Into<String>) -> Self {
        self.all_classes_label = label.into();
        self
    }

    /// Broadcast `text`, optionally only to recipients in `class_filter`.
    ///
    /// Empty text is a no-op: nothing is read, sent or logged.
    pub async fn broadcast(&self, text: &str, class_filter: Option<&str>) -> Result<BroadcastSummary> {
        if text.is_empty() {
            debug!("Empty broadcast text, nothing to send");
            return Ok(BroadcastSummary::default());
        }

        let run_id = Uuid::new_v4();
        let span = info_span!("dispatch", kind = "broadcast", %run_id);
        self.run(text, class_filter).instrument(span).await
    }

    async fn run(&self, text: &str, class_filter: Option<&str>) -> Result<BroadcastSummary> {
        let recipients = self.ctx.recipients().await?;
        info!(
            recipients = recipients.len(),
            class = class_filter.unwrap_or(&self.all_classes_label),
            "Starting broadcast"
        );

        let mut summary = BroadcastSummary::default();
        for recipient in &recipients {
            if !self.in_class(recipient, class_filter) {
                continue;
            }
            if let Some(skipped) = self.ctx.screen(recipient) {
                summary.record(skipped);
                continue;
            }

            let body = format!("Hi {}, {}", recipient.name, text);
            let outcome = self
                .ctx
                .deliver(recipient, &body, &body, None, summary.sent)
                .await?;
            summary.record(outcome);
        }

        info!(
            sent = summary.sent,
            skipped = summary.skipped(),
            failed = summary.failed(),
            "Broadcast finished"
        );
        Ok(summary)
    }

    fn in_class(&self, recipient: &Recipient, class_filter: Option<&str>) -> bool {
        match class_filter {
            None => true,
            Some(class) if class == self.all_classes_label => true,
            Some(class) => recipient.class == class,
        }
    }
}
