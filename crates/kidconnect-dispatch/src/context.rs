//! Collaborators and the per-recipient send step shared by both flows.

use crate::error::{DispatchError, Stage};
use crate::filter::{Eligibility, RecipientFilter};
use crate::outcome::DispatchOutcome;
use crate::pacing::{NoPacing, Pacer};
use crate::Result;
use chrono::{Local, NaiveDate};
use kidconnect_channels::MessageTransport;
use kidconnect_core::{DeliveryRecord, Recipient};
use kidconnect_store::{DeliveryLog, RecipientDirectory};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything a dispatch run talks to.
#[derive(Clone)]
pub struct DispatchContext {
    pub(crate) directory: Arc<dyn RecipientDirectory>,
    pub(crate) log: Arc<dyn DeliveryLog>,
    pub(crate) transport: Arc<dyn MessageTransport>,
    pub(crate) filter: RecipientFilter,
    pub(crate) pacer: Arc<dyn Pacer>,
}

impl DispatchContext {
    /// Create a context without pacing.
    pub fn new(
        directory: Arc<dyn RecipientDirectory>,
        log: Arc<dyn DeliveryLog>,
        transport: Arc<dyn MessageTransport>,
        filter: RecipientFilter,
    ) -> Self {
        Self {
            directory,
            log,
            transport,
            filter,
            pacer: Arc::new(NoPacing),
        }
    }

    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    pub(crate) async fn recipients(&self) -> Result<Vec<Recipient>> {
        self.directory
            .list_all()
            .await
            .map_err(|e| DispatchError::collaborator(Stage::ReadRecipients, 0, e))
    }

    /// Filter check, returning the skip outcome for ineligible recipients.
    pub(crate) fn screen(&self, recipient: &Recipient) -> Option<DispatchOutcome> {
        match self.filter.check(recipient) {
            Eligibility::Eligible => None,
            Eligibility::Ineligible(reason) => {
                warn!(
                    recipient = %recipient.name,
                    number = %recipient.trimmed_number(),
                    %reason,
                    "Skipping recipient"
                );
                Some(DispatchOutcome::SkippedIneligible {
                    recipient: recipient.clone(),
                    reason,
                })
            }
        }
    }

    /// Send `body`, then on acceptance append a record holding
    /// `logged_content` (tagged with `campaign_date` when given) and pause
    /// before the next recipient.
    pub(crate) async fn deliver(
        &self,
        recipient: &Recipient,
        body: &str,
        logged_content: &str,
        campaign_date: Option<NaiveDate>,
        sent_so_far: usize,
    ) -> Result<DispatchOutcome> {
        let number = recipient.trimmed_number();
        let attempted_at = Local::now();
        debug!(recipient = %recipient.name, number = %number, "Sending message");
        let result = self.transport.send(number, body).await;
        let outcome = DispatchOutcome::from_transport(recipient.clone(), result);

        match &outcome {
            DispatchOutcome::Sent { .. } => {
                let mut record = DeliveryRecord::at(attempted_at, recipient, logged_content);
                if let Some(date) = campaign_date {
                    record = record.for_campaign(date);
                }
                // The provider already accepted this message, so it counts as sent.
                self.log.append(record).await.map_err(|e| {
                    DispatchError::collaborator(Stage::AppendDeliveryLog, sent_so_far + 1, e)
                })?;
                info!(
                    recipient = %recipient.name,
                    number = %number,
                    transport = self.transport.name(),
                    "Message sent"
                );
                self.pacer.pause().await;
            }
            DispatchOutcome::TransportRejected {
                status_code,
                response_body,
                ..
            } => {
                warn!(
                    recipient = %recipient.name,
                    number = %number,
                    status = status_code,
                    response = %response_body,
                    "Message rejected"
                );
            }
            DispatchOutcome::TransportError { response_body, .. } => {
                warn!(
                    recipient = %recipient.name,
                    number = %number,
                    error = %response_body,
                    "Message send failed"
                );
            }
            _ => {}
        }

        Ok(outcome)
    }
}
