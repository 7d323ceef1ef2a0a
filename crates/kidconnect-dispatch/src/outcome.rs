//! Per-recipient outcomes and run summaries.

use crate::filter::IneligibleReason;
use kidconnect_channels::TransportResult;
use kidconnect_core::Recipient;
use std::fmt;

/// What happened to one recipient during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Accepted by the provider and logged.
    Sent { recipient: Recipient },

    /// Excluded by the recipient filter.
    SkippedIneligible {
        recipient: Recipient,
        reason: IneligibleReason,
    },

    /// Already received today's campaign message.
    SkippedAlreadyDelivered { recipient: Recipient },

    /// The provider answered with a non-accepted status.
    TransportRejected {
        recipient: Recipient,
        status_code: u16,
        response_body: String,
    },

    /// The request never produced a provider response, or was refused locally.
    TransportError {
        recipient: Recipient,
        status_code: u16,
        response_body: String,
    },
}

impl DispatchOutcome {
    /// Classify a transport result for `recipient`.
    pub fn from_transport(recipient: Recipient, result: TransportResult) -> Self {
        if result.is_accepted() {
            Self::Sent { recipient }
        } else if result.reached_remote {
            Self::TransportRejected {
                recipient,
                status_code: result.status_code,
                response_body: result.response_body,
            }
        } else {
            Self::TransportError {
                recipient,
                status_code: result.status_code,
                response_body: result.response_body,
            }
        }
    }

    pub fn recipient(&self) -> &Recipient {
        match self {
            Self::Sent { recipient }
            | Self::SkippedIneligible { recipient, .. }
            | Self::SkippedAlreadyDelivered { recipient }
            | Self::TransportRejected { recipient, .. }
            | Self::TransportError { recipient, .. } => recipient,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            Self::SkippedIneligible { .. } | Self::SkippedAlreadyDelivered { .. }
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::TransportRejected { .. } | Self::TransportError { .. }
        )
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.recipient();
        let number = r.trimmed_number();
        match self {
            Self::Sent { .. } => write!(f, "Sent to {} ({})", r.name, number),
            Self::SkippedIneligible { reason, .. } => {
                write!(f, "Skipping {} ({}): {}", r.name, number, reason)
            }
            Self::SkippedAlreadyDelivered { .. } => {
                write!(f, "Skipping {} ({}): already delivered today", r.name, number)
            }
            Self::TransportRejected {
                status_code,
                response_body,
                ..
            } => write!(
                f,
                "Failed to send to {} ({}): {} {}",
                r.name, number, status_code, response_body
            ),
            Self::TransportError { response_body, .. } => {
                write!(f, "Failed to send to {} ({}): {}", r.name, number, response_body)
            }
        }
    }
}

/// Result of a dispatch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastSummary {
    /// Accepted sends; equals the delivery records appended by the run.
    pub sent: usize,

    /// One entry per recipient considered, in directory order.
    pub outcomes: Vec<DispatchOutcome>,

    /// Scheduled items merged into the campaign body. Always zero for
    /// immediate broadcasts.
    pub aggregated_items: usize,
}

impl BroadcastSummary {
    pub(crate) fn record(&mut self, outcome: DispatchOutcome) {
        if outcome.is_sent() {
            self.sent += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// Whether the run considered no recipients at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
