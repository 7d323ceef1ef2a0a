//! Message dispatch and scheduling engine for KidConnect.
//!
//! Two flows share one per-recipient pipeline:
//!
//! - [`ImmediateBroadcastDispatcher`] sends an ad-hoc text to every eligible
//!   recipient, optionally limited to one class.
//! - [`DailyCampaignDispatcher`] merges everything scheduled for a date into
//!   one message and sends it to every eligible recipient.
//!
//! Both walk the recipient directory in order, apply the [`RecipientFilter`],
//! send through a [`MessageTransport`](kidconnect_channels::MessageTransport),
//! append a [`DeliveryRecord`](kidconnect_core::DeliveryRecord) for every
//! accepted send, and pause through a [`Pacer`] before the next recipient.
//! Runs are sequential and have no retries.

pub mod aggregator;
pub mod broadcast;
pub mod campaign;
pub mod context;
pub mod error;
pub mod filter;
pub mod outcome;
pub mod pacing;

pub use aggregator::{aggregate, AggregatedBody, Aggregation, ScheduledContentAggregator};
pub use broadcast::ImmediateBroadcastDispatcher;
pub use campaign::DailyCampaignDispatcher;
pub use context::DispatchContext;
pub use error::{DispatchError, Stage};
pub use filter::{is_eligible, Eligibility, IneligibleReason, RecipientFilter};
pub use outcome::{BroadcastSummary, DispatchOutcome};
pub use pacing::{pacer_for, FixedIntervalPacer, NoPacing, Pacer};

/// Result type for dispatch runs.
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
pub(crate) mod testing;
