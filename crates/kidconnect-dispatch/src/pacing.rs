//! Pacing between consecutive sends.
//!
//! The upstream API throttles bursts, so both dispatch flows pause after every
//! accepted send. The pause is a trait so tests and embedders can opt out.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Pause inserted after each accepted send.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct FixedIntervalPacer {
    interval: Duration,
}

impl FixedIntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl Pacer for FixedIntervalPacer {
    async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn pause(&self) {}
}

/// Pacer for a configured interval; a zero interval disables pacing.
pub fn pacer_for(interval: Duration) -> Arc<dyn Pacer> {
    if interval.is_zero() {
        Arc::new(NoPacing)
    } else {
        Arc::new(FixedIntervalPacer::new(interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_fixed_interval_sleeps() {
        let pacer = FixedIntervalPacer::new(Duration::from_secs(1));
        let start = Instant::now();
        pacer.pause().await;
        pacer.pause().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_disables_pacing() {
        let pacer = pacer_for(Duration::ZERO);
        let start = Instant::now();
        pacer.pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
