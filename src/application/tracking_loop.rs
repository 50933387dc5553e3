//! The tracking loop: fetch, compare, record, then alert or sleep.
//!
//! Strictly sequential: one poll in flight at a time, a full delay between
//! cycles, no iteration cap. The loop ends in exactly one of two ways:
//! a one-shot alert (success) or a fetch failure (fatal). Termination is a
//! returned value, never a process exit, so the loop runs under test
//! without spawning anything.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::{decide, CycleDecision, PriceReading, TrackedProduct, TrackerOutcome};
use crate::infrastructure::marketplace::Marketplace;
use crate::infrastructure::notify::{Notifier, Recorder};
use crate::shared::errors::AppError;

/// Sleep between poll cycles, injected so tests can skip real waiting
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Production delay backed by the tokio timer
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct TrackingLoop {
    product: TrackedProduct,
    interval: Duration,
    marketplace: Arc<dyn Marketplace>,
    recorder: Arc<dyn Recorder>,
    notifier: Arc<dyn Notifier>,
    delay: Arc<dyn Delay>,
}

impl TrackingLoop {
    pub fn new(
        product: TrackedProduct,
        interval: Duration,
        marketplace: Arc<dyn Marketplace>,
        recorder: Arc<dyn Recorder>,
        notifier: Arc<dyn Notifier>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            product,
            interval,
            marketplace,
            recorder,
            notifier,
            delay,
        }
    }

    /// Polls until the price reaches the target or a fetch fails.
    ///
    /// Each successful cycle records its reading before any alert goes
    /// out. A failed record is warned about and the loop carries on; a
    /// failed fetch ends the run immediately with no record and no alert.
    pub async fn run(&self) -> Result<TrackerOutcome, AppError> {
        let mut cycles = 0u64;
        let mut record_failures = 0u64;

        loop {
            cycles += 1;

            let amount = match self.marketplace.fetch_price(&self.product.url).await {
                Ok(amount) => amount,
                Err(e) => {
                    error!("Unable to fetch the latest price: {}", e);
                    return Err(e.into());
                }
            };

            let reading = PriceReading::now(amount);
            info!(
                "Observed price {} for {} (target {})",
                amount, self.product.name, self.product.target_price
            );

            if let Err(e) = self
                .recorder
                .record(&self.product, &reading, self.marketplace.label())
                .await
            {
                record_failures += 1;
                warn!("Failed to append history record: {}", e);
            }

            match decide(amount, self.product.target_price) {
                CycleDecision::Alert => {
                    info!("Price low for {}", self.product.name);
                    if let Err(e) = self.notifier.alert(&self.product, &reading).await {
                        // The price-dropped signal may be lost here; log it
                        // apart from fetch errors so an operator can check.
                        error!("Price target met but alert delivery failed: {}", e);
                        return Err(e.into());
                    }
                    return Ok(TrackerOutcome {
                        final_reading: reading,
                        cycles,
                        record_failures,
                    });
                }
                CycleDecision::Continue => self.delay.wait(self.interval).await,
            }
        }
    }
}
