//! Notification and history recording

mod email;
mod history;

pub use email::EmailNotifier;
pub use history::HistoryLogRecorder;

use async_trait::async_trait;

use crate::domain::{PriceReading, TrackedProduct};
use crate::shared::errors::{NotificationError, PersistenceError};

/// Sink for the one-shot price alert
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn alert(
        &self,
        product: &TrackedProduct,
        reading: &PriceReading,
    ) -> Result<(), NotificationError>;
}

/// Append-only sink for price history records
#[async_trait]
pub trait Recorder: Send + Sync {
    async fn record(
        &self,
        product: &TrackedProduct,
        reading: &PriceReading,
        source: &str,
    ) -> Result<(), PersistenceError>;
}
