use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::Recorder;
use crate::domain::{PriceReading, TrackedProduct};
use crate::shared::errors::PersistenceError;

/// Appends one formatted line per reading to the product's history file.
/// The file is opened and closed per write; nothing is held across poll
/// cycles and the log only ever grows.
pub struct HistoryLogRecorder {
    dir: PathBuf,
}

impl HistoryLogRecorder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, product: &TrackedProduct) -> PathBuf {
        self.dir.join(product.history_file_name())
    }
}

#[async_trait]
impl Recorder for HistoryLogRecorder {
    async fn record(
        &self,
        product: &TrackedProduct,
        reading: &PriceReading,
        source: &str,
    ) -> Result<(), PersistenceError> {
        let path = self.path_for(product);
        let line = format!("{}\n", reading.history_line(source));

        let append = |e| PersistenceError::Append {
            path: path.display().to_string(),
            source: e,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(append)?;
        file.write_all(line.as_bytes()).await.map_err(append)?;

        Ok(())
    }
}
