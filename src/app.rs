// src/app.rs
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::application::{TokioDelay, TrackingLoop};
use crate::domain::TrackedProduct;
use crate::infrastructure::marketplace::FlipkartMarketplace;
use crate::infrastructure::notify::{EmailNotifier, HistoryLogRecorder};
use crate::shared::config::{Config, SmtpCfg, SmtpCredentials, TrackerCfg};
use crate::shared::errors::ConfigError;

pub const DEFAULT_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_HISTORY_DIR: &str = ".";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

const CONNECTIVITY_PROBE: &str = "https://www.google.com";

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub product_name: String,
    pub product_url: String,
    pub target_price: u64,
    pub interval_secs: u64,
    pub history_dir: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_recipient: Option<String>,
}

impl AppCfg {
    pub fn from_config(cfg: Config) -> Result<Self> {
        let tracker = cfg.tracker.unwrap_or(TrackerCfg {
            interval_secs: None,
            history_dir: None,
        });
        let smtp = cfg.smtp.unwrap_or(SmtpCfg {
            host: None,
            port: None,
            recipient: None,
        });

        Ok(Self {
            product_name: cfg.product.name,
            product_url: cfg.product.url,
            target_price: cfg.product.target_price,
            interval_secs: tracker.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS),
            history_dir: tracker
                .history_dir
                .unwrap_or_else(|| DEFAULT_HISTORY_DIR.to_string()),
            smtp_host: smtp.host.unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: smtp.port.unwrap_or(DEFAULT_SMTP_PORT),
            smtp_recipient: smtp.recipient,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_cli_args(
        product_name: String,
        product_url: String,
        target_price: u64,
        interval_secs: u64,
        history_dir: String,
        smtp_host: String,
        smtp_port: u16,
        smtp_recipient: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            product_name,
            product_url,
            target_price,
            interval_secs,
            history_dir,
            smtp_host,
            smtp_port,
            smtp_recipient,
        })
    }
}

/// One GET against a well-known host before tracking starts, so a machine
/// with no connectivity fails up front instead of on the first poll.
async fn check_connectivity() -> Result<(), ConfigError> {
    reqwest::get(CONNECTIVITY_PROBE)
        .await
        .map_err(|e| ConfigError::Offline(e.to_string()))?;
    Ok(())
}

pub async fn run(app_cfg: AppCfg) -> Result<()> {
    info!("Starting price tracker");

    // All input validation happens before the first poll
    let product = TrackedProduct::new(
        app_cfg.product_name.clone(),
        &app_cfg.product_url,
        app_cfg.target_price,
    )?;
    let credentials = SmtpCredentials::from_env()?;

    check_connectivity().await?;

    let notifier = Arc::new(EmailNotifier::new(
        &app_cfg.smtp_host,
        app_cfg.smtp_port,
        credentials,
        app_cfg.smtp_recipient.as_deref(),
    )?);
    let recorder = Arc::new(HistoryLogRecorder::new(&app_cfg.history_dir));
    let marketplace = Arc::new(FlipkartMarketplace::new());

    info!(
        "Tracking {} every {}s until it reaches {}",
        product.name, app_cfg.interval_secs, product.target_price
    );

    let tracker = TrackingLoop::new(
        product,
        Duration::from_secs(app_cfg.interval_secs),
        marketplace,
        recorder,
        notifier,
        Arc::new(TokioDelay),
    );

    let outcome = tracker.run().await?;
    info!(
        "Alert sent after {} cycle(s); final price {}",
        outcome.cycles, outcome.final_reading.amount
    );
    if outcome.record_failures > 0 {
        info!(
            "{} history record(s) could not be written during the run",
            outcome.record_failures
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [product]
            name = "Widget"
            url = "https://www.flipkart.com/widget/p/itm1"
            target_price = 1500
            "#,
        )
        .unwrap();

        let app_cfg = AppCfg::from_config(cfg).unwrap();
        assert_eq!(app_cfg.interval_secs, DEFAULT_INTERVAL_SECS);
        assert_eq!(app_cfg.history_dir, DEFAULT_HISTORY_DIR);
        assert_eq!(app_cfg.smtp_host, DEFAULT_SMTP_HOST);
        assert_eq!(app_cfg.smtp_port, DEFAULT_SMTP_PORT);
        assert_eq!(app_cfg.smtp_recipient, None);
    }

    #[test]
    fn from_config_keeps_explicit_values() {
        let cfg: Config = toml::from_str(
            r#"
            [product]
            name = "Widget"
            url = "https://www.flipkart.com/widget/p/itm1"
            target_price = 1500

            [tracker]
            interval_secs = 15
            history_dir = "/tmp/watch"

            [smtp]
            host = "smtp.example.com"
            port = 2525
            recipient = "buyer@example.com"
            "#,
        )
        .unwrap();

        let app_cfg = AppCfg::from_config(cfg).unwrap();
        assert_eq!(app_cfg.interval_secs, 15);
        assert_eq!(app_cfg.history_dir, "/tmp/watch");
        assert_eq!(app_cfg.smtp_host, "smtp.example.com");
        assert_eq!(app_cfg.smtp_port, 2525);
        assert_eq!(app_cfg.smtp_recipient.as_deref(), Some("buyer@example.com"));
    }
}
