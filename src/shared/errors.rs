//! Error handling for the application

use thiserror::Error;

/// Configuration and startup errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid product URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Desired price must be a positive integer")]
    NonPositiveTarget,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("SMTP credentials missing: set the {0} environment variable")]
    MissingCredentials(&'static str),

    #[error("No internet connectivity: {0}")]
    Offline(String),
}

/// Price-fetch errors; any of these is fatal to the tracking loop
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Price element not found on page")]
    PriceNotFound,

    #[error("Extracted price is not numeric: {0:?}")]
    UnparsablePrice(String),
}

/// Alert-delivery errors
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Failed to build alert message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Alert delivery failed: {0}")]
    Delivery(String),
}

/// History-log errors; reported but never abort the run
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to append history record to {path}: {source}")]
    Append {
        path: String,
        source: std::io::Error,
    },
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Price fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Notification failed: {0}")]
    Notification(#[from] NotificationError),
}
