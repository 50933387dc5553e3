//! Marketplace adapters - the price-source seam
//!
//! Page scraping is inherently brittle against third-party markup changes.
//! Everything selector- and markup-specific stays behind this trait so a
//! marketplace change touches exactly one adapter.

mod flipkart;

pub use flipkart::FlipkartMarketplace;

use async_trait::async_trait;
use reqwest::Url;

use crate::shared::errors::FetchError;

/// Common interface for marketplace price sources
#[async_trait]
pub trait Marketplace: Send + Sync {
    /// Marketplace name used in history-log lines
    fn label(&self) -> &'static str;

    /// Fetch the current listing price from the product page.
    /// A missing or non-numeric price element is an error, never a
    /// numeric sentinel: zero is a valid price.
    async fn fetch_price(&self, url: &Url) -> Result<u64, FetchError>;
}
