use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, Url};
use scraper::{Html, Selector};

use super::Marketplace;
use crate::shared::errors::FetchError;

/// CSS class pair Flipkart currently renders the listing price with.
/// Tracks the live page markup; expect to update it when the site changes.
const PRICE_SELECTOR: &str = "div._30jeq3._16Jk6d";

/// Currency glyphs and thousands separators stripped before parsing.
const REMOVALS: &str = "₹|,|[$]";

/// Price source for Flipkart product pages
pub struct FlipkartMarketplace {
    client: Client,
    selector: Selector,
    removals: Regex,
}

impl FlipkartMarketplace {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            selector: Selector::parse(PRICE_SELECTOR).expect("static selector"),
            removals: Regex::new(REMOVALS).expect("static regex"),
        }
    }

    fn extract_price(&self, body: &str) -> Result<u64, FetchError> {
        let document = Html::parse_document(body);
        let node = document
            .select(&self.selector)
            .next()
            .ok_or(FetchError::PriceNotFound)?;

        let text: String = node.text().collect();
        let cleaned = self.removals.replace_all(text.trim(), "");

        cleaned
            .parse()
            .map_err(|_| FetchError::UnparsablePrice(cleaned.into_owned()))
    }
}

impl Default for FlipkartMarketplace {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Marketplace for FlipkartMarketplace {
    fn label(&self) -> &'static str {
        "Flipkart"
    }

    async fn fetch_price(&self, url: &Url) -> Result<u64, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        self.extract_price(&body)
    }
}
