use reqwest::Url;

use crate::shared::errors::ConfigError;

/// Product being tracked. Built once at startup and immutable for the
/// lifetime of the run.
#[derive(Debug, Clone)]
pub struct TrackedProduct {
    pub name: String,
    pub url: Url,
    pub target_price: u64,
}

impl TrackedProduct {
    /// Validates user input before any network call is made: the URL must
    /// be a syntactically valid absolute URL and the desired price must be
    /// positive.
    pub fn new(
        name: impl Into<String>,
        url: &str,
        target_price: u64,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if target_price == 0 {
            return Err(ConfigError::NonPositiveTarget);
        }

        Ok(Self {
            name: name.into(),
            url: parsed,
            target_price,
        })
    }

    /// File name of the product's history log, kept compatible with the
    /// `Price History of <name>.txt` convention.
    pub fn history_file_name(&self) -> String {
        format!("Price History of {}.txt", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_absolute_url() {
        let product =
            TrackedProduct::new("Widget", "https://www.flipkart.com/widget/p/itm1", 1500)
                .unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.url.host_str(), Some("www.flipkart.com"));
        assert_eq!(product.target_price, 1500);
    }

    #[test]
    fn rejects_malformed_url() {
        let result = TrackedProduct::new("Widget", "not a url", 1500);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_relative_url() {
        let result = TrackedProduct::new("Widget", "/widget/p/itm1", 1500);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_zero_target_price() {
        let result = TrackedProduct::new("Widget", "https://www.flipkart.com/w", 0);
        assert!(matches!(result, Err(ConfigError::NonPositiveTarget)));
    }

    #[test]
    fn history_file_name_embeds_product_name() {
        let product =
            TrackedProduct::new("Mechanical Keyboard", "https://www.flipkart.com/kb", 1500)
                .unwrap();
        assert_eq!(
            product.history_file_name(),
            "Price History of Mechanical Keyboard.txt"
        );
    }
}
