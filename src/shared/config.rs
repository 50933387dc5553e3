use serde::Deserialize;
use std::{env, fmt, fs};

use crate::shared::errors::ConfigError;

/// Environment variable holding the sender email address.
pub const SMTP_USER_VAR: &str = "PRICEWATCH_SMTP_USER";
/// Environment variable holding the sender password (app password for Gmail).
pub const SMTP_PASSWORD_VAR: &str = "PRICEWATCH_SMTP_PASSWORD";

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCfg {
    pub name: String,
    pub url: String,
    pub target_price: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerCfg {
    pub interval_secs: Option<u64>,
    pub history_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpCfg {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub product: ProductCfg,
    pub tracker: Option<TrackerCfg>,
    pub smtp: Option<SmtpCfg>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            source: e,
        })
    }
}

/// SMTP login pair, injected from the environment at startup.
/// Never stored in config files or passed on the command line.
#[derive(Clone)]
pub struct SmtpCredentials {
    pub user: String,
    pub password: String,
}

impl SmtpCredentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var(SMTP_USER_VAR).ok(),
            env::var(SMTP_PASSWORD_VAR).ok(),
        )
    }

    fn from_values(
        user: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ConfigError> {
        let user = user
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredentials(SMTP_USER_VAR))?;
        let password = password
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredentials(SMTP_PASSWORD_VAR))?;

        Ok(Self { user, password })
    }
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            [product]
            name = "Mechanical Keyboard"
            url = "https://www.flipkart.com/some-keyboard/p/itm123"
            target_price = 1500

            [tracker]
            interval_secs = 30
            history_dir = "/var/log/pricewatch"

            [smtp]
            host = "smtp.gmail.com"
            port = 587
            recipient = "buyer@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.product.name, "Mechanical Keyboard");
        assert_eq!(config.product.target_price, 1500);
        assert_eq!(config.tracker.unwrap().interval_secs, Some(30));
        assert_eq!(config.smtp.unwrap().port, Some(587));
    }

    #[test]
    fn product_section_is_required() {
        let result: Result<Config, _> = toml::from_str("[tracker]\ninterval_secs = 30\n");
        assert!(result.is_err());
    }

    #[test]
    fn credentials_require_both_values() {
        let ok = SmtpCredentials::from_values(
            Some("sender@example.com".into()),
            Some("app-password".into()),
        )
        .unwrap();
        assert_eq!(ok.user, "sender@example.com");

        let missing_password =
            SmtpCredentials::from_values(Some("sender@example.com".into()), None);
        assert!(matches!(
            missing_password,
            Err(ConfigError::MissingCredentials(SMTP_PASSWORD_VAR))
        ));

        let empty_user = SmtpCredentials::from_values(Some(String::new()), Some("pw".into()));
        assert!(matches!(
            empty_user,
            Err(ConfigError::MissingCredentials(SMTP_USER_VAR))
        ));
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let creds = SmtpCredentials {
            user: "sender@example.com".into(),
            password: "app-password".into(),
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("app-password"));
    }
}
