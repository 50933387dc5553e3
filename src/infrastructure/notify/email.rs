use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use super::Notifier;
use crate::domain::{PriceReading, TrackedProduct};
use crate::shared::config::SmtpCredentials;
use crate::shared::errors::NotificationError;

/// One-shot email alert over an authenticated STARTTLS SMTP session.
/// No retry: a handshake, auth or send failure propagates to the caller.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl EmailNotifier {
    /// Builds the transport up front so address and relay mistakes surface
    /// at startup, not after the price finally drops.
    pub fn new(
        host: &str,
        port: u16,
        credentials: SmtpCredentials,
        recipient: Option<&str>,
    ) -> Result<Self, NotificationError> {
        let sender: Mailbox = credentials.user.parse()?;
        let recipient: Mailbox = match recipient {
            Some(address) => address.parse()?,
            None => sender.clone(),
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(Credentials::new(credentials.user, credentials.password))
            .build();

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn alert(
        &self,
        product: &TrackedProduct,
        reading: &PriceReading,
    ) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(format!("Price down for {}", product.name))
            .body(format!(
                "Dear sir,\nThe price for `{}` is now {} which is less than \
                 or equal to what you desired, {}! Visit {} for more info.",
                product.name, reading.amount, product.target_price, product.url
            ))?;

        self.transport.send(message).await?;
        info!("Mail sent to {}", self.recipient);

        Ok(())
    }
}
