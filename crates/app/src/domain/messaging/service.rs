//! Outbound messaging capability.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Delivery channel for an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageChannel {
    Whatsapp,
    Discord,
}

impl MessageChannel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Discord => "discord",
        }
    }
}

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("message delivery failed")]
    Delivery(#[source] reqwest::Error),
}

/// Sends messages and notifications to shoppers.
///
/// Implementations are swappable; the API acknowledges acceptance, not
/// delivery, so a no-op backend is valid.
#[automock]
#[async_trait]
pub trait Messaging: Send + Sync {
    /// Send a message over a channel. `to` is channel-specific: a phone
    /// number for WhatsApp, an optional channel id for Discord.
    async fn send(
        &self,
        channel: MessageChannel,
        to: Option<String>,
        message: String,
    ) -> Result<(), MessagingError>;

    /// Queue a structured notification for a user.
    async fn notify(&self, user_id: String, kind: String, payload: Value)
    -> Result<(), MessagingError>;
}

/// Messaging backend that accepts everything and delivers nothing.
///
/// Used until real provider credentials are wired up.
#[derive(Debug, Clone, Default)]
pub struct NoopMessaging;

impl NoopMessaging {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Messaging for NoopMessaging {
    async fn send(
        &self,
        channel: MessageChannel,
        to: Option<String>,
        message: String,
    ) -> Result<(), MessagingError> {
        debug!(
            channel = channel.as_str(),
            to = to.as_deref().unwrap_or("-"),
            len = message.len(),
            "dropping outbound message"
        );

        Ok(())
    }

    async fn notify(
        &self,
        user_id: String,
        kind: String,
        _payload: Value,
    ) -> Result<(), MessagingError> {
        debug!(user_id, kind, "dropping notification");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn noop_send_always_succeeds() -> TestResult {
        let messaging = NoopMessaging::new();

        messaging
            .send(
                MessageChannel::Whatsapp,
                Some("+15550100".to_string()),
                "your order shipped".to_string(),
            )
            .await?;

        messaging
            .send(MessageChannel::Discord, None, "restock alert".to_string())
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn noop_notify_always_succeeds() -> TestResult {
        let messaging = NoopMessaging::new();

        messaging
            .notify(
                "user-1".to_string(),
                "order_shipped".to_string(),
                json!({ "orderId": "o-1" }),
            )
            .await?;

        Ok(())
    }
}
