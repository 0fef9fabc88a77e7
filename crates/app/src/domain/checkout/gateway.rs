//! Payment gateway capability.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// Redirect URLs for a hosted checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionParams {
    pub success_url: String,
    pub cancel_url: String,
}

/// One line of a checkout session, priced from a cart item snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLineItem {
    pub name: String,
    pub price_cents: u64,
    pub currency: String,
    pub qty: i64,
}

/// A hosted checkout session created by the provider.
///
/// `id` and `url` are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum PaymentGatewayError {
    #[error("payment provider request failed")]
    Http(#[source] reqwest::Error),

    #[error("payment provider returned status {status}: {message}")]
    Provider { status: u16, message: String },
}

/// Creates hosted checkout sessions with an external payment provider.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_session(
        &self,
        line_items: Vec<SessionLineItem>,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, PaymentGatewayError>;
}
