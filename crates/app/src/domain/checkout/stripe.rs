//! Stripe hosted checkout client.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::checkout::gateway::{
    CheckoutSession, CheckoutSessionParams, PaymentGateway, PaymentGatewayError, SessionLineItem,
};

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Stripe client configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key.
    pub secret_key: String,
}

impl Debug for StripeConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Stripe hosted checkout gateway.
#[derive(Clone)]
pub struct StripeGateway {
    client: Client,
    config: StripeConfig,
}

impl Debug for StripeGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StripeGateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: String,
}

impl StripeGateway {
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

/// Build the form-encoded body for a checkout session request.
///
/// Stripe expects indexed bracket notation for repeated fields, with prices
/// inlined as `price_data` rather than pre-registered price objects.
fn session_form_params(
    line_items: &[SessionLineItem],
    params: &CheckoutSessionParams,
) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), params.success_url.clone()),
        ("cancel_url".to_string(), params.cancel_url.clone()),
    ];

    for (i, item) in line_items.iter().enumerate() {
        form.push((format!("line_items[{i}][quantity]"), item.qty.to_string()));
        form.push((
            format!("line_items[{i}][price_data][currency]"),
            item.currency.to_lowercase(),
        ));
        form.push((
            format!("line_items[{i}][price_data][unit_amount]"),
            item.price_cents.to_string(),
        ));
        form.push((
            format!("line_items[{i}][price_data][product_data][name]"),
            item.name.clone(),
        ));
    }

    form
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_session(
        &self,
        line_items: Vec<SessionLineItem>,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, PaymentGatewayError> {
        let form = session_form_params(&line_items, &params);

        let response = self
            .client
            .post(CHECKOUT_SESSIONS_URL)
            .bearer_auth(&self.config.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(PaymentGatewayError::Http)?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(PaymentGatewayError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let session: SessionResponse = response.json().await.map_err(PaymentGatewayError::Http)?;

        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
        })
    }
}
