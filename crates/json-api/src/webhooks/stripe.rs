//! Stripe Webhook Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Stripe Webhook Acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WebhookAck {
    /// Always `true`
    pub received: bool,
}

/// Stripe Webhook Handler
///
/// Acknowledges every delivery without verifying the signature or acting
/// on the event. Order fulfilment off the back of these events is not
/// implemented.
#[endpoint(tags("webhooks"), summary = "Receive Stripe Webhook")]
pub(crate) async fn handler(req: &mut Request) -> Json<WebhookAck> {
    let event_type = req
        .parse_json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|payload| payload.get("type").and_then(|t| t.as_str().map(String::from)));

    info!(event_type, "stripe webhook received");

    Json(WebhookAck { received: true })
}
