//! WhatsApp Message Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use bazaar_app::domain::messaging::MessageChannel;

use crate::{
    extensions::*,
    state::State,
    validate::{Validate, ValidationError, min_len},
};

/// WhatsApp Message Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WhatsappMessageRequest {
    /// Recipient phone number
    pub to: String,
    /// Message body
    pub message: String,
}

impl Validate for WhatsappMessageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("to", &self.to, 1)?;
        min_len("message", &self.message, 1)?;

        Ok(())
    }
}

/// WhatsApp Message Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WhatsappMessageResponse {
    /// Whether the message was accepted
    pub sent: bool,
    /// Always `whatsapp`
    pub channel: String,
    /// Echo of the recipient
    pub to: String,
}

/// WhatsApp Message Handler
///
/// Accepts the message for delivery. The acknowledgement means accepted,
/// not delivered.
#[endpoint(tags("messages"), summary = "Send WhatsApp Message")]
pub(crate) async fn handler(
    json: JsonBody<WhatsappMessageRequest>,
    depot: &mut Depot,
) -> Result<Json<WhatsappMessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    state
        .app
        .messaging
        .send(
            MessageChannel::Whatsapp,
            Some(request.to.clone()),
            request.message,
        )
        .await
        .map_err(|source| {
            error!("whatsapp send failed: {source}");

            StatusError::bad_request().brief("message_send_failed")
        })?;

    Ok(Json(WhatsappMessageResponse {
        sent: true,
        channel: MessageChannel::Whatsapp.as_str().to_string(),
        to: request.to,
    }))
}
