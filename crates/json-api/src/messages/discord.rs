//! Discord Message Handler

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

/// Discord Message Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscordMessageRequest {
    /// Message body
    pub message: String,
}

impl Validate for DiscordMessageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("message", &self.message, 1)?;

        Ok(())
    }
}

/// Discord Message Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscordMessageResponse {
    /// Whether the message was accepted
    pub sent: bool,
    /// Always `discord`
    pub channel: String,
}

/// Discord Message Handler
///
/// Posts to the configured webhook's channel, so no recipient is taken.
#[endpoint(tags("messages"), summary = "Send Discord Message")]
pub(crate) async fn handler(
    json: JsonBody<DiscordMessageRequest>,
    depot: &mut Depot,
) -> Result<Json<DiscordMessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    state
        .app
        .messaging
        .send(MessageChannel::Discord, None, request.message)
        .await
        .map_err(|source| {
            error!("discord send failed: {source}");

            StatusError::bad_request().brief("message_send_failed")
        })?;

    Ok(Json(DiscordMessageResponse {
        sent: true,
        channel: MessageChannel::Discord.as_str().to_string(),
    }))
}
