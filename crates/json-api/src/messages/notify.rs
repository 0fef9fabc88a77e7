//! Notification Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    extensions::*,
    state::State,
    validate::{Validate, ValidationError, min_len},
};

/// Notification Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotifyRequest {
    /// User the notification is addressed to
    pub user_id: String,
    /// Notification kind, e.g. `order_shipped`
    pub kind: String,
    /// Arbitrary structured payload
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Validate for NotifyRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("userId", &self.user_id, 1)?;
        min_len("kind", &self.kind, 1)?;

        Ok(())
    }
}

/// Notification Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotifyResponse {
    /// Whether the notification was accepted
    pub accepted: bool,
}

/// Notification Handler
///
/// Queues a structured notification for a user. Acceptance does not imply
/// delivery or persistence.
#[endpoint(tags("messages"), summary = "Queue Notification")]
pub(crate) async fn handler(
    json: JsonBody<NotifyRequest>,
    depot: &mut Depot,
) -> Result<Json<NotifyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    state
        .app
        .messaging
        .notify(request.user_id, request.kind, request.payload)
        .await
        .map_err(|source| {
            error!("notify failed: {source}");

            StatusError::bad_request().brief("notify_failed")
        })?;

    Ok(Json(NotifyResponse { accepted: true }))
}
