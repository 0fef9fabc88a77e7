//! Liveness endpoint.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Liveness report. Deliberately shallow: it says the process is serving
/// requests, not that the database or payment provider are reachable.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the server is up
    pub status: String,
}

/// Answers load balancer and uptime checks. Mounted at both `/health`
/// (the path monitoring tooling expects) and `/healthcheck`.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
