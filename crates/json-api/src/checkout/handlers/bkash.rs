//! bKash Checkout Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// bKash Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BkashCheckoutResponse {
    /// Always `not_configured`
    pub status: String,
}

/// bKash Checkout Handler
///
/// The bKash flow has not been built; this answers `not_configured`
/// unconditionally, even when credentials are present in the environment.
#[endpoint(tags("checkout"), summary = "Create bKash Checkout Session")]
pub(crate) async fn handler() -> Json<BkashCheckoutResponse> {
    Json(BkashCheckoutResponse {
        status: "not_configured".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_bkash_always_not_configured() -> TestResult {
        let router = Router::new()
            .push(Router::with_path("checkout").push(Router::with_path("bkash").post(handler)));

        let response: BkashCheckoutResponse = TestClient::post("http://example.com/checkout/bkash")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "not_configured");

        Ok(())
    }
}
