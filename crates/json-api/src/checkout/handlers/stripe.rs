//! Stripe Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{
    carts::records::CartUuid, checkout::gateway::CheckoutSessionParams,
};

use crate::{
    checkout::errors::into_status_error,
    extensions::*,
    state::State,
    validate::{Validate, ValidationError, valid_url},
};

/// Stripe Checkout Request
///
/// Redirect URL fields keep their provider-facing snake_case names.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StripeCheckoutRequest {
    /// Cart to check out
    #[serde(rename = "cartId")]
    pub cart_id: Uuid,
    /// Where the provider redirects after payment
    pub success_url: String,
    /// Where the provider redirects on cancel
    pub cancel_url: String,
}

impl Validate for StripeCheckoutRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        valid_url("success_url", &self.success_url)?;
        valid_url("cancel_url", &self.cancel_url)?;

        Ok(())
    }
}

/// Stripe Checkout Response
///
/// The provider's session id and redirect URL, passed through verbatim.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StripeCheckoutResponse {
    /// Hosted session id
    pub id: String,
    /// Hosted payment page URL
    pub url: String,
}

/// Stripe Checkout Handler
///
/// Creates a hosted payment session from the cart's item snapshots. No
/// order is recorded; completion arrives on the provider's webhook.
#[endpoint(
    tags("checkout"),
    summary = "Create Stripe Checkout Session",
    responses(
        (status_code = StatusCode::OK, description = "Hosted session created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Provider not configured or session failed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<StripeCheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<StripeCheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    let session = state
        .app
        .checkout
        .create_stripe_session(
            CartUuid::from_uuid(request.cart_id),
            CheckoutSessionParams {
                success_url: request.success_url,
                cancel_url: request.cancel_url,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(StripeCheckoutResponse {
        id: session.id,
        url: session.url,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::checkout::{CheckoutServiceError, gateway::CheckoutSession};

    use crate::test_helpers::TestApp;

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.into_service(
            Router::with_path("checkout").push(Router::with_path("stripe").post(handler)),
        )
    }

    fn body(cart: Uuid) -> serde_json::Value {
        json!({
            "cartId": cart,
            "success_url": "https://shop.example/success",
            "cancel_url": "https://shop.example/cancel",
        })
    }

    #[tokio::test]
    async fn test_stripe_checkout_returns_session_verbatim() -> TestResult {
        let cart = CartUuid::new();

        let mut app = TestApp::new();

        app.checkout
            .expect_create_stripe_session()
            .once()
            .withf(move |requested, params| {
                *requested == cart && params.success_url == "https://shop.example/success"
            })
            .return_once(|_, _| {
                Ok(CheckoutSession {
                    id: "cs_test_123".to_string(),
                    url: "https://checkout.stripe.com/c/cs_test_123".to_string(),
                })
            });

        let response: StripeCheckoutResponse = TestClient::post("http://example.com/checkout/stripe")
            .json(&body(cart.into_uuid()))
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.id, "cs_test_123");
        assert_eq!(response.url, "https://checkout.stripe.com/c/cs_test_123");

        Ok(())
    }

    #[tokio::test]
    async fn test_stripe_checkout_not_configured_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.checkout
            .expect_create_stripe_session()
            .once()
            .return_once(|_, _| Err(CheckoutServiceError::NotConfigured));

        let res = TestClient::post("http://example.com/checkout/stripe")
            .json(&body(Uuid::now_v7()))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_stripe_checkout_unknown_cart_returns_404() -> TestResult {
        let mut app = TestApp::new();

        app.checkout
            .expect_create_stripe_session()
            .once()
            .return_once(|_, _| Err(CheckoutServiceError::CartNotFound));

        let res = TestClient::post("http://example.com/checkout/stripe")
            .json(&body(Uuid::now_v7()))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_stripe_checkout_invalid_url_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.checkout.expect_create_stripe_session().never();

        let res = TestClient::post("http://example.com/checkout/stripe")
            .json(&json!({
                "cartId": Uuid::now_v7(),
                "success_url": "/relative/path",
                "cancel_url": "https://shop.example/cancel",
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
