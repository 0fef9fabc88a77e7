//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::{CartsService, records::CartUuid},
    checkout::{
        errors::CheckoutServiceError,
        gateway::{CheckoutSession, CheckoutSessionParams, PaymentGateway, SessionLineItem},
    },
};

/// Checkout over an optional payment gateway.
///
/// The gateway is absent when no provider credentials were supplied at
/// startup; every session request then fails with `NotConfigured`.
#[derive(Clone)]
pub struct GatewayCheckoutService {
    carts: Arc<dyn CartsService>,
    gateway: Option<Arc<dyn PaymentGateway>>,
}

impl GatewayCheckoutService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartsService>, gateway: Option<Arc<dyn PaymentGateway>>) -> Self {
        Self { carts, gateway }
    }
}

impl std::fmt::Debug for GatewayCheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayCheckoutService")
            .field("gateway_configured", &self.gateway.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CheckoutService for GatewayCheckoutService {
    async fn create_stripe_session(
        &self,
        cart: CartUuid,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, CheckoutServiceError> {
        let Some(gateway) = self.gateway.as_ref() else {
            return Err(CheckoutServiceError::NotConfigured);
        };

        let cart = self.carts.get_cart(cart).await?;

        // Line items come from the snapshots taken at add time, not from the
        // current product rows. Completion is handled by the provider's
        // webhook; no order is recorded here.
        let line_items = cart
            .items
            .into_iter()
            .map(|item| SessionLineItem {
                name: item.sku,
                price_cents: item.price_cents,
                currency: item.currency,
                qty: item.qty,
            })
            .collect();

        let session = gateway.create_session(line_items, params).await?;

        Ok(session)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Creates a hosted payment session for the given cart.
    async fn create_stripe_session(
        &self,
        cart: CartUuid,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, CheckoutServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::{
        carts::{
            CartsServiceError, MockCartsService,
            records::{CartItemRecord, CartItemUuid, CartRecord, CartWithItems},
        },
        checkout::gateway::MockPaymentGateway,
        products::records::ProductUuid,
        tenants::records::TenantUuid,
    };

    use super::*;

    fn params() -> CheckoutSessionParams {
        CheckoutSessionParams {
            success_url: "https://shop.example/success".to_string(),
            cancel_url: "https://shop.example/cancel".to_string(),
        }
    }

    fn cart_with_one_item(cart: CartUuid) -> CartWithItems {
        CartWithItems {
            cart: CartRecord {
                uuid: cart,
                tenant_uuid: TenantUuid::new(),
                user_uuid: None,
                currency: "USD".to_string(),
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
            },
            items: vec![CartItemRecord {
                uuid: CartItemUuid::new(),
                cart_uuid: cart,
                product_uuid: ProductUuid::new(),
                sku: "TEE-RED-M".to_string(),
                price_cents: 1999,
                currency: "USD".to_string(),
                qty: 2,
                created_at: Timestamp::UNIX_EPOCH,
            }],
        }
    }

    #[tokio::test]
    async fn missing_gateway_returns_not_configured() {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();

        let service = GatewayCheckoutService::new(Arc::new(carts), None);

        let result = service
            .create_stripe_session(CartUuid::new(), params())
            .await;

        assert!(
            matches!(result, Err(CheckoutServiceError::NotConfigured)),
            "expected NotConfigured, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_cart_returns_cart_not_found() {
        let cart = CartUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(move |requested| *requested == cart)
            .return_once(|_| Err(CartsServiceError::NotFound));

        let mut gateway = MockPaymentGateway::new();

        gateway.expect_create_session().never();

        let service = GatewayCheckoutService::new(Arc::new(carts), Some(Arc::new(gateway)));

        let result = service.create_stripe_session(cart, params()).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::CartNotFound)),
            "expected CartNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn line_items_are_built_from_item_snapshots() -> TestResult {
        let cart = CartUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_| Ok(cart_with_one_item(cart)));

        let mut gateway = MockPaymentGateway::new();

        gateway
            .expect_create_session()
            .once()
            .withf(|line_items, _| {
                *line_items
                    == [SessionLineItem {
                        name: "TEE-RED-M".to_string(),
                        price_cents: 1999,
                        currency: "USD".to_string(),
                        qty: 2,
                    }]
            })
            .return_once(|_, _| {
                Ok(CheckoutSession {
                    id: "cs_test_123".to_string(),
                    url: "https://checkout.stripe.com/c/cs_test_123".to_string(),
                })
            });

        let service = GatewayCheckoutService::new(Arc::new(carts), Some(Arc::new(gateway)));

        let session = service.create_stripe_session(cart, params()).await?;

        assert_eq!(session.id, "cs_test_123");
        assert_eq!(session.url, "https://checkout.stripe.com/c/cs_test_123");

        Ok(())
    }
}
