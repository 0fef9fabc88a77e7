//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::carts::records::{
    CartItemRecord, CartRecord, CartUuid, CartWithItems,
};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Cart item identifier
    pub id: Uuid,
    /// Product the item was added from
    pub product_id: Uuid,
    /// SKU snapshot taken at add time
    pub sku: String,
    /// Price snapshot in minor currency units
    pub price_cents: u64,
    /// Currency snapshot
    pub currency: String,
    /// Quantity requested
    pub qty: i64,
    /// Creation timestamp
    pub created_at: String,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(record: CartItemRecord) -> Self {
        Self {
            id: record.uuid.into_uuid(),
            product_id: record.product_uuid.into_uuid(),
            sku: record.sku,
            price_cents: record.price_cents,
            currency: record.currency,
            qty: record.qty,
            created_at: record.created_at.to_string(),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// Cart identifier
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Optional shopper reference
    pub user_id: Option<Uuid>,
    /// Cart currency, fixed at creation
    pub currency: String,
    /// Creation timestamp
    pub created_at: String,
    /// Items in insertion order
    pub items: Vec<CartItemResponse>,
}

impl CartResponse {
    pub(crate) fn from_cart(cart: CartRecord, items: Vec<CartItemRecord>) -> Self {
        Self {
            id: cart.uuid.into_uuid(),
            tenant_id: cart.tenant_uuid.into_uuid(),
            user_id: cart.user_uuid,
            currency: cart.currency,
            created_at: cart.created_at.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CartWithItems> for CartResponse {
    fn from(value: CartWithItems) -> Self {
        Self::from_cart(value.cart, value.items)
    }
}

/// Get Cart Handler
///
/// Returns the cart and its items in insertion order.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart with items"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(CartUuid::from_uuid(cart.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
