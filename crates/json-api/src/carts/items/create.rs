//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{
    carts::records::{CartUuid, NewCartItem},
    products::records::ProductUuid,
};

use crate::{
    carts::{errors::into_status_error, handlers::get::CartItemResponse},
    extensions::*,
    state::State,
    validate::{Validate, ValidationError, positive},
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product_id: Uuid,
    /// Quantity, positive
    pub qty: i64,
}

impl Validate for AddCartItemRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("qty", self.qty)?;

        Ok(())
    }
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        Self {
            product_uuid: ProductUuid::from_uuid(request.product_id),
            qty: request.qty,
        }
    }
}

/// Add Cart Item Handler
///
/// Snapshots the product's sku, price and currency onto the new item.
/// Stock is not checked here.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation or write failure"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    let created = state
        .app
        .carts
        .add_item(CartUuid::from_uuid(cart.into_inner()), request.into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
