//! Upsert Inventory Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{
    inventory::records::InventoryUpsert, products::records::ProductUuid,
    tenants::records::TenantUuid, warehouses::records::WarehouseUuid,
};

use crate::{
    extensions::*,
    inventory::{errors::into_status_error, handlers::index::InventoryResponse},
    state::State,
};

/// Upsert Inventory Request
///
/// `qtyOnHand` may be any integer, including negative; stock corrections
/// come in from systems that already oversold.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpsertInventoryRequest {
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Tracked product
    pub product_id: Uuid,
    /// Holding warehouse
    pub warehouse_id: Uuid,
    /// Units on hand
    pub qty_on_hand: i64,
}

impl From<UpsertInventoryRequest> for InventoryUpsert {
    fn from(request: UpsertInventoryRequest) -> Self {
        Self {
            tenant_uuid: TenantUuid::from_uuid(request.tenant_id),
            product_uuid: ProductUuid::from_uuid(request.product_id),
            warehouse_uuid: WarehouseUuid::from_uuid(request.warehouse_id),
            qty_on_hand: request.qty_on_hand,
        }
    }
}

/// Upsert Inventory Handler
///
/// Creates the row for a product and warehouse pair or overwrites its
/// on-hand quantity. Reservations are never touched by this endpoint.
#[endpoint(
    tags("inventory"),
    summary = "Upsert Inventory",
    responses(
        (status_code = StatusCode::OK, description = "Inventory row created or updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Write failure"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpsertInventoryRequest>,
    depot: &mut Depot,
) -> Result<Json<InventoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let row = state
        .app
        .inventory
        .upsert_inventory(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(row.into()))
}
