//! Inventory Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{inventory::records::InventoryRecord, tenants::records::TenantUuid};

use crate::{extensions::*, state::State};

/// Inventory Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryResponse {
    /// Inventory row identifier
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Tracked product
    pub product_id: Uuid,
    /// Holding warehouse
    pub warehouse_id: Uuid,
    /// Units on hand; may be negative when oversold
    pub qty_on_hand: i64,
    /// Units reserved for open orders
    pub qty_reserved: i64,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl From<InventoryRecord> for InventoryResponse {
    fn from(record: InventoryRecord) -> Self {
        Self {
            id: record.uuid.into_uuid(),
            tenant_id: record.tenant_uuid.into_uuid(),
            product_id: record.product_uuid.into_uuid(),
            warehouse_id: record.warehouse_uuid.into_uuid(),
            qty_on_hand: record.qty_on_hand,
            qty_reserved: record.qty_reserved,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InventoryListResponse {
    /// The newest inventory rows, capped at fifty
    pub items: Vec<InventoryResponse>,
}

/// Inventory Index Handler
#[endpoint(
    tags("inventory"),
    summary = "List Inventory",
    parameters(("tenantId" = Option<Uuid>, Query, description = "Filter by tenant")),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<InventoryListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = req.query::<Uuid>("tenantId").map(TenantUuid::from_uuid);

    let inventory = state
        .app
        .inventory
        .list_inventory(tenant)
        .await
        .or_500("failed to fetch inventory")?;

    Ok(Json(InventoryListResponse {
        items: inventory.into_iter().map(Into::into).collect(),
    }))
}
