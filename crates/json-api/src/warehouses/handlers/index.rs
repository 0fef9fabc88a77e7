//! Warehouse Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{tenants::records::TenantUuid, warehouses::records::WarehouseRecord};

use crate::{extensions::*, state::State};

/// Warehouse Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WarehouseResponse {
    /// Warehouse identifier
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Display name
    pub name: String,
    /// Optional free-form location
    pub location: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl From<WarehouseRecord> for WarehouseResponse {
    fn from(record: WarehouseRecord) -> Self {
        Self {
            id: record.uuid.into_uuid(),
            tenant_id: record.tenant_uuid.into_uuid(),
            name: record.name,
            location: record.location,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WarehousesResponse {
    /// The newest warehouses, capped at fifty
    pub items: Vec<WarehouseResponse>,
}

/// Warehouse Index Handler
#[endpoint(
    tags("warehouses"),
    summary = "List Warehouses",
    parameters(("tenantId" = Option<Uuid>, Query, description = "Filter by tenant")),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<WarehousesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = req.query::<Uuid>("tenantId").map(TenantUuid::from_uuid);

    let warehouses = state
        .app
        .warehouses
        .list_warehouses(tenant)
        .await
        .or_500("failed to fetch warehouses")?;

    Ok(Json(WarehousesResponse {
        items: warehouses.into_iter().map(Into::into).collect(),
    }))
}
