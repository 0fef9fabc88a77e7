//! Tenant Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::tenants::records::TenantRecord;

use crate::{extensions::*, state::State};

/// Tenant Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TenantResponse {
    /// Tenant identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique domain
    pub domain: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl From<TenantRecord> for TenantResponse {
    fn from(record: TenantRecord) -> Self {
        Self {
            id: record.uuid.into_uuid(),
            name: record.name,
            domain: record.domain,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TenantsResponse {
    /// The newest tenants, capped at fifty
    pub items: Vec<TenantResponse>,
}

/// Tenant Index Handler
///
/// Returns the newest tenants. An unavailable store yields an empty page.
#[endpoint(tags("tenants"), summary = "List Tenants")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TenantsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tenants = state
        .app
        .tenants
        .list_tenants()
        .await
        .or_500("failed to fetch tenants")?;

    Ok(Json(TenantsResponse {
        items: tenants.into_iter().map(Into::into).collect(),
    }))
}
