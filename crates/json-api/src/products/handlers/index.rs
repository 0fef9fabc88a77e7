//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{products::records::ProductRecord, tenants::records::TenantUuid};

use crate::{extensions::*, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product identifier
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Stock keeping unit
    pub sku: String,
    /// Display title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Unit price in minor currency units
    pub price_cents: u64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.uuid.into_uuid(),
            tenant_id: record.tenant_uuid.into_uuid(),
            sku: record.sku,
            title: record.title,
            description: record.description,
            price_cents: record.price_cents,
            currency: record.currency,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The newest products, capped at fifty
    pub items: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns the newest products, optionally filtered to one tenant. An
/// unavailable store yields an empty page.
#[endpoint(
    tags("products"),
    summary = "List Products",
    parameters(("tenantId" = Option<Uuid>, Query, description = "Filter by tenant")),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = req.query::<Uuid>("tenantId").map(TenantUuid::from_uuid);

    let products = state
        .app
        .products
        .list_products(tenant)
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        items: products.into_iter().map(Into::into).collect(),
    }))
}
