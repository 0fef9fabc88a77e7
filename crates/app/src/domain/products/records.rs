//! Product Records

use jiff::Timestamp;

use crate::{domain::tenants::records::TenantUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    /// Unique product identifier.
    pub uuid: ProductUuid,

    /// Owning tenant.
    pub tenant_uuid: TenantUuid,

    /// Stock keeping unit, unique across the platform.
    pub sku: String,

    /// Display title.
    pub title: String,

    /// Optional long-form description.
    pub description: Option<String>,

    /// Unit price in minor currency units.
    pub price_cents: u64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Product creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// New Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub tenant_uuid: TenantUuid,
    pub sku: String,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: u64,
    pub currency: String,
}
