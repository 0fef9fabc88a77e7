//! Warehouse Records

use jiff::Timestamp;

use crate::{domain::tenants::records::TenantUuid, uuids::TypedUuid};

/// Warehouse UUID
pub type WarehouseUuid = TypedUuid<WarehouseRecord>;

/// Warehouse Record
#[derive(Debug, Clone)]
pub struct WarehouseRecord {
    /// Unique warehouse identifier.
    pub uuid: WarehouseUuid,

    /// Owning tenant.
    pub tenant_uuid: TenantUuid,

    /// Human-readable warehouse name.
    pub name: String,

    /// Optional free-form location.
    pub location: Option<String>,

    /// Warehouse creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// New Warehouse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWarehouse {
    pub tenant_uuid: TenantUuid,
    pub name: String,
    pub location: Option<String>,
}
