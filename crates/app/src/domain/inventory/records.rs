//! Inventory Records

use jiff::Timestamp;

use crate::{
    domain::{
        products::records::ProductUuid, tenants::records::TenantUuid,
        warehouses::records::WarehouseUuid,
    },
    uuids::TypedUuid,
};

/// Inventory UUID
pub type InventoryUuid = TypedUuid<InventoryRecord>;

/// Inventory Record
///
/// One row per product and warehouse pair. `qty_on_hand` is allowed to go
/// negative; oversell is reconciled out of band.
#[derive(Debug, Clone)]
pub struct InventoryRecord {
    /// Unique inventory row identifier.
    pub uuid: InventoryUuid,

    /// Owning tenant.
    pub tenant_uuid: TenantUuid,

    /// Product tracked by this row.
    pub product_uuid: ProductUuid,

    /// Warehouse holding the stock.
    pub warehouse_uuid: WarehouseUuid,

    /// Units physically on hand.
    pub qty_on_hand: i64,

    /// Units reserved for open orders.
    pub qty_reserved: i64,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// Inventory Upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryUpsert {
    pub tenant_uuid: TenantUuid,
    pub product_uuid: ProductUuid,
    pub warehouse_uuid: WarehouseUuid,
    pub qty_on_hand: i64,
}
