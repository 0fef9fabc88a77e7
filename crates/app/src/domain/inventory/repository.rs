//! Inventory Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    inventory::records::{InventoryRecord, InventoryUpsert, InventoryUuid},
    products::records::ProductUuid,
    tenants::records::TenantUuid,
    warehouses::records::WarehouseUuid,
};

const LIST_INVENTORY_SQL: &str = include_str!("sql/list_inventory.sql");
const UPSERT_INVENTORY_SQL: &str = include_str!("sql/upsert_inventory.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_inventory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<InventoryRecord>, sqlx::Error> {
        query_as::<Postgres, InventoryRecord>(LIST_INVENTORY_SQL)
            .bind(tenant.map(TenantUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert or update the row keyed by product and warehouse.
    ///
    /// The insert path starts `qty_reserved` at zero; the update path leaves
    /// it untouched and only overwrites `qty_on_hand`.
    pub(crate) async fn upsert_inventory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: InventoryUuid,
        upsert: &InventoryUpsert,
    ) -> Result<InventoryRecord, sqlx::Error> {
        query_as::<Postgres, InventoryRecord>(UPSERT_INVENTORY_SQL)
            .bind(uuid.into_uuid())
            .bind(upsert.tenant_uuid.into_uuid())
            .bind(upsert.product_uuid.into_uuid())
            .bind(upsert.warehouse_uuid.into_uuid())
            .bind(upsert.qty_on_hand)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for InventoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: InventoryUuid::from_uuid(row.try_get("uuid")?),
            tenant_uuid: TenantUuid::from_uuid(row.try_get::<Uuid, _>("tenant_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get::<Uuid, _>("product_uuid")?),
            warehouse_uuid: WarehouseUuid::from_uuid(row.try_get::<Uuid, _>("warehouse_uuid")?),
            qty_on_hand: row.try_get("qty_on_hand")?,
            qty_reserved: row.try_get("qty_reserved")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
