//! Warehouses Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    tenants::records::TenantUuid,
    warehouses::records::{NewWarehouse, WarehouseRecord, WarehouseUuid},
};

const LIST_WAREHOUSES_SQL: &str = include_str!("sql/list_warehouses.sql");
const CREATE_WAREHOUSE_SQL: &str = include_str!("sql/create_warehouse.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgWarehousesRepository;

impl PgWarehousesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_warehouses(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<WarehouseRecord>, sqlx::Error> {
        query_as::<Postgres, WarehouseRecord>(LIST_WAREHOUSES_SQL)
            .bind(tenant.map(TenantUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_warehouse(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: WarehouseUuid,
        warehouse: &NewWarehouse,
    ) -> Result<WarehouseRecord, sqlx::Error> {
        query_as::<Postgres, WarehouseRecord>(CREATE_WAREHOUSE_SQL)
            .bind(uuid.into_uuid())
            .bind(warehouse.tenant_uuid.into_uuid())
            .bind(&warehouse.name)
            .bind(warehouse.location.as_deref())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for WarehouseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: WarehouseUuid::from_uuid(row.try_get("uuid")?),
            tenant_uuid: TenantUuid::from_uuid(row.try_get::<Uuid, _>("tenant_uuid")?),
            name: row.try_get("name")?,
            location: row.try_get("location")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
