//! Warehouses service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        read_policy::ReadPolicy,
        tenants::records::TenantUuid,
        warehouses::{
            errors::WarehousesServiceError,
            records::{NewWarehouse, WarehouseRecord, WarehouseUuid},
            repository::PgWarehousesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgWarehousesService {
    db: Db,
    repository: PgWarehousesRepository,
    read_policy: ReadPolicy,
}

impl PgWarehousesService {
    #[must_use]
    pub fn new(db: Db, read_policy: ReadPolicy) -> Self {
        Self {
            db,
            repository: PgWarehousesRepository::new(),
            read_policy,
        }
    }

    async fn fetch_warehouses(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<WarehouseRecord>, WarehousesServiceError> {
        let mut tx = self.db.begin().await?;

        let warehouses = self.repository.list_warehouses(&mut tx, tenant).await?;

        tx.commit().await?;

        Ok(warehouses)
    }
}

#[async_trait]
impl WarehousesService for PgWarehousesService {
    async fn list_warehouses(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<WarehouseRecord>, WarehousesServiceError> {
        self.read_policy.apply(
            "failed to list warehouses",
            self.fetch_warehouses(tenant).await,
        )
    }

    async fn create_warehouse(
        &self,
        warehouse: NewWarehouse,
    ) -> Result<WarehouseRecord, WarehousesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_warehouse(&mut tx, WarehouseUuid::new(), &warehouse)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait WarehousesService: Send + Sync {
    /// Retrieves the newest warehouses, optionally scoped to one tenant.
    async fn list_warehouses(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<WarehouseRecord>, WarehousesServiceError>;

    /// Creates a new warehouse with a server-generated identifier.
    async fn create_warehouse(
        &self,
        warehouse: NewWarehouse,
    ) -> Result<WarehouseRecord, WarehousesServiceError>;
}
