//! Inventory service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        inventory::{
            errors::InventoryServiceError,
            records::{InventoryRecord, InventoryUpsert, InventoryUuid},
            repository::PgInventoryRepository,
        },
        read_policy::ReadPolicy,
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    repository: PgInventoryRepository,
    read_policy: ReadPolicy,
}

impl PgInventoryService {
    #[must_use]
    pub fn new(db: Db, read_policy: ReadPolicy) -> Self {
        Self {
            db,
            repository: PgInventoryRepository::new(),
            read_policy,
        }
    }

    async fn fetch_inventory(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<InventoryRecord>, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let inventory = self.repository.list_inventory(&mut tx, tenant).await?;

        tx.commit().await?;

        Ok(inventory)
    }
}

#[async_trait]
impl InventoryService for PgInventoryService {
    async fn list_inventory(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<InventoryRecord>, InventoryServiceError> {
        self.read_policy.apply(
            "failed to list inventory",
            self.fetch_inventory(tenant).await,
        )
    }

    async fn upsert_inventory(
        &self,
        upsert: InventoryUpsert,
    ) -> Result<InventoryRecord, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let row = self
            .repository
            .upsert_inventory(&mut tx, InventoryUuid::new(), &upsert)
            .await?;

        tx.commit().await?;

        Ok(row)
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Retrieves the newest inventory rows, optionally scoped to one tenant.
    async fn list_inventory(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<InventoryRecord>, InventoryServiceError>;

    /// Creates or updates the stock level for a product and warehouse pair.
    async fn upsert_inventory(
        &self,
        upsert: InventoryUpsert,
    ) -> Result<InventoryRecord, InventoryServiceError>;
}
