//! Tenants service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        read_policy::ReadPolicy,
        tenants::{
            errors::TenantsServiceError,
            records::{NewTenant, TenantRecord, TenantUuid},
            repository::PgTenantsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgTenantsService {
    db: Db,
    repository: PgTenantsRepository,
    read_policy: ReadPolicy,
}

impl PgTenantsService {
    #[must_use]
    pub fn new(db: Db, read_policy: ReadPolicy) -> Self {
        Self {
            db,
            repository: PgTenantsRepository::new(),
            read_policy,
        }
    }

    async fn fetch_tenants(&self) -> Result<Vec<TenantRecord>, TenantsServiceError> {
        let mut tx = self.db.begin().await?;

        let tenants = self.repository.list_tenants(&mut tx).await?;

        tx.commit().await?;

        Ok(tenants)
    }
}

#[async_trait]
impl TenantsService for PgTenantsService {
    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, TenantsServiceError> {
        self.read_policy
            .apply("failed to list tenants", self.fetch_tenants().await)
    }

    async fn create_tenant(
        &self,
        tenant: NewTenant,
    ) -> Result<TenantRecord, TenantsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_tenant(&mut tx, TenantUuid::new(), &tenant)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait TenantsService: Send + Sync {
    /// Retrieves the newest tenants, capped at fifty.
    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, TenantsServiceError>;

    /// Creates a new tenant with a server-generated identifier.
    async fn create_tenant(&self, tenant: NewTenant)
    -> Result<TenantRecord, TenantsServiceError>;
}
