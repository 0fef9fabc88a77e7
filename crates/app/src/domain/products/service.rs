//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::{
            errors::ProductsServiceError,
            records::{NewProduct, ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
        read_policy::ReadPolicy,
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
    read_policy: ReadPolicy,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db, read_policy: ReadPolicy) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            read_policy,
        }
    }

    async fn fetch_products(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, tenant).await?;

        tx.commit().await?;

        Ok(products)
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.read_policy
            .apply("failed to list products", self.fetch_products(tenant).await)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, ProductUuid::new(), &product)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the newest products, optionally scoped to one tenant.
    async fn list_products(
        &self,
        tenant: Option<TenantUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Creates a new product with a server-generated identifier.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn duplicate_sku_returns_already_exists_across_tenants() -> TestResult {
        let ctx = TestContext::new().await;
        ctx.create_product("TEE-RED-M", 1999).await;

        let other_tenant = ctx.create_tenant("Other Shop").await;

        // Skus are unique storefront-wide, not per tenant.
        let result = ctx
            .products
            .create_product(NewProduct {
                tenant_uuid: other_tenant,
                sku: "TEE-RED-M".to_string(),
                title: "Red Tee".to_string(),
                description: None,
                price_cents: 2499,
                currency: "USD".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_scopes_to_tenant() -> TestResult {
        let ctx = TestContext::new().await;
        ctx.create_product("SKU-DEFAULT", 500).await;

        let other_tenant = ctx.create_tenant("Other Shop").await;

        ctx.products
            .create_product(NewProduct {
                tenant_uuid: other_tenant,
                sku: "SKU-OTHER".to_string(),
                title: "Other Product".to_string(),
                description: None,
                price_cents: 900,
                currency: "USD".to_string(),
            })
            .await?;

        let scoped = ctx.products.list_products(Some(other_tenant)).await?;

        assert_eq!(scoped.len(), 1, "expected only the other tenant's product");
        assert_eq!(scoped[0].sku, "SKU-OTHER");

        let all = ctx.products.list_products(None).await?;

        assert_eq!(all.len(), 2, "expected every product without a scope");

        Ok(())
    }
}
