//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        checkout::{CheckoutService, GatewayCheckoutService, gateway::PaymentGateway},
        inventory::{InventoryService, PgInventoryService},
        messaging::{Messaging, NoopMessaging},
        products::{PgProductsService, ProductsService},
        read_policy::ReadPolicy,
        tenants::{PgTenantsService, TenantsService},
        warehouses::{PgWarehousesService, WarehousesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub tenants: Arc<dyn TenantsService>,
    pub products: Arc<dyn ProductsService>,
    pub warehouses: Arc<dyn WarehousesService>,
    pub inventory: Arc<dyn InventoryService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub messaging: Arc<dyn Messaging>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Collection reads degrade to empty pages when the store is unavailable;
    /// writes surface their errors. `payment_gateway` is `None` when no
    /// provider credentials were supplied. Messaging is always the no-op
    /// backend for now; WhatsApp and Discord credentials are read from the
    /// environment for deployment parity but a real backend is not yet
    /// selectable here.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        payment_gateway: Option<Arc<dyn PaymentGateway>>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);
        let read_policy = ReadPolicy::DegradeToEmpty;

        let carts: Arc<dyn CartsService> = Arc::new(PgCartsService::new(db.clone()));

        Ok(Self {
            tenants: Arc::new(PgTenantsService::new(db.clone(), read_policy)),
            products: Arc::new(PgProductsService::new(db.clone(), read_policy)),
            warehouses: Arc::new(PgWarehousesService::new(db.clone(), read_policy)),
            inventory: Arc::new(PgInventoryService::new(db, read_policy)),
            checkout: Arc::new(GatewayCheckoutService::new(
                Arc::clone(&carts),
                payment_gateway,
            )),
            carts,
            messaging: Arc::new(NoopMessaging::new()),
        })
    }
}
