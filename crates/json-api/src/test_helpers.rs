//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use bazaar_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService, checkout::MockCheckoutService, inventory::MockInventoryService,
        messaging::MockMessaging, products::MockProductsService, tenants::MockTenantsService,
        warehouses::MockWarehousesService,
    },
};

use crate::state::State;

/// One mock per service on the app context. Untouched mocks reject every
/// call, so a handler reaching into the wrong service fails its test.
#[derive(Default)]
pub(crate) struct TestApp {
    pub(crate) tenants: MockTenantsService,
    pub(crate) products: MockProductsService,
    pub(crate) warehouses: MockWarehousesService,
    pub(crate) inventory: MockInventoryService,
    pub(crate) carts: MockCartsService,
    pub(crate) checkout: MockCheckoutService,
    pub(crate) messaging: MockMessaging,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn into_service(self, route: Router) -> Service {
        let app = AppContext {
            tenants: Arc::new(self.tenants),
            products: Arc::new(self.products),
            warehouses: Arc::new(self.warehouses),
            inventory: Arc::new(self.inventory),
            carts: Arc::new(self.carts),
            checkout: Arc::new(self.checkout),
            messaging: Arc::new(self.messaging),
        };

        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app)))
                .push(route),
        )
    }
}
