//! App Router

use salvo::Router;

use crate::{carts, checkout, inventory, messages, products, tenants, warehouses, webhooks};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("tenants")
                .get(tenants::handlers::index::handler)
                .post(tenants::handlers::create::handler),
        )
        .push(
            Router::with_path("products")
                .get(products::handlers::index::handler)
                .post(products::handlers::create::handler),
        )
        .push(
            Router::with_path("warehouses")
                .get(warehouses::handlers::index::handler)
                .post(warehouses::handlers::create::handler),
        )
        .push(
            Router::with_path("inventory")
                .get(inventory::handlers::index::handler)
                .post(inventory::handlers::upsert::handler),
        )
        .push(
            Router::with_path("cart")
                .post(carts::handlers::create::handler)
                .push(Router::with_path("calculate").post(carts::handlers::calculate::handler))
                .push(
                    Router::with_path("{cart}")
                        .get(carts::handlers::get::handler)
                        .push(Router::with_path("items").post(carts::items::create::handler)),
                ),
        )
        .push(
            Router::with_path("checkout")
                .push(Router::with_path("stripe").post(checkout::handlers::stripe::handler))
                .push(Router::with_path("bkash").post(checkout::handlers::bkash::handler)),
        )
        .push(
            Router::with_path("webhooks")
                .push(Router::with_path("stripe").post(webhooks::stripe::handler)),
        )
        .push(
            Router::with_path("messages")
                .push(Router::with_path("whatsapp").post(messages::whatsapp::handler))
                .push(Router::with_path("discord").post(messages::discord::handler)),
        )
        .push(Router::with_path("notify").post(messages::notify::handler))
}
