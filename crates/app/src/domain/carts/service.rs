//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        records::{
            CartItemRecord, CartItemUuid, CartRecord, CartUuid, CartWithItems, NewCart,
            NewCartItem,
        },
        repositories::{carts::PgCartsRepository, items::PgCartItemsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts: PgCartsRepository,
    items: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts: PgCartsRepository::new(),
            items: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .carts
            .create_cart(&mut tx, CartUuid::new(), &cart)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<CartWithItems, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.carts.get_cart(&mut tx, cart).await?;
        let items = self.items.list_items(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(CartWithItems {
            cart: record,
            items,
        })
    }

    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        // The cart lookup distinguishes a missing cart from a missing product.
        self.carts.get_cart(&mut tx, cart).await?;

        let snapshot = self
            .items
            .product_snapshot(&mut tx, item.product_uuid)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => CartsServiceError::ProductNotFound,
                other => other.into(),
            })?;

        // No stock check here. Availability is only reconciled at fulfilment.
        let created = self
            .items
            .create_item(
                &mut tx,
                CartItemUuid::new(),
                cart,
                item.product_uuid,
                &snapshot,
                item.qty,
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates an empty cart with a server-generated identifier.
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError>;

    /// Retrieves a cart and its items in insertion order.
    async fn get_cart(&self, cart: CartUuid) -> Result<CartWithItems, CartsServiceError>;

    /// Adds an item to a cart, snapshotting the product's sku, price and
    /// currency at add time.
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;
}
