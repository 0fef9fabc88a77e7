//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    carts::records::{CartItemRecord, CartItemUuid, CartUuid},
    products::records::ProductUuid,
};

const LIST_CART_ITEMS_SQL: &str = include_str!("../sql/list_cart_items.sql");
const PRODUCT_SNAPSHOT_SQL: &str = include_str!("../sql/product_snapshot.sql");
const CREATE_CART_ITEM_SQL: &str = include_str!("../sql/create_cart_item.sql");

/// Pricing fields copied from a product onto a new cart item.
#[derive(Debug, Clone)]
pub(crate) struct ProductSnapshot {
    pub(crate) sku: String,
    pub(crate) price_cents: u64,
    pub(crate) currency: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LIST_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn product_snapshot(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductSnapshot, sqlx::Error> {
        query_as::<Postgres, ProductSnapshot>(PRODUCT_SNAPSHOT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CartItemUuid,
        cart: CartUuid,
        product: ProductUuid,
        snapshot: &ProductSnapshot,
        qty: i64,
    ) -> Result<CartItemRecord, sqlx::Error> {
        let price_i64 =
            i64::try_from(snapshot.price_cents).map_err(|e| sqlx::Error::ColumnDecode {
                index: "price_cents".to_string(),
                source: Box::new(e),
            })?;

        query_as::<Postgres, CartItemRecord>(CREATE_CART_ITEM_SQL)
            .bind(uuid.into_uuid())
            .bind(cart.into_uuid())
            .bind(product.into_uuid())
            .bind(&snapshot.sku)
            .bind(price_i64)
            .bind(&snapshot.currency)
            .bind(qty)
            .fetch_one(&mut **tx)
            .await
    }
}

fn price_cents_from_row(row: &PgRow) -> sqlx::Result<u64> {
    let price_i64: i64 = row.try_get("price_cents")?;

    u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price_cents".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for ProductSnapshot {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            sku: row.try_get("sku")?,
            price_cents: price_cents_from_row(row)?,
            currency: row.try_get("currency")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            cart_uuid: CartUuid::from_uuid(row.try_get::<Uuid, _>("cart_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get::<Uuid, _>("product_uuid")?),
            sku: row.try_get("sku")?,
            price_cents: price_cents_from_row(row)?,
            currency: row.try_get("currency")?,
            qty: row.try_get("qty")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
