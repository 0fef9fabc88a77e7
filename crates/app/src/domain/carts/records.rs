//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, tenants::records::TenantUuid},
    uuids::TypedUuid,
};
use uuid::Uuid;

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Record
#[derive(Debug, Clone)]
pub struct CartRecord {
    /// Unique cart identifier.
    pub uuid: CartUuid,

    /// Owning tenant.
    pub tenant_uuid: TenantUuid,

    /// Optional shopper reference. Not enforced against the users table.
    pub user_uuid: Option<Uuid>,

    /// Cart currency. Fixed at creation time.
    pub currency: String,

    /// Cart creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// New Cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub tenant_uuid: TenantUuid,
    pub user_uuid: Option<Uuid>,
}

/// Cart Item Record
///
/// `sku`, `price_cents` and `currency` are copied from the product when the
/// item is added and never refreshed afterwards.
#[derive(Debug, Clone)]
pub struct CartItemRecord {
    /// Unique cart item identifier.
    pub uuid: CartItemUuid,

    /// Cart this item belongs to.
    pub cart_uuid: CartUuid,

    /// Product this item was added from.
    pub product_uuid: ProductUuid,

    /// SKU snapshot taken at add time.
    pub sku: String,

    /// Price snapshot in minor currency units, taken at add time.
    pub price_cents: u64,

    /// Currency snapshot taken at add time.
    pub currency: String,

    /// Quantity requested. Always positive.
    pub qty: i64,

    /// Item creation timestamp.
    pub created_at: Timestamp,
}

/// New Cart Item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,
    pub qty: i64,
}

/// A cart together with its items in insertion order.
#[derive(Debug, Clone)]
pub struct CartWithItems {
    pub cart: CartRecord,
    pub items: Vec<CartItemRecord>,
}
