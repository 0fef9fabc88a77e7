//! Domain modules

pub mod carts;
pub mod checkout;
pub mod inventory;
pub mod messaging;
pub mod products;
pub mod read_policy;
pub mod tenants;
pub mod warehouses;
