//! Cart Repositories

pub(crate) mod carts;
pub(crate) mod items;
