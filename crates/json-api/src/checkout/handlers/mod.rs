//! Checkout Handlers

pub(crate) mod bkash;
pub(crate) mod stripe;
