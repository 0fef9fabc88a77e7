//! Webhook endpoints

pub(crate) mod stripe;
