//! Checkout

pub mod errors;
pub mod gateway;
pub mod service;
pub mod stripe;

pub use errors::CheckoutServiceError;
pub use service::*;
