//! Carts

pub mod errors;
pub mod pricing;
pub mod records;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
