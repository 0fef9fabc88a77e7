//! Inventory

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::InventoryServiceError;
pub use service::*;
