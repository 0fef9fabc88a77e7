//! Warehouses

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::WarehousesServiceError;
pub use service::*;
