//! Messaging

pub mod service;

pub use service::*;
