//! Cart Items endpoints

pub(crate) mod create;
