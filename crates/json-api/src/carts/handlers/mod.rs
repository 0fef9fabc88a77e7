//! Cart Handlers

pub(crate) mod calculate;
pub(crate) mod create;
pub(crate) mod get;
