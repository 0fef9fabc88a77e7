//! Messaging endpoints

pub(crate) mod discord;
pub(crate) mod notify;
pub(crate) mod whatsapp;
