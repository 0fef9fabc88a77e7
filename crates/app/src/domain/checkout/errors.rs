//! Checkout service errors.

use thiserror::Error;

use crate::domain::{carts::CartsServiceError, checkout::gateway::PaymentGatewayError};

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("payment provider not configured")]
    NotConfigured,

    #[error("cart not found")]
    CartNotFound,

    #[error(transparent)]
    Cart(CartsServiceError),

    #[error(transparent)]
    Gateway(#[from] PaymentGatewayError),
}

impl From<CartsServiceError> for CheckoutServiceError {
    fn from(error: CartsServiceError) -> Self {
        match error {
            CartsServiceError::NotFound => Self::CartNotFound,
            other => Self::Cart(other),
        }
    }
}
