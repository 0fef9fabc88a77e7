//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::checkout::CheckoutServiceError;

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::NotConfigured => {
            StatusError::bad_request().brief("Stripe not configured")
        }
        CheckoutServiceError::CartNotFound => StatusError::not_found().brief("cart_not_found"),
        CheckoutServiceError::Cart(source) => {
            error!("failed to load cart for checkout: {source}");

            StatusError::bad_request().brief("checkout_failed")
        }
        CheckoutServiceError::Gateway(source) => {
            error!("payment provider rejected session: {source}");

            StatusError::bad_request().brief("checkout_failed")
        }
    }
}
