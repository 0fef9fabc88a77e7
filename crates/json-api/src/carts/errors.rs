//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("cart_not_found"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("product_not_found"),
        CartsServiceError::Sql(source) => {
            error!("failed to write cart: {source}");

            StatusError::bad_request().brief("cart_write_failed")
        }
        CartsServiceError::AlreadyExists
        | CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => StatusError::bad_request().brief("cart_write_failed"),
    }
}
