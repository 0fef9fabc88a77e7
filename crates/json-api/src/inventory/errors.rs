//! Inventory Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::inventory::InventoryServiceError;

pub(crate) fn into_status_error(error: InventoryServiceError) -> StatusError {
    match error {
        InventoryServiceError::NotFound => StatusError::not_found().brief("inventory_not_found"),
        InventoryServiceError::Sql(source) => {
            error!("failed to write inventory: {source}");

            StatusError::bad_request().brief("inventory_upsert_failed")
        }
        InventoryServiceError::AlreadyExists
        | InventoryServiceError::InvalidReference
        | InventoryServiceError::MissingRequiredData
        | InventoryServiceError::InvalidData => {
            StatusError::bad_request().brief("inventory_upsert_failed")
        }
    }
}
