//! Warehouse Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::warehouses::WarehousesServiceError;

pub(crate) fn into_status_error(error: WarehousesServiceError) -> StatusError {
    match error {
        WarehousesServiceError::NotFound => StatusError::not_found().brief("warehouse_not_found"),
        WarehousesServiceError::Sql(source) => {
            error!("failed to write warehouse: {source}");

            StatusError::bad_request().brief("warehouse_create_failed")
        }
        WarehousesServiceError::AlreadyExists
        | WarehousesServiceError::InvalidReference
        | WarehousesServiceError::MissingRequiredData
        | WarehousesServiceError::InvalidData => {
            StatusError::bad_request().brief("warehouse_create_failed")
        }
    }
}
