//! Tenant Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::tenants::TenantsServiceError;

pub(crate) fn into_status_error(error: TenantsServiceError) -> StatusError {
    match error {
        TenantsServiceError::NotFound => StatusError::not_found().brief("tenant_not_found"),
        TenantsServiceError::Sql(source) => {
            error!("failed to write tenant: {source}");

            StatusError::bad_request().brief("tenant_create_failed")
        }
        TenantsServiceError::AlreadyExists
        | TenantsServiceError::InvalidReference
        | TenantsServiceError::MissingRequiredData
        | TenantsServiceError::InvalidData => {
            StatusError::bad_request().brief("tenant_create_failed")
        }
    }
}
