//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Fetch injected state, answering 500 when it is missing.
///
/// The state is injected unconditionally in `main`, so a miss here means
/// the router was assembled without the affix hoop. Logged because that
/// is a wiring bug, not a client error.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!("state not found in depot");

            StatusError::internal_server_error()
        })
    }
}
