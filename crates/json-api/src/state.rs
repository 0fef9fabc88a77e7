//! Shared handler state.

use std::sync::Arc;

use bazaar_app::context::AppContext;

/// Everything a handler can reach through the depot: the wired domain
/// services. Injected once at startup and shared across requests.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
