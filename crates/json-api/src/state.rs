//! State

use std::sync::Arc;

use souk_app::context::AppContext;

use crate::config::IdentityDefaults;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) identity: IdentityDefaults,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, identity: IdentityDefaults) -> Self {
        Self { app, identity }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, identity: IdentityDefaults) -> Arc<Self> {
        Arc::new(Self::new(app, identity))
    }
}
