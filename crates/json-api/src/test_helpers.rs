//! Test helpers.

use std::sync::Arc;

use salvo::prelude::*;

use souk_app::{
    UserId,
    context::AppContext,
    domain::{
        carts::MockCartsService,
        catalog::{MockCatalogService, models::StoreId},
        negotiation::MockNegotiationService,
        orders::MockOrdersService,
    },
};

use crate::{config::IdentityDefaults, errors, router, state::State};

/// One mock per domain service.
///
/// A handler test fills in expectations for the service it exercises and
/// leaves the rest fresh; a fresh mock panics on any call, so a handler
/// reaching into the wrong service fails loudly.
#[derive(Default)]
pub(crate) struct MockServices {
    pub(crate) catalog: MockCatalogService,
    pub(crate) negotiation: MockNegotiationService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
}

impl MockServices {
    /// State over these mocks, with the demo identity defaults (user 1,
    /// store 1) the identity middleware falls back to.
    pub(crate) fn into_state(self) -> Arc<State> {
        let app = AppContext {
            catalog: Arc::new(self.catalog),
            negotiation: Arc::new(self.negotiation),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
        };

        let identity = IdentityDefaults {
            user: UserId::from_i64(1),
            store: StoreId::from_i64(1),
        };

        State::from_app_context(app, identity)
    }

    /// The full service, real routes and error rendering included, so tests
    /// exercise the same paths and `{"message"}` bodies clients see.
    pub(crate) fn into_service(self) -> Service {
        Service::new(router::root_router(self.into_state())).catcher(errors::catcher())
    }
}
