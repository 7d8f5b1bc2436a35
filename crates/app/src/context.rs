//! App Context

use std::sync::Arc;

use crate::{
    domain::{
        carts::{CartsService, MemCartsService},
        catalog::{CatalogService, MemCatalogService},
        negotiation::{MemNegotiationService, NegotiationService},
        orders::{MemOrdersService, OrdersService},
    },
    seed::{self, SeedError},
    storage::Storage,
};

/// Every domain service, wired over one shared storage.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub negotiation: Arc<dyn NegotiationService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build an application context over a fresh empty storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::over(Storage::new())
    }

    /// An in-memory context preloaded with the demo catalog and order.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the demo order is refused during seeding.
    pub async fn seeded() -> Result<Self, SeedError> {
        let storage = Storage::new();

        seed::demo_data(&storage).await?;

        Ok(Self::over(storage))
    }

    fn over(storage: Storage) -> Self {
        Self {
            catalog: Arc::new(MemCatalogService::new(storage.clone())),
            negotiation: Arc::new(MemNegotiationService::new(storage.clone())),
            carts: Arc::new(MemCartsService::new(storage.clone())),
            orders: Arc::new(MemOrdersService::new(storage)),
        }
    }
}
