//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use souk_app::{UserId, domain::catalog::models::StoreId};

const USER_ID_KEY: &str = "souk.user_id";
const STORE_ID_KEY: &str = "souk.store_id";

/// Helpers for moving typed values through the depot.
///
/// The identity accessors answer with a 500, not a 401: every identity route
/// sits behind the identity middleware, so a missing id is a wiring bug.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_user_id(&mut self, user: UserId);

    fn insert_store_id(&mut self, store: StoreId);

    fn user_id_or_500(&self) -> Result<UserId, StatusError>;

    fn store_id_or_500(&self) -> Result<StoreId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_id(&mut self, user: UserId) {
        self.insert(USER_ID_KEY, user);
    }

    fn insert_store_id(&mut self, store: StoreId) {
        self.insert(STORE_ID_KEY, store);
    }

    fn user_id_or_500(&self) -> Result<UserId, StatusError> {
        self.get::<UserId>(USER_ID_KEY)
            .copied()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn store_id_or_500(&self) -> Result<StoreId, StatusError> {
        self.get::<StoreId>(STORE_ID_KEY)
            .copied()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
