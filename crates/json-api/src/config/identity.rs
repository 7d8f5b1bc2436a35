//! Identity Config

use clap::Args;
use souk_app::{UserId, domain::catalog::models::StoreId};

/// Identities assumed when a request carries no identity headers.
#[derive(Debug, Clone, Copy)]
pub struct IdentityDefaults {
    /// The shopper storefront requests act for.
    pub user: UserId,

    /// The store retailer requests act for.
    pub store: StoreId,
}

/// Identity settings.
#[derive(Debug, Args)]
pub struct IdentityConfig {
    /// User id assumed when no x-user-id header is sent
    #[arg(long, env = "DEFAULT_USER_ID", default_value_t = 1)]
    pub default_user_id: i64,

    /// Store id assumed when no x-store-id header is sent
    #[arg(long, env = "DEFAULT_STORE_ID", default_value_t = 1)]
    pub default_store_id: i64,
}

impl IdentityConfig {
    /// The typed defaults the identity middleware falls back to.
    #[must_use]
    pub fn defaults(&self) -> IdentityDefaults {
        IdentityDefaults {
            user: UserId::from_i64(self.default_user_id),
            store: StoreId::from_i64(self.default_store_id),
        }
    }
}
