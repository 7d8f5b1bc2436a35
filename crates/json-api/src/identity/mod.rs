//! Request identity.
//!
//! There is no real authentication. A request may name the shopper or store
//! it acts for through plain id headers; without them the configured demo
//! identities apply.

pub(crate) mod middleware;

/// Header naming the shopper a storefront request acts for.
pub(crate) const USER_ID_HEADER: &str = "x-user-id";

/// Header naming the store a retailer request acts for.
pub(crate) const STORE_ID_HEADER: &str = "x-store-id";
