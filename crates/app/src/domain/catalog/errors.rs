//! Catalog service errors.

use thiserror::Error;

/// Failures answering catalog queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogServiceError {
    /// No store with the requested id.
    #[error("store not found")]
    StoreNotFound,

    /// No product with the requested id.
    #[error("product not found")]
    ProductNotFound,

    /// No service with the requested id.
    #[error("service not found")]
    ServiceNotFound,
}
