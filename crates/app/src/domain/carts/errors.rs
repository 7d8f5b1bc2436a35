//! Carts service errors.

use thiserror::Error;

/// Failures reading or mutating carts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartsServiceError {
    /// No cart item with the requested id.
    #[error("cart item not found")]
    ItemNotFound,

    /// The line references a product that does not exist.
    #[error("product not found")]
    ProductNotFound,

    /// The line references a service that does not exist.
    #[error("service not found")]
    ServiceNotFound,

    /// Quantities start at one.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}
