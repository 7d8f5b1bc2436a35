//! Orders service errors.

use souk::lifecycle::InvalidTransition;
use thiserror::Error;

/// Failures creating, reading or progressing orders.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrdersServiceError {
    /// No order with the requested id.
    #[error("order not found")]
    NotFound,

    /// Orders cannot be placed without somewhere to deliver to.
    #[error("delivery address is required")]
    MissingDeliveryAddress,

    /// The store being ordered from does not exist.
    #[error("store not found")]
    StoreNotFound,

    /// The user's cart has nothing in it.
    #[error("cart is empty")]
    EmptyCart,

    /// The requested status move is not allowed by the lifecycle.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}
