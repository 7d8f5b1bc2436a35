//! Orders

pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;

pub use souk::lifecycle::{InvalidTransition, OrderStatus, UnknownOrderStatus};

pub(crate) use repositories::{MemOrderItemsRepository, MemOrdersRepository};
