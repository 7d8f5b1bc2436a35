//! Carts

pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;

pub(crate) use repositories::{MemCartItemsRepository, MemCartsRepository};
