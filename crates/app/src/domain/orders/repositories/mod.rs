//! Order Repositories

mod items;
mod orders;

pub(crate) use items::{InsertOrderItem, MemOrderItemsRepository};
pub(crate) use orders::{InsertOrder, MemOrdersRepository};
