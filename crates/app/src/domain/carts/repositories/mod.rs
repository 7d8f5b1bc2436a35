//! Cart Repositories

mod carts;
mod items;

pub(crate) use carts::MemCartsRepository;
pub(crate) use items::MemCartItemsRepository;
