//! Order Items Repository

use crate::{
    domain::{
        carts::models::LineRef,
        orders::models::{OrderId, OrderItem, OrderItemId},
    },
    storage::Tables,
};

/// A frozen order line ready to be written.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InsertOrderItem {
    pub(crate) line: LineRef,
    pub(crate) quantity: u32,
    pub(crate) price: u64,
    pub(crate) negotiated_price: u64,
    pub(crate) total_price: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemOrderItemsRepository;

impl MemOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn insert(
        &self,
        tables: &mut Tables,
        order: OrderId,
        item: InsertOrderItem,
    ) -> OrderItem {
        let id = tables.order_items.allocate_id();

        let item = OrderItem {
            id,
            order_id: order,
            line: item.line,
            quantity: item.quantity,
            price: item.price,
            negotiated_price: item.negotiated_price,
            total_price: item.total_price,
        };

        tables.order_items.insert(id, item.clone());

        item
    }

    /// Lines of the order, oldest first.
    pub(crate) fn list_for_order(&self, tables: &Tables, order: OrderId) -> Vec<OrderItem> {
        tables
            .order_items
            .rows()
            .filter(|item| item.order_id == order)
            .cloned()
            .collect()
    }
}
