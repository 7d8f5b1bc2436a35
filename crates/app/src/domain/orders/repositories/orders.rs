//! Orders Repository

use jiff::Timestamp;
use souk::lifecycle::OrderStatus;

use crate::{
    domain::{
        catalog::models::StoreId,
        orders::models::{Order, OrderId, PaymentMethod},
    },
    ids::UserId,
    storage::Tables,
};

/// A fully priced order ready to be written. The repository assigns the id
/// and the created/updated timestamps.
#[derive(Debug, Clone)]
pub(crate) struct InsertOrder {
    pub(crate) user: UserId,
    pub(crate) store_id: StoreId,
    pub(crate) status: OrderStatus,
    pub(crate) total_amount: u64,
    pub(crate) delivery_fee: u64,
    pub(crate) tax_amount: u64,
    pub(crate) discount_amount: u64,
    pub(crate) payment_method: PaymentMethod,
    pub(crate) delivery_address: String,
    pub(crate) estimated_delivery_time: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemOrdersRepository;

impl MemOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn insert(&self, tables: &mut Tables, order: InsertOrder) -> Order {
        let id = tables.orders.allocate_id();
        let now = Timestamp::now();

        let order = Order {
            id,
            user: order.user,
            store_id: order.store_id,
            status: order.status,
            total_amount: order.total_amount,
            delivery_fee: order.delivery_fee,
            tax_amount: order.tax_amount,
            discount_amount: order.discount_amount,
            payment_method: order.payment_method,
            delivery_address: order.delivery_address,
            created_at: now,
            updated_at: now,
            estimated_delivery_time: order.estimated_delivery_time,
        };

        tables.orders.insert(id, order.clone());

        order
    }

    pub(crate) fn get(&self, tables: &Tables, order: OrderId) -> Option<Order> {
        tables.orders.get(order).cloned()
    }

    /// A user's orders, newest first.
    pub(crate) fn list_for_user(&self, tables: &Tables, user: UserId) -> Vec<Order> {
        tables
            .orders
            .rows_rev()
            .filter(|order| order.user == user)
            .cloned()
            .collect()
    }

    /// A store's incoming orders, newest first.
    pub(crate) fn list_for_store(&self, tables: &Tables, store: StoreId) -> Vec<Order> {
        tables
            .orders
            .rows_rev()
            .filter(|order| order.store_id == store)
            .cloned()
            .collect()
    }

    /// Write a new status, bumping `updated_at`.
    pub(crate) fn set_status(
        &self,
        tables: &mut Tables,
        order: OrderId,
        status: OrderStatus,
    ) -> Option<Order> {
        let row = tables.orders.get_mut(order)?;

        row.status = status;
        row.updated_at = Timestamp::now();

        Some(row.clone())
    }
}
