//! In-Memory Storage
//!
//! Every entity table lives behind one `RwLock`. A service operation takes a
//! single guard for its whole read-modify-write sequence, so multi-step flows
//! such as "read cart, write order, clear cart" can never interleave with
//! another request touching the same rows.

use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{
    carts::models::{Cart, CartId, CartItem, CartItemId},
    catalog::models::{
        Category, CategoryId, Product, ProductId, Service, ServiceId, Store, StoreId,
    },
    orders::models::{Order, OrderId, OrderItem, OrderItemId},
};

/// One entity table: rows keyed by id, plus the table's id sequence.
///
/// Iteration follows id order, which is insertion order because ids are
/// allocated monotonically.
#[derive(Debug)]
pub(crate) struct Table<Id, Row> {
    rows: BTreeMap<Id, Row>,
    next_id: i64,
}

impl<Id, Row> Table<Id, Row>
where
    Id: Copy + Ord + From<i64>,
{
    /// Allocate the next id in this table's sequence. Ids start at 1.
    pub(crate) fn allocate_id(&mut self) -> Id {
        self.next_id += 1;

        Id::from(self.next_id)
    }

    pub(crate) fn insert(&mut self, id: Id, row: Row) {
        self.rows.insert(id, row);
    }

    pub(crate) fn get(&self, id: Id) -> Option<&Row> {
        self.rows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: Id) -> Option<&mut Row> {
        self.rows.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: Id) -> Option<Row> {
        self.rows.remove(&id)
    }

    /// Rows in insertion order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Rows in reverse insertion order, newest first.
    pub(crate) fn rows_rev(&self) -> impl Iterator<Item = &Row> {
        self.rows.values().rev()
    }
}

impl<Id, Row> Default for Table<Id, Row> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

/// All entity tables, guarded together.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) categories: Table<CategoryId, Category>,
    pub(crate) stores: Table<StoreId, Store>,
    pub(crate) products: Table<ProductId, Product>,
    pub(crate) services: Table<ServiceId, Service>,
    pub(crate) carts: Table<CartId, Cart>,
    pub(crate) cart_items: Table<CartItemId, CartItem>,
    pub(crate) orders: Table<OrderId, Order>,
    pub(crate) order_items: Table<OrderItemId, OrderItem>,
}

/// Shared handle to the in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    tables: Arc<RwLock<Tables>>,
}

impl Storage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
