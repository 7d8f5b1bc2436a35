//! Orders service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use souk::{
    lifecycle::OrderStatus,
    money::{self, ChargeSnapshot, LinePricing},
};
use tracing::info;

use crate::{
    domain::{
        carts::{
            MemCartItemsRepository, MemCartsRepository,
            models::{CartItem, LineRef},
        },
        catalog::{MemCatalogRepository, models::StoreId},
        orders::{
            MemOrderItemsRepository, MemOrdersRepository,
            errors::OrdersServiceError,
            models::{NewOrder, Order, OrderDetails, OrderId, OrderItemView},
            repositories::{InsertOrder, InsertOrderItem},
        },
    },
    ids::UserId,
    storage::{Storage, Tables},
};

/// Orders over the shared in-memory [`Storage`].
#[derive(Debug, Clone)]
pub struct MemOrdersService {
    storage: Storage,
    orders_repository: MemOrdersRepository,
    order_items_repository: MemOrderItemsRepository,
    carts_repository: MemCartsRepository,
    cart_items_repository: MemCartItemsRepository,
    catalog_repository: MemCatalogRepository,
}

impl MemOrdersService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            orders_repository: MemOrdersRepository::new(),
            order_items_repository: MemOrderItemsRepository::new(),
            carts_repository: MemCartsRepository::new(),
            cart_items_repository: MemCartItemsRepository::new(),
            catalog_repository: MemCatalogRepository::new(),
        }
    }

    fn line_pricing(&self, tables: &Tables, item: &CartItem) -> LinePricing {
        let (original_price, final_price) = match item.line {
            LineRef::Product(id) => self
                .catalog_repository
                .get_product(tables, id)
                .map_or((0, 0), |product| {
                    (product.original_price, product.final_price)
                }),
            LineRef::Service(id) => self
                .catalog_repository
                .get_service(tables, id)
                .map_or((0, 0), |service| (service.price, service.price)),
        };

        LinePricing {
            original_price,
            final_price,
            negotiated_price: item.negotiated_price,
            quantity: item.quantity,
        }
    }
}

#[async_trait]
impl OrdersService for MemOrdersService {
    async fn user_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError> {
        let tables = self.storage.read().await;

        Ok(self.orders_repository.list_for_user(&tables, user))
    }

    async fn store_orders(&self, store: StoreId) -> Result<Vec<Order>, OrdersServiceError> {
        let tables = self.storage.read().await;

        Ok(self.orders_repository.list_for_store(&tables, store))
    }

    async fn get_order(&self, order: OrderId) -> Result<OrderDetails, OrdersServiceError> {
        let tables = self.storage.read().await;

        let order = self
            .orders_repository
            .get(&tables, order)
            .ok_or(OrdersServiceError::NotFound)?;

        let items = self
            .order_items_repository
            .list_for_order(&tables, order.id)
            .into_iter()
            .map(|item| OrderItemView {
                product: item
                    .line
                    .product_id()
                    .and_then(|id| self.catalog_repository.product_with_store(&tables, id)),
                service: item
                    .line
                    .service_id()
                    .and_then(|id| self.catalog_repository.get_service(&tables, id)),
                item,
            })
            .collect();

        let store = self
            .catalog_repository
            .get_store(&tables, order.store_id)
            .ok_or(OrdersServiceError::StoreNotFound)?;

        Ok(OrderDetails {
            order,
            items,
            store,
        })
    }

    async fn create_from_cart(
        &self,
        user: UserId,
        order: NewOrder,
    ) -> Result<Order, OrdersServiceError> {
        if order.delivery_address.trim().is_empty() {
            return Err(OrdersServiceError::MissingDeliveryAddress);
        }

        // One write guard across pricing, the order insert and the cart
        // clear, so checkout is atomic per storage.
        let mut tables = self.storage.write().await;

        if self
            .catalog_repository
            .get_store(&tables, order.store_id)
            .is_none()
        {
            return Err(OrdersServiceError::StoreNotFound);
        }

        let cart = self
            .carts_repository
            .find_for_user(&tables, user)
            .ok_or(OrdersServiceError::EmptyCart)?;

        let items = self.cart_items_repository.list_for_cart(&tables, cart.id);

        if items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let lines: Vec<(LineRef, u32, ChargeSnapshot)> = items
            .iter()
            .map(|item| {
                (
                    item.line,
                    item.quantity,
                    self.line_pricing(&tables, item).charge_snapshot(),
                )
            })
            .collect();

        let total_amount = lines.iter().map(|(_, _, snapshot)| snapshot.total_price).sum();

        let estimated_delivery_time = Timestamp::now()
            .saturating_add(SignedDuration::from_mins(money::DELIVERY_ETA_MINUTES))
            .unwrap_or(Timestamp::MAX);

        let created = self.orders_repository.insert(
            &mut tables,
            InsertOrder {
                user,
                store_id: order.store_id,
                status: OrderStatus::Confirmed,
                total_amount,
                delivery_fee: money::DELIVERY_FEE,
                tax_amount: money::TAX_AMOUNT,
                discount_amount: 0,
                payment_method: order.payment_method,
                delivery_address: order.delivery_address,
                estimated_delivery_time,
            },
        );

        for (line, quantity, snapshot) in lines {
            self.order_items_repository.insert(
                &mut tables,
                created.id,
                InsertOrderItem {
                    line,
                    quantity,
                    price: snapshot.unit_price,
                    negotiated_price: snapshot.charged_unit_price,
                    total_price: snapshot.total_price,
                },
            );
        }

        // The cart itself survives checkout; only its lines go.
        self.cart_items_repository.clear_cart(&mut tables, cart.id);
        self.carts_repository.touch(&mut tables, cart.id);

        info!(
            order = %created.id,
            user = %user,
            total_amount = created.total_amount,
            "order created from cart"
        );

        Ok(created)
    }

    async fn update_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tables = self.storage.write().await;

        let existing = self
            .orders_repository
            .get(&tables, order)
            .ok_or(OrdersServiceError::NotFound)?;

        let next = existing.status.transition_to(status)?;

        let updated = self
            .orders_repository
            .set_status(&mut tables, order, next)
            .ok_or(OrdersServiceError::NotFound)?;

        info!(order = %updated.id, from = %existing.status, to = %next, "order status updated");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// The user's orders, newest first.
    async fn user_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError>;

    /// A store's incoming orders, newest first.
    async fn store_orders(&self, store: StoreId) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve an order with its lines and store.
    async fn get_order(&self, order: OrderId) -> Result<OrderDetails, OrdersServiceError>;

    /// Turn the user's cart into a confirmed order and clear the cart.
    async fn create_from_cart(
        &self,
        user: UserId,
        order: NewOrder,
    ) -> Result<Order, OrdersServiceError>;

    /// Move an order forward through the delivery lifecycle.
    async fn update_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
