//! Order wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use souk_app::domain::{
    catalog::models::{ProductId, ServiceId},
    orders::models::{Order, OrderDetails, OrderItem, OrderItemView},
};

use crate::{
    products::models::ProductDetailsResponse, services::models::ServiceResponse,
    stores::models::StoreResponse,
};

/// Order response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub(crate) id: i64,

    /// The user who placed the order
    pub(crate) user_id: i64,

    /// The store the order was placed with
    pub(crate) store_id: i64,

    /// Lifecycle stage: pending, confirmed, packed, on_the_way or delivered
    pub(crate) status: String,

    /// Sum of line totals at charged unit prices, in rupees
    pub(crate) total_amount: u64,

    /// Flat delivery charge, in rupees
    pub(crate) delivery_fee: u64,

    /// Flat tax charge, in rupees
    pub(crate) tax_amount: u64,

    /// Order-level discount, in rupees
    pub(crate) discount_amount: u64,

    /// How the buyer pays: cod, gpay or card
    pub(crate) payment_method: String,

    /// Where the order is delivered
    pub(crate) delivery_address: String,

    /// The date and time the order was placed
    pub(crate) created_at: String,

    /// The date and time the order last changed
    pub(crate) updated_at: String,

    /// When the order is expected to arrive
    pub(crate) estimated_delivery_time: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.into_i64(),
            user_id: order.user.into_i64(),
            store_id: order.store_id.into_i64(),
            status: order.status.to_string(),
            total_amount: order.total_amount,
            delivery_fee: order.delivery_fee,
            tax_amount: order.tax_amount,
            discount_amount: order.discount_amount,
            payment_method: order.payment_method.to_string(),
            delivery_address: order.delivery_address,
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
            estimated_delivery_time: order.estimated_delivery_time.to_string(),
        }
    }
}

/// Order item response
///
/// Money fields are frozen at checkout; `negotiatedPrice` is always present
/// and falls back to the list price when no deal was struck.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    /// The unique identifier of the order item
    pub(crate) id: i64,

    /// The order the line belongs to
    pub(crate) order_id: i64,

    /// The product on the line, for product lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product_id: Option<i64>,

    /// The service on the line, for service lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) service_id: Option<i64>,

    /// Units ordered
    pub(crate) quantity: u32,

    /// Unit list price at checkout time, in rupees
    pub(crate) price: u64,

    /// Unit price the buyer was charged, in rupees
    pub(crate) negotiated_price: u64,

    /// `negotiatedPrice` times `quantity`, in rupees
    pub(crate) total_price: u64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            id: item.id.into_i64(),
            order_id: item.order_id.into_i64(),
            product_id: item.line.product_id().map(ProductId::into_i64),
            service_id: item.line.service_id().map(ServiceId::into_i64),
            quantity: item.quantity,
            price: item.price,
            negotiated_price: item.negotiated_price,
            total_price: item.total_price,
        }
    }
}

/// One joined line of the order-detail view.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// The frozen order line, flattened to the top level
    #[serde(flatten)]
    pub(crate) item: OrderItemResponse,

    /// The product on the line with its store, when it still resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product: Option<ProductDetailsResponse>,

    /// The service on the line, when it still resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) service: Option<ServiceResponse>,
}

impl From<OrderItemView> for OrderLineResponse {
    fn from(view: OrderItemView) -> Self {
        OrderLineResponse {
            item: view.item.into(),
            product: view.product.map(Into::into),
            service: view.service.map(Into::into),
        }
    }
}

/// Order details response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderDetailsResponse {
    /// The order itself, flattened to the top level
    #[serde(flatten)]
    pub(crate) order: OrderResponse,

    /// The joined order lines
    pub(crate) items: Vec<OrderLineResponse>,

    /// The store the order was placed with
    pub(crate) store: StoreResponse,
}

impl From<OrderDetails> for OrderDetailsResponse {
    fn from(details: OrderDetails) -> Self {
        OrderDetailsResponse {
            order: details.order.into(),
            items: details.items.into_iter().map(Into::into).collect(),
            store: details.store.into(),
        }
    }
}
