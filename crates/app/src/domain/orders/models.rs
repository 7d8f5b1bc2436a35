//! Order Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use souk::lifecycle::OrderStatus;
use thiserror::Error;

use crate::{
    domain::{
        carts::models::LineRef,
        catalog::models::{ProductWithStore, Service, Store, StoreId},
    },
    ids::{TypedId, UserId},
};

/// Order id
pub type OrderId = TypedId<Order>;

/// A placed order. Money fields are frozen at checkout; only the status and
/// its timestamp move afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user: UserId,
    pub store_id: StoreId,
    pub status: OrderStatus,
    /// Sum of line totals at charged unit prices, in rupees.
    pub total_amount: u64,
    pub delivery_fee: u64,
    pub tax_amount: u64,
    pub discount_amount: u64,
    pub payment_method: PaymentMethod,
    pub delivery_address: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub estimated_delivery_time: Timestamp,
}

/// How the buyer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cod,

    /// UPI via Google Pay.
    Gpay,

    /// Credit or debit card.
    Card,
}

impl PaymentMethod {
    /// Wire name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cod => "cod",
            Self::Gpay => "gpay",
            Self::Card => "card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cod" => Ok(Self::Cod),
            "gpay" => Ok(Self::Gpay),
            "card" => Ok(Self::Card),
            other => Err(UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// A payment method string the checkout does not know.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

/// Order item id
pub type OrderItemId = TypedId<OrderItem>;

/// One frozen line of an order. Later catalog or cart edits never touch it.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub line: LineRef,
    pub quantity: u32,
    /// Unit list price at checkout time, in rupees.
    pub price: u64,
    /// Unit price the buyer was charged, in rupees.
    pub negotiated_price: u64,
    /// `negotiated_price` times `quantity`.
    pub total_price: u64,
}

/// Checkout input for turning a cart into an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// The store the order is placed with.
    pub store_id: StoreId,
    pub payment_method: PaymentMethod,
    pub delivery_address: String,
}

/// An order line joined with its catalog entity, when it still resolves.
#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub item: OrderItem,
    pub product: Option<ProductWithStore>,
    pub service: Option<Service>,
}

/// An order with its lines and store, for the order-detail screen.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<OrderItemView>,
    pub store: Store,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_methods_round_trip_their_wire_names() {
        for method in [PaymentMethod::Cod, PaymentMethod::Gpay, PaymentMethod::Card] {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
    }

    #[test]
    fn unknown_payment_method_is_rejected() {
        let result = "bitcoin".parse::<PaymentMethod>();

        assert_eq!(
            result,
            Err(UnknownPaymentMethod("bitcoin".to_string())),
            "unknown methods must not parse"
        );
    }

    #[test]
    fn cash_on_delivery_is_the_default() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cod);
    }
}
