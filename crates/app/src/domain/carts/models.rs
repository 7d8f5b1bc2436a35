//! Cart Models

use jiff::Timestamp;
use souk::money::LinePricing;

use crate::{
    domain::catalog::models::{ProductId, ProductWithStore, ServiceId, ServiceWithStore},
    ids::{TypedId, UserId},
};

/// Cart id
pub type CartId = TypedId<Cart>;

/// A user's working cart. Each user has one live cart, created on first use
/// and kept (empty) after checkout.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub user: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart item id
pub type CartItemId = TypedId<CartItem>;

/// What a cart or order line sells: exactly one product or one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRef {
    /// A catalog product.
    Product(ProductId),

    /// A bookable service.
    Service(ServiceId),
}

impl LineRef {
    /// The product id, when this is a product line.
    #[must_use]
    pub fn product_id(self) -> Option<ProductId> {
        match self {
            Self::Product(id) => Some(id),
            Self::Service(_) => None,
        }
    }

    /// The service id, when this is a service line.
    #[must_use]
    pub fn service_id(self) -> Option<ServiceId> {
        match self {
            Self::Product(_) => None,
            Self::Service(id) => Some(id),
        }
    }
}

/// One line in a cart.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub line: LineRef,
    pub quantity: u32,
    /// Unit price agreed through negotiation, in rupees. Overrides the
    /// display price while set.
    pub negotiated_price: Option<u64>,
}

/// New CartItem Model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartItem {
    pub line: LineRef,
    pub quantity: u32,
    pub negotiated_price: Option<u64>,
}

/// A cart line joined with its catalog entity for display.
///
/// The joins are optional: a line whose product or service has vanished from
/// the catalog still renders, it just prices at zero.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub item: CartItem,
    pub product: Option<ProductWithStore>,
    pub service: Option<ServiceWithStore>,
}

impl CartItemView {
    /// The numbers pricing needs for this line.
    #[must_use]
    pub fn pricing(&self) -> LinePricing {
        let (original_price, final_price) = match (&self.product, &self.service) {
            (Some(with_store), _) => (
                with_store.product.original_price,
                with_store.product.final_price,
            ),
            (None, Some(with_store)) => (with_store.service.price, with_store.service.price),
            (None, None) => (0, 0),
        };

        LinePricing {
            original_price,
            final_price,
            negotiated_price: self.item.negotiated_price,
            quantity: self.item.quantity,
        }
    }
}

/// A user's cart fully joined and costed.
#[derive(Debug, Clone)]
pub struct CartView {
    pub id: CartId,
    pub user: UserId,
    pub items: Vec<CartItemView>,
    /// Sum of line totals at effective unit prices, in rupees. Delivery fee
    /// and tax are added at checkout, not here.
    pub total_amount: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
