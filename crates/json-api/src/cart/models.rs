//! Cart wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use souk_app::domain::{
    carts::models::{CartItem, CartItemView, CartView},
    catalog::models::{ProductId, ServiceId},
};

use crate::{products::models::ProductDetailsResponse, services::models::ServiceWithStoreResponse};

/// Cart item response
///
/// Exactly one of `productId` and `serviceId` is present; the other key is
/// left off the wire entirely, as is `negotiatedPrice` while no deal is
/// struck.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub(crate) id: i64,

    /// The cart the line belongs to
    pub(crate) cart_id: i64,

    /// The product on the line, for product lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product_id: Option<i64>,

    /// The service on the line, for service lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) service_id: Option<i64>,

    /// Units of the line
    pub(crate) quantity: u32,

    /// Unit price agreed through negotiation, in rupees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) negotiated_price: Option<u64>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        CartItemResponse {
            id: item.id.into_i64(),
            cart_id: item.cart_id.into_i64(),
            product_id: item.line.product_id().map(ProductId::into_i64),
            service_id: item.line.service_id().map(ServiceId::into_i64),
            quantity: item.quantity,
            negotiated_price: item.negotiated_price,
        }
    }
}

/// One joined line of the cart view.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The raw cart line, flattened to the top level
    #[serde(flatten)]
    pub(crate) item: CartItemResponse,

    /// The product on the line with its store, when it still resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product: Option<ProductDetailsResponse>,

    /// The service on the line with its store, when it still resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) service: Option<ServiceWithStoreResponse>,
}

impl From<CartItemView> for CartLineResponse {
    fn from(view: CartItemView) -> Self {
        CartLineResponse {
            item: view.item.into(),
            product: view.product.map(Into::into),
            service: view.service.map(Into::into),
        }
    }
}

/// Cart response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub(crate) id: i64,

    /// The user the cart belongs to
    pub(crate) user_id: i64,

    /// The joined cart lines
    pub(crate) items: Vec<CartLineResponse>,

    /// Sum of line totals at effective unit prices, in rupees
    pub(crate) total_amount: u64,
}

impl From<CartView> for CartResponse {
    fn from(cart: CartView) -> Self {
        CartResponse {
            id: cart.id.into_i64(),
            user_id: cart.user.into_i64(),
            items: cart.items.into_iter().map(Into::into).collect(),
            total_amount: cart.total_amount,
        }
    }
}
