//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::{
    carts::models::{LineRef, NewCartItem},
    catalog::models::{ProductId, ServiceId},
};

use crate::{cart::models::CartItemResponse, errors, extensions::*, state::State};

/// Add cart item request.
///
/// Exactly one of `productId` and `serviceId` names the line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// The product to add
    pub(crate) product_id: Option<i64>,

    /// The service to add
    pub(crate) service_id: Option<i64>,

    /// Units to add; defaults to one
    pub(crate) quantity: Option<i64>,

    /// Unit price agreed through negotiation, in rupees
    pub(crate) negotiated_price: Option<u64>,
}

/// Add Cart Item Handler
///
/// Adds a product or service line to the current user's cart. Re-adding a
/// line grows its quantity instead of duplicating it.
#[endpoint(tags("cart"), summary = "Add Cart Item")]
pub(crate) async fn handler(
    body: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_500()?;

    let request = body.into_inner();

    // A zero id means the side is unused.
    let product = request.product_id.filter(|id| *id != 0);
    let service = request.service_id.filter(|id| *id != 0);

    let line = match (product, service) {
        (Some(product), None) => LineRef::Product(ProductId::from_i64(product)),
        (None, Some(service)) => LineRef::Service(ServiceId::from_i64(service)),
        _ => {
            return Err(StatusError::bad_request().brief("Product ID or Service ID is required"));
        }
    };

    let quantity = match request.quantity {
        None => 1,
        Some(raw) => u32::try_from(raw)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| StatusError::bad_request().brief("Valid quantity is required"))?,
    };

    let item = NewCartItem {
        line,
        quantity,
        negotiated_price: request.negotiated_price,
    };

    let item = state
        .app
        .carts
        .add_item(user, item)
        .await
        .map_err(errors::carts)?;

    Ok(Json(item.into()))
}
