//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::carts::models::CartItemId;

use crate::{cart::models::CartItemResponse, errors, extensions::*, state::State};

/// Update cart item request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// The new quantity for the line
    pub(crate) quantity: Option<i64>,
}

/// Update Cart Item Handler
///
/// Sets the quantity of a cart line.
#[endpoint(tags("cart"), summary = "Update Cart Item")]
pub(crate) async fn handler(
    item: PathParam<i64>,
    body: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(quantity) = body
        .into_inner()
        .quantity
        .and_then(|quantity| u32::try_from(quantity).ok())
        .filter(|quantity| *quantity > 0)
    else {
        return Err(StatusError::bad_request().brief("Valid quantity is required"));
    };

    let item = state
        .app
        .carts
        .update_item_quantity(CartItemId::from_i64(item.into_inner()), quantity)
        .await
        .map_err(errors::carts)?;

    Ok(Json(item.into()))
}
